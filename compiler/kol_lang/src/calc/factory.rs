use kol_parse::{ParserFactory, RuleId};

use super::{CalcKind, CalcToken, EXPR, FACTOR, TERM};
use crate::{AstArena, BinaryOp, ConstKind, Node, NodeId, UnaryOp};

/// Builds calculator nodes into an arena.
#[derive(Debug, Default)]
pub struct CalcFactory<'src> {
    arena: AstArena<'src>,
}

impl<'src> CalcFactory<'src> {
    pub fn into_arena(self) -> AstArena<'src> {
        self.arena
    }

    fn null(&mut self) -> NodeId {
        self.arena.alloc(Node::Null)
    }
}

impl<'src> ParserFactory<CalcToken<'src>> for CalcFactory<'src> {
    type Node = NodeId;

    fn create_null(&mut self) -> NodeId {
        self.null()
    }

    fn create_empty(&mut self, _rule: RuleId) -> NodeId {
        self.arena.alloc(Node::Nop)
    }

    fn create_term(&mut self, rule: RuleId, term: CalcToken<'src>) -> NodeId {
        if rule == FACTOR && term.kind == CalcKind::Integer {
            self.arena.alloc(Node::Const {
                kind: ConstKind::Integer,
                text: term.text,
            })
        } else {
            self.null()
        }
    }

    fn create_nonterm(&mut self, _rule: RuleId, _node: NodeId) -> NodeId {
        self.null()
    }

    fn create_term_nonterm(&mut self, rule: RuleId, term: CalcToken<'src>, node: NodeId) -> NodeId {
        let op = match (rule, term.kind) {
            (FACTOR, CalcKind::Plus) => UnaryOp::Plus,
            (FACTOR, CalcKind::Minus) => UnaryOp::Minus,
            _ => return self.null(),
        };
        self.arena.alloc(Node::Unary {
            op,
            symbol: term.text,
            operand: node,
        })
    }

    fn create_nonterm_nonterm(&mut self, _rule: RuleId, _lhs: NodeId, rhs: NodeId) -> NodeId {
        rhs
    }

    fn create_nonterm_term_nonterm(
        &mut self,
        rule: RuleId,
        lhs: NodeId,
        term: CalcToken<'src>,
        rhs: NodeId,
    ) -> NodeId {
        let op = match (rule, term.kind) {
            (EXPR, CalcKind::Plus) => BinaryOp::Add,
            (EXPR, CalcKind::Minus) => BinaryOp::Sub,
            (TERM, CalcKind::Multiply) => BinaryOp::Mul,
            (TERM, CalcKind::Divide) => BinaryOp::IntDiv,
            _ => return self.null(),
        };
        self.arena.alloc(Node::Binary {
            op,
            symbol: term.text,
            lhs,
            rhs,
        })
    }

    fn create_nonterm_list(&mut self, _rule: RuleId, nodes: Vec<NodeId>) -> NodeId {
        self.arena.alloc(Node::Compound { statements: nodes })
    }

    fn create_term_nonterm_list(
        &mut self,
        _rule: RuleId,
        _terms: Vec<CalcToken<'src>>,
        _nodes: Vec<NodeId>,
    ) -> NodeId {
        self.null()
    }
}
