use kol_parse::{ParserFactory, RuleId};

use super::rules::{
    ASSIGNMENT, BLOCK, COMPOUND, DECLARATIONS, EXPR, FACTOR, PROGRAM, STATEMENT_LIST, TERM,
    TYPE_SPEC, VARIABLE, VAR_DECL,
};
use super::{PascalKind, PascalToken};
use crate::{AstArena, BinaryOp, ConstKind, Node, NodeId, UnaryOp};

/// Builds Pascal nodes into an arena.
///
/// Declarations and statement lists travel between rules as
/// [`Node::RawList`]s and type names as [`Node::Raw`]; the block and
/// compound-statement productions unpack them.
#[derive(Debug, Default)]
pub struct PascalFactory<'src> {
    arena: AstArena<'src>,
}

impl<'src> PascalFactory<'src> {
    pub fn into_arena(self) -> AstArena<'src> {
        self.arena
    }

    fn null(&mut self) -> NodeId {
        self.arena.alloc(Node::Null)
    }

    fn raw_list(&mut self, items: Vec<NodeId>) -> NodeId {
        self.arena.alloc(Node::RawList { items })
    }
}

impl<'src> ParserFactory<PascalToken<'src>> for PascalFactory<'src> {
    type Node = NodeId;

    fn create_null(&mut self) -> NodeId {
        self.null()
    }

    fn create_empty(&mut self, _rule: RuleId) -> NodeId {
        self.arena.alloc(Node::Nop)
    }

    fn create_term(&mut self, rule: RuleId, term: PascalToken<'src>) -> NodeId {
        let node = match (rule, term.kind) {
            (TYPE_SPEC, _) => Node::Raw { text: term.text },
            (FACTOR, PascalKind::IntegerConst) => Node::Const {
                kind: ConstKind::Integer,
                text: term.text,
            },
            (FACTOR, PascalKind::RealConst) => Node::Const {
                kind: ConstKind::Real,
                text: term.text,
            },
            (VARIABLE, _) => Node::Var {
                name: term.text.to_ascii_lowercase(),
            },
            _ => Node::Null,
        };
        self.arena.alloc(node)
    }

    fn create_nonterm(&mut self, rule: RuleId, node: NodeId) -> NodeId {
        match (rule, self.arena.get(node)) {
            (COMPOUND, Node::RawList { items }) => {
                let statements = items.clone();
                self.arena.alloc(Node::Compound { statements })
            }
            _ => self.null(),
        }
    }

    fn create_term_nonterm(&mut self, rule: RuleId, term: PascalToken<'src>, node: NodeId) -> NodeId {
        let op = match (rule, term.kind) {
            (FACTOR, PascalKind::Plus) => UnaryOp::Plus,
            (FACTOR, PascalKind::Minus) => UnaryOp::Minus,
            _ => return self.null(),
        };
        self.arena.alloc(Node::Unary {
            op,
            symbol: term.text,
            operand: node,
        })
    }

    fn create_nonterm_nonterm(&mut self, rule: RuleId, lhs: NodeId, rhs: NodeId) -> NodeId {
        match rule {
            PROGRAM => self.arena.alloc(Node::Program {
                name: lhs,
                block: rhs,
            }),
            BLOCK => {
                let declarations = self.arena.list_items(lhs).to_vec();
                self.arena.alloc(Node::Block {
                    declarations,
                    body: rhs,
                })
            }
            _ => self.null(),
        }
    }

    fn create_nonterm_term_nonterm(
        &mut self,
        rule: RuleId,
        lhs: NodeId,
        term: PascalToken<'src>,
        rhs: NodeId,
    ) -> NodeId {
        let op = match (rule, term.kind) {
            (ASSIGNMENT, PascalKind::Assign) => BinaryOp::Assign,
            (EXPR, PascalKind::Plus) => BinaryOp::Add,
            (EXPR, PascalKind::Minus) => BinaryOp::Sub,
            (TERM, PascalKind::Multiply) => BinaryOp::Mul,
            (TERM, PascalKind::IntegerDiv) => BinaryOp::IntDiv,
            (TERM, PascalKind::FloatDiv) => BinaryOp::FloatDiv,
            _ => return self.null(),
        };
        self.arena.alloc(Node::Binary {
            op,
            symbol: term.text,
            lhs,
            rhs,
        })
    }

    fn create_nonterm_list(&mut self, rule: RuleId, nodes: Vec<NodeId>) -> NodeId {
        match rule {
            // `VAR a: INTEGER; b, c: REAL;` arrives as one list per line.
            DECLARATIONS => {
                let declarations = nodes
                    .iter()
                    .flat_map(|&node| self.arena.list_items(node))
                    .copied()
                    .collect();
                self.raw_list(declarations)
            }
            STATEMENT_LIST => self.raw_list(nodes),
            _ => self.null(),
        }
    }

    fn create_term_nonterm_list(
        &mut self,
        rule: RuleId,
        terms: Vec<PascalToken<'src>>,
        nodes: Vec<NodeId>,
    ) -> NodeId {
        if rule != VAR_DECL {
            return self.null();
        }
        let ty = match nodes.first().map(|&node| self.arena.get(node)) {
            Some(Node::Raw { text }) => *text,
            _ => return self.null(),
        };
        let declarations = terms
            .iter()
            .filter(|term| term.kind == PascalKind::Id)
            .map(|id| self.arena.alloc(Node::VarDecl { name: id.text, ty }))
            .collect();
        self.raw_list(declarations)
    }
}
