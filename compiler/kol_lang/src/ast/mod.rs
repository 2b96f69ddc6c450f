//! Flat AST shared by the client languages.
//!
//! Nodes live in an [`AstArena`] and refer to each other by [`NodeId`]
//! instead of boxes: a factory only ever appends, and a finished tree is
//! the arena plus the id of its root ([`Ast`]). Lexemes are borrowed from
//! the source, so an arena never outlives the text it was parsed from.

use std::fmt;

/// Index of a node in its arena.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[repr(transparent)]
pub struct NodeId(u32);

impl NodeId {
    #[inline]
    pub const fn new(index: u32) -> Self {
        NodeId(index)
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

/// Literal flavour of a constant.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ConstKind {
    Integer,
    Real,
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum UnaryOp {
    Plus,
    Minus,
}

impl UnaryOp {
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Plus => "+",
            Self::Minus => "-",
        }
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    /// Division truncating toward zero (`/` in the calculator, `DIV` in
    /// Pascal).
    IntDiv,
    FloatDiv,
    Assign,
}

impl BinaryOp {
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::IntDiv => "div",
            Self::FloatDiv => "/",
            Self::Assign => ":=",
        }
    }
}

/// One AST node.
///
/// `symbol` fields keep the operator exactly as written; printers show the
/// normalized `op` instead.
#[derive(Clone, Debug, PartialEq)]
pub enum Node<'src> {
    /// Placeholder built where a production had nothing to offer.
    Null,
    /// The empty statement.
    Nop,
    Const {
        kind: ConstKind,
        text: &'src str,
    },
    /// Variable reference, name already case-folded.
    Var {
        name: String,
    },
    Unary {
        op: UnaryOp,
        symbol: &'src str,
        operand: NodeId,
    },
    Binary {
        op: BinaryOp,
        symbol: &'src str,
        lhs: NodeId,
        rhs: NodeId,
    },
    Compound {
        statements: Vec<NodeId>,
    },
    Program {
        name: NodeId,
        block: NodeId,
    },
    Block {
        declarations: Vec<NodeId>,
        body: NodeId,
    },
    VarDecl {
        name: &'src str,
        ty: &'src str,
    },
    /// Bare lexeme carried between productions (e.g. a type name).
    Raw {
        text: &'src str,
    },
    /// Node list carried between productions before it is folded into a
    /// block or compound statement.
    RawList {
        items: Vec<NodeId>,
    },
}

impl Node<'_> {
    /// Short kind name for diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Node::Null => "null",
            Node::Nop => "nop",
            Node::Const { .. } => "constant",
            Node::Var { .. } => "variable",
            Node::Unary { .. } => "unary operator",
            Node::Binary { .. } => "binary operator",
            Node::Compound { .. } => "compound statement",
            Node::Program { .. } => "program",
            Node::Block { .. } => "block",
            Node::VarDecl { .. } => "variable declaration",
            Node::Raw { .. } => "raw",
            Node::RawList { .. } => "raw list",
        }
    }
}

/// Append-only node storage.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AstArena<'src> {
    nodes: Vec<Node<'src>>,
}

impl<'src> AstArena<'src> {
    pub fn new() -> Self {
        AstArena { nodes: Vec::new() }
    }

    /// Store `node`, returning its id.
    pub fn alloc(&mut self, node: Node<'src>) -> NodeId {
        let Ok(index) = u32::try_from(self.nodes.len()) else {
            arena_exhausted();
        };
        self.nodes.push(node);
        NodeId::new(index)
    }

    #[inline]
    pub fn get(&self, id: NodeId) -> &Node<'src> {
        &self.nodes[id.index()]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The items of a [`Node::RawList`], or nothing for any other node.
    pub fn list_items(&self, id: NodeId) -> &[NodeId] {
        match self.get(id) {
            Node::RawList { items } => items,
            _ => &[],
        }
    }
}

#[cold]
#[inline(never)]
fn arena_exhausted() -> ! {
    panic!("AST arena exhausted: more than u32::MAX nodes")
}

/// A parsed tree: its arena and root.
#[derive(Clone, Debug, PartialEq)]
pub struct Ast<'src> {
    pub arena: AstArena<'src>,
    pub root: NodeId,
}

impl<'src> Ast<'src> {
    pub fn root_node(&self) -> &Node<'src> {
        self.arena.get(self.root)
    }
}

#[cfg(test)]
mod tests;
