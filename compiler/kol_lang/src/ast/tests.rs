use pretty_assertions::assert_eq;

use super::{Ast, AstArena, BinaryOp, ConstKind, Node, NodeId, UnaryOp};

#[test]
fn ids_follow_allocation_order() {
    let mut arena = AstArena::new();
    assert!(arena.is_empty());
    let a = arena.alloc(Node::Nop);
    let b = arena.alloc(Node::Const {
        kind: ConstKind::Integer,
        text: "4",
    });
    assert_eq!((a.raw(), b.index()), (0, 1));
    assert_eq!(arena.len(), 2);
    assert_eq!(arena.get(a), &Node::Nop);
    assert_eq!(format!("{b:?}"), "NodeId(1)");
}

#[test]
fn list_items_only_for_raw_lists() {
    let mut arena = AstArena::new();
    let x = arena.alloc(Node::Var { name: "x".into() });
    let list = arena.alloc(Node::RawList { items: vec![x, x] });
    assert_eq!(arena.list_items(list), [x, x]);
    assert!(arena.list_items(x).is_empty());
}

#[test]
fn root_node_resolves_through_arena() {
    let mut arena = AstArena::new();
    let lhs = arena.alloc(Node::Var { name: "a".into() });
    let rhs = arena.alloc(Node::Const {
        kind: ConstKind::Real,
        text: "1.5",
    });
    let root = arena.alloc(Node::Binary {
        op: BinaryOp::Assign,
        symbol: ":=",
        lhs,
        rhs,
    });
    let ast = Ast { arena, root };
    assert_eq!(ast.root_node().kind_name(), "binary operator");
    assert_eq!(NodeId::new(root.raw()), root);
}

#[test]
fn operator_symbols() {
    assert_eq!(BinaryOp::IntDiv.as_symbol(), "div");
    assert_eq!(UnaryOp::Plus.as_symbol(), "+");
    assert_eq!(UnaryOp::Minus.as_symbol(), "-");
    assert_eq!(BinaryOp::Assign.as_symbol(), ":=");
}
