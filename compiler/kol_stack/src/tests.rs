use super::*;

enum Nest {
    Leaf(i64),
    Neg(Box<Nest>),
}

fn build(depth: usize) -> Nest {
    let mut node = Nest::Leaf(7);
    for _ in 0..depth {
        node = Nest::Neg(Box::new(node));
    }
    node
}

fn eval(node: &Nest) -> i64 {
    ensure_sufficient_stack(|| match node {
        Nest::Leaf(value) => *value,
        Nest::Neg(inner) => -eval(inner),
    })
}

fn drop_iteratively(node: Nest) {
    let mut current = node;
    while let Nest::Neg(inner) = current {
        current = *inner;
    }
}

#[test]
fn shallow_nesting_evaluates() {
    let tree = build(3);
    assert_eq!(eval(&tree), -7);
    drop_iteratively(tree);
}

#[test]
fn deep_nesting_does_not_overflow() {
    let tree = build(200_000);
    assert_eq!(eval(&tree), 7);
    drop_iteratively(tree);
}

#[test]
fn passes_through_result() {
    let result: Result<u8, String> = ensure_sufficient_stack(|| Err("rule failed".to_string()));
    assert_eq!(result, Err("rule failed".to_string()));
}
