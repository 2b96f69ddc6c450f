use kol_stack::ensure_sufficient_stack;

use crate::{Ast, AstArena, BinaryOp, EvalError, Node, NodeId, UnaryOp};

/// Evaluate a calculator tree.
pub fn interpret(ast: &Ast<'_>) -> Result<i32, EvalError> {
    eval(&ast.arena, ast.root)
}

fn eval(arena: &AstArena<'_>, id: NodeId) -> Result<i32, EvalError> {
    ensure_sufficient_stack(|| eval_node(arena, id))
}

fn eval_node(arena: &AstArena<'_>, id: NodeId) -> Result<i32, EvalError> {
    match arena.get(id) {
        Node::Const { text, .. } => text.parse().map_err(|_| EvalError::InvalidNumber {
            text: (*text).to_string(),
        }),
        Node::Unary { op, operand, .. } => {
            let value = eval(arena, *operand)?;
            match op {
                UnaryOp::Plus => Ok(value),
                UnaryOp::Minus => value
                    .checked_neg()
                    .ok_or(EvalError::Overflow { op: "-" }),
            }
        }
        Node::Binary { op, lhs, rhs, .. } => {
            let lhs = eval(arena, *lhs)?;
            let rhs = eval(arena, *rhs)?;
            let result = match op {
                BinaryOp::Add => lhs.checked_add(rhs),
                BinaryOp::Sub => lhs.checked_sub(rhs),
                BinaryOp::Mul => lhs.checked_mul(rhs),
                BinaryOp::IntDiv if rhs == 0 => return Err(EvalError::DivisionByZero),
                BinaryOp::IntDiv => lhs.checked_div(rhs),
                BinaryOp::FloatDiv | BinaryOp::Assign => {
                    return Err(EvalError::Unsupported {
                        node: "non-integer operator",
                    })
                }
            };
            result.ok_or(EvalError::Overflow { op: op.as_symbol() })
        }
        other => Err(EvalError::Unsupported {
            node: other.kind_name(),
        }),
    }
}
