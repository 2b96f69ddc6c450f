use std::fmt::Write;

use kol_stack::ensure_sufficient_stack;
use rustc_hash::FxHashMap;
use tracing::trace;

use crate::{Ast, AstArena, BinaryOp, EvalError, Node, NodeId, UnaryOp};

/// Tree-walking interpreter holding the global scope.
///
/// All variables are `f64`. `DIV` truncates toward zero and `/` is float
/// division; either one fails on a zero divisor.
#[derive(Debug, Default)]
pub struct Interpreter {
    globals: FxHashMap<String, f64>,
}

impl Interpreter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Execute the statements of `ast`.
    pub fn run(&mut self, ast: &Ast<'_>) -> Result<(), EvalError> {
        self.exec(&ast.arena, ast.root)
    }

    pub fn value(&self, name: &str) -> Option<f64> {
        self.globals.get(name).copied()
    }

    /// Number of assigned variables.
    pub fn len(&self) -> usize {
        self.globals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.globals.is_empty()
    }

    /// Assigned variables in name order.
    pub fn variables(&self) -> Vec<(&str, f64)> {
        let mut vars: Vec<_> = self
            .globals
            .iter()
            .map(|(name, &value)| (name.as_str(), value))
            .collect();
        vars.sort_unstable_by(|a, b| a.0.cmp(b.0));
        vars
    }

    /// One `name := value` line per variable, in name order.
    ///
    /// Values use `f64`'s `Display`, the shortest text that reads back as
    /// the same number, so `20 / 7 + 3.14` lists as `5.997142857142857`
    /// rather than a six-digit rounding.
    pub fn list_variables(&self) -> String {
        let mut out = String::new();
        for (name, value) in self.variables() {
            let _ = writeln!(out, "{name} := {value}");
        }
        out
    }

    fn exec(&mut self, arena: &AstArena<'_>, id: NodeId) -> Result<(), EvalError> {
        ensure_sufficient_stack(|| self.exec_node(arena, id))
    }

    fn exec_node(&mut self, arena: &AstArena<'_>, id: NodeId) -> Result<(), EvalError> {
        match arena.get(id) {
            Node::Program { block, .. } => self.exec(arena, *block),
            Node::Block { body, .. } => self.exec(arena, *body),
            Node::Compound { statements } => {
                for &statement in statements {
                    self.exec(arena, statement)?;
                }
                Ok(())
            }
            Node::Binary {
                op: BinaryOp::Assign,
                lhs,
                rhs,
                ..
            } => {
                let Node::Var { name } = arena.get(*lhs) else {
                    return Err(EvalError::Unsupported {
                        node: arena.get(*lhs).kind_name(),
                    });
                };
                let value = self.eval(arena, *rhs)?;
                trace!(%name, value, "assign");
                self.globals.insert(name.clone(), value);
                Ok(())
            }
            Node::Nop | Node::VarDecl { .. } => Ok(()),
            other => Err(EvalError::Unsupported {
                node: other.kind_name(),
            }),
        }
    }

    fn eval(&self, arena: &AstArena<'_>, id: NodeId) -> Result<f64, EvalError> {
        ensure_sufficient_stack(|| self.eval_node(arena, id))
    }

    fn eval_node(&self, arena: &AstArena<'_>, id: NodeId) -> Result<f64, EvalError> {
        match arena.get(id) {
            Node::Const { text, .. } => text.parse().map_err(|_| EvalError::InvalidNumber {
                text: (*text).to_string(),
            }),
            Node::Var { name } => self
                .value(name)
                .ok_or_else(|| EvalError::UndefinedVariable { name: name.clone() }),
            Node::Unary { op, operand, .. } => {
                let value = self.eval(arena, *operand)?;
                Ok(match op {
                    UnaryOp::Plus => value,
                    UnaryOp::Minus => -value,
                })
            }
            Node::Binary { op, lhs, rhs, .. } => {
                let lhs = self.eval(arena, *lhs)?;
                let rhs = self.eval(arena, *rhs)?;
                match op {
                    BinaryOp::Add => Ok(lhs + rhs),
                    BinaryOp::Sub => Ok(lhs - rhs),
                    BinaryOp::Mul => Ok(lhs * rhs),
                    BinaryOp::IntDiv | BinaryOp::FloatDiv if rhs == 0.0 => {
                        Err(EvalError::DivisionByZero)
                    }
                    BinaryOp::IntDiv => Ok((lhs / rhs).trunc()),
                    BinaryOp::FloatDiv => Ok(lhs / rhs),
                    BinaryOp::Assign => Err(EvalError::Unsupported {
                        node: "assignment in expression",
                    }),
                }
            }
            other => Err(EvalError::Unsupported {
                node: other.kind_name(),
            }),
        }
    }
}
