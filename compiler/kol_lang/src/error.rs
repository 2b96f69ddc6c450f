//! Errors raised while parsing and running client programs.

use kol_parse::{GrammarError, ParseError};

/// A runtime failure of an interpreter.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EvalError {
    #[error("division by zero")]
    DivisionByZero,

    #[error("integer overflow in `{op}`")]
    Overflow { op: &'static str },

    #[error("invalid number literal `{text}`")]
    InvalidNumber { text: String },

    #[error("undefined variable `{name}`")]
    UndefinedVariable { name: String },

    /// The tree holds a node the interpreter has no meaning for, e.g. a
    /// placeholder left by a malformed production.
    #[error("cannot evaluate a {node} node")]
    Unsupported { node: &'static str },
}

/// Any failure between source text and a result.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Grammar(#[from] GrammarError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Eval(#[from] EvalError),
}
