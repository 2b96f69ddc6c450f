//! Errors surfaced by grammar construction and parsing.

use crate::RuleId;

/// A parse that did not produce a tree.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// A rule failed fatally, e.g. input ended where a rule had to start.
    #[error("{message}")]
    Failed { message: String },

    /// The start rule did not match the input.
    #[error("rule #0 doesn't match")]
    NoMatch,

    /// The start rule matched a prefix but input remains.
    #[error("tokens left at offset {offset}")]
    TokensLeft { offset: usize },
}

/// A rule table that cannot be dispatched.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GrammarError {
    #[error("grammar has no rules")]
    Empty,

    #[error("{id} is declared at position {position}")]
    MisplacedRule { position: usize, id: RuleId },

    #[error("{id} has no alternatives")]
    NoAlternatives { id: RuleId },

    #[error("{rule} refers to undefined {target}")]
    UnknownRule { rule: RuleId, target: RuleId },
}
