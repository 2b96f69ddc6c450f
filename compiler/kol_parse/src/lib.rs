//! Grammar-driven backtracking parser.
//!
//! A grammar is a table of [`Rule`]s addressed by [`RuleId`]. Each rule
//! pairs one or more [`Shape`]s with an [`Expr`] combinator tree. Parsing
//! a rule runs its expression against a [`TokenStream`]; the pieces the
//! expression matches are collected in a [`Production`], and on success
//! the production hands them to a client [`ParserFactory`] which builds
//! the AST node. The engine never looks inside nodes.
//!
//! # Failure model
//!
//! Every combinator returns a [`MatchResult`]:
//!
//! - `NoMatch` is local and recoverable. Sequences restore the stream,
//!   choices move on to the next alternative.
//! - `Error` is fatal and propagates unchanged to [`Parser::parse`].
//!
//! Backtracking is a copy of the stream: streams are `Copy`, so saving a
//! position is an assignment.
//!
//! # Recursion
//!
//! Rules recurse through [`RuleDispatch`], which [`Grammar`] implements by
//! direct indexing. Left-recursive grammars recurse forever; deep but
//! finite nesting is handled by growing the stack.

mod error;
mod expr;
mod factory;
mod grammar;
mod outcome;
mod parser;
mod production;
mod rule_id;
mod stream;

pub use error::{GrammarError, ParseError};
pub use expr::{Expr, TermPredicate};
pub use factory::ParserFactory;
pub use grammar::{Alternative, Grammar, Rule, RuleDispatch};
pub use outcome::MatchResult;
pub use parser::Parser;
pub use production::{Checkpoint, Production, Shape};
pub use rule_id::RuleId;
pub use stream::{SliceStream, TokenStream};

#[cfg(test)]
mod test_support;
