//! Parse expression combinators.
//!
//! An [`Expr`] tree is built once with the grammar and shared by every
//! parse. Matching an expression advances the stream over what it consumes
//! and records matched terms and child nodes in the current
//! [`Production`].
//!
//! Backtracking guarantees: a `Sequence` or `Repeat` that ends in
//! `NoMatch` leaves both the stream and the production exactly as it found
//! them. `Error` is never caught; it leaves whatever was consumed in place,
//! since the whole parse is abandoned.

use std::fmt;

use tracing::trace;

use crate::{MatchResult, ParserFactory, Production, RuleDispatch, RuleId, TokenStream};

const TERM_NO_MATCH: &str = "term does not match";
const NONTERM_AT_END: &str = "nonterminal at end of input";
const SEQUENCE_NO_MATCH: &str = "sequence does not match";
const CHOICE_NO_MATCH: &str = "no alternative matches";
const REPEAT_TOO_FEW: &str = "too few repetitions";

/// Predicate selecting the tokens a term accepts.
pub type TermPredicate<T> = Box<dyn Fn(&T) -> bool + Send + Sync>;

/// A combinator tree over tokens of type `T`.
pub enum Expr<T> {
    /// Matches without consuming.
    Empty,
    /// One token satisfying the predicate.
    Term(TermPredicate<T>),
    /// The rule with this id, producing a child node.
    NonTerm(RuleId),
    /// Every expression, in order.
    Sequence(Vec<Expr<T>>),
    /// The first expression that matches.
    Choice(Vec<Expr<T>>),
    /// At least `min` matches, then as many more as match.
    Repeat { min: usize, expr: Box<Expr<T>> },
    /// Zero or one match.
    Optional(Box<Expr<T>>),
}

impl<T> Expr<T> {
    pub fn term(predicate: impl Fn(&T) -> bool + Send + Sync + 'static) -> Self {
        Expr::Term(Box::new(predicate))
    }

    pub fn nonterm(rule: RuleId) -> Self {
        Expr::NonTerm(rule)
    }

    pub fn seq(items: impl IntoIterator<Item = Expr<T>>) -> Self {
        Expr::Sequence(items.into_iter().collect())
    }

    pub fn choice(items: impl IntoIterator<Item = Expr<T>>) -> Self {
        Expr::Choice(items.into_iter().collect())
    }

    pub fn repeat(min: usize, expr: Expr<T>) -> Self {
        Expr::Repeat {
            min,
            expr: Box::new(expr),
        }
    }

    pub fn zero_or_more(expr: Expr<T>) -> Self {
        Expr::repeat(0, expr)
    }

    pub fn one_or_more(expr: Expr<T>) -> Self {
        Expr::repeat(1, expr)
    }

    pub fn optional(expr: Expr<T>) -> Self {
        Expr::Optional(Box::new(expr))
    }

    /// Every rule id this expression refers to, in tree order.
    pub fn referenced_rules(&self) -> Vec<RuleId> {
        let mut out = Vec::new();
        self.collect_rules(&mut out);
        out
    }

    fn collect_rules(&self, out: &mut Vec<RuleId>) {
        match self {
            Expr::Empty | Expr::Term(_) => {}
            Expr::NonTerm(rule) => out.push(*rule),
            Expr::Sequence(items) | Expr::Choice(items) => {
                for item in items {
                    item.collect_rules(out);
                }
            }
            Expr::Repeat { expr, .. } | Expr::Optional(expr) => expr.collect_rules(out),
        }
    }

    /// Match this expression at the stream's position.
    pub fn matches<S, F, G>(
        &self,
        production: &mut Production<T, F::Node>,
        factory: &mut F,
        grammar: &G,
        stream: &mut S,
    ) -> MatchResult
    where
        S: TokenStream<Token = T>,
        F: ParserFactory<T>,
        G: RuleDispatch<T, F>,
    {
        match self {
            Expr::Empty => MatchResult::MATCHED,

            Expr::Term(predicate) => match stream.peek() {
                Some(token) if predicate(&token) => {
                    trace!(offset = stream.offset(), "term matched");
                    stream.advance();
                    production.add_terminal(token);
                    MatchResult::MATCHED
                }
                _ => MatchResult::no_match(TERM_NO_MATCH),
            },

            Expr::NonTerm(rule) => {
                if stream.is_at_end() {
                    return MatchResult::no_match(NONTERM_AT_END);
                }
                match grammar.match_rule(factory, *rule, stream) {
                    MatchResult::Matched(node) => {
                        production.add_nonterm(node);
                        MatchResult::MATCHED
                    }
                    MatchResult::NoMatch(reason) => MatchResult::NoMatch(reason),
                    MatchResult::Error(message) => MatchResult::Error(message),
                }
            }

            Expr::Sequence(items) => {
                let saved = *stream;
                let checkpoint = production.checkpoint();
                for item in items {
                    match item.matches(production, factory, grammar, stream) {
                        MatchResult::Matched(()) => {}
                        MatchResult::NoMatch(_) => {
                            *stream = saved;
                            production.rollback(checkpoint);
                            return MatchResult::no_match(SEQUENCE_NO_MATCH);
                        }
                        error @ MatchResult::Error(_) => return error,
                    }
                }
                MatchResult::MATCHED
            }

            Expr::Choice(alternatives) => {
                for alternative in alternatives {
                    let result = alternative.matches(production, factory, grammar, stream);
                    if !result.is_no_match() {
                        return result;
                    }
                }
                MatchResult::no_match(CHOICE_NO_MATCH)
            }

            Expr::Repeat { min, expr } => {
                let saved = *stream;
                let checkpoint = production.checkpoint();
                for _ in 0..*min {
                    match expr.matches(production, factory, grammar, stream) {
                        MatchResult::Matched(()) => {}
                        MatchResult::NoMatch(_) => {
                            *stream = saved;
                            production.rollback(checkpoint);
                            return MatchResult::no_match(REPEAT_TOO_FEW);
                        }
                        error @ MatchResult::Error(_) => return error,
                    }
                }
                loop {
                    if stream.is_at_end() {
                        return MatchResult::MATCHED;
                    }
                    let before = stream.offset();
                    match expr.matches(production, factory, grammar, stream) {
                        // An iteration that consumed nothing would repeat forever.
                        MatchResult::Matched(()) if stream.offset() == before => {
                            return MatchResult::MATCHED;
                        }
                        MatchResult::Matched(()) => {}
                        MatchResult::NoMatch(_) => return MatchResult::MATCHED,
                        error @ MatchResult::Error(_) => return error,
                    }
                }
            }

            Expr::Optional(expr) => match expr.matches(production, factory, grammar, stream) {
                MatchResult::NoMatch(_) => MatchResult::MATCHED,
                other => other,
            },
        }
    }
}

impl<T> fmt::Debug for Expr<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Empty => f.write_str("Empty"),
            Expr::Term(_) => f.write_str("Term(..)"),
            Expr::NonTerm(rule) => write!(f, "NonTerm({rule})"),
            Expr::Sequence(items) => f.debug_tuple("Sequence").field(items).finish(),
            Expr::Choice(items) => f.debug_tuple("Choice").field(items).finish(),
            Expr::Repeat { min, expr } => f
                .debug_struct("Repeat")
                .field("min", min)
                .field("expr", expr)
                .finish(),
            Expr::Optional(expr) => f.debug_tuple("Optional").field(expr).finish(),
        }
    }
}
