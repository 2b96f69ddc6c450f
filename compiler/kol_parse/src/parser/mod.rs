//! Parse entry point.

use tracing::debug;

use crate::{Grammar, MatchResult, ParseError, ParserFactory, RuleDispatch, RuleId, TokenStream};

/// Parses whole inputs with rule 0 of a grammar.
#[derive(Debug)]
pub struct Parser<T> {
    grammar: Grammar<T>,
}

impl<T> Parser<T> {
    pub fn new(grammar: Grammar<T>) -> Self {
        Parser { grammar }
    }

    pub fn grammar(&self) -> &Grammar<T> {
        &self.grammar
    }

    /// Match rule 0 against `stream`, requiring every token to be consumed.
    pub fn parse<S, F>(&self, factory: &mut F, stream: S) -> Result<F::Node, ParseError>
    where
        S: TokenStream<Token = T>,
        F: ParserFactory<T>,
    {
        let mut stream = stream;
        match self.grammar.match_rule(factory, RuleId::ROOT, &mut stream) {
            MatchResult::Matched(node) if stream.is_at_end() => {
                debug!("parse succeeded");
                Ok(node)
            }
            MatchResult::Matched(_) => {
                debug!(offset = stream.offset(), "tokens left after start rule");
                Err(ParseError::TokensLeft {
                    offset: stream.offset(),
                })
            }
            MatchResult::NoMatch(reason) => {
                debug!(reason, "start rule does not match");
                Err(ParseError::NoMatch)
            }
            MatchResult::Error(message) => {
                debug!(%message, "parse failed");
                Err(ParseError::Failed { message })
            }
        }
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
