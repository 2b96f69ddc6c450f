//! Ordered lexical rule tables.
//!
//! [`RuleTable::match_next`] is the whole tokenizer:
//!
//! 1. At end of input, yield the end-of-input token (empty text) without
//!    moving. Asking again at the end yields it again.
//! 2. Otherwise try each rule in declaration order. The first rule whose
//!    matcher consumes a non-empty prefix wins; order, not length, decides.
//! 3. A winning skip rule discards its lexeme and matching restarts after it.
//! 4. If no rule applies, one character is consumed as an unknown token.
//!
//! Because a winning rule must consume at least one byte, a skip rule built
//! from a run that matches nothing at the current position simply does not
//! apply, and step 3 always makes progress.

use tracing::trace;

use crate::{Cursor, Matcher, Token, TokenKind};

/// What a rule does with the text it matches.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RuleAction<K> {
    Emit(K),
    Skip,
}

/// A matcher paired with its action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LexRule<K> {
    pub matcher: Matcher,
    pub action: RuleAction<K>,
}

/// An ordered list of lexical rules plus the fallback kinds.
#[derive(Clone, Debug)]
pub struct RuleTable<K> {
    rules: Vec<LexRule<K>>,
    unknown: K,
    eof: K,
}

impl<K: TokenKind> RuleTable<K> {
    /// Empty table. `unknown` labels unmatched characters, `eof` labels the
    /// end-of-input token.
    pub fn new(unknown: K, eof: K) -> Self {
        RuleTable {
            rules: Vec::new(),
            unknown,
            eof,
        }
    }

    /// Append a rule emitting `kind`.
    #[must_use]
    pub fn rule(mut self, matcher: Matcher, kind: K) -> Self {
        self.rules.push(LexRule {
            matcher,
            action: RuleAction::Emit(kind),
        });
        self
    }

    /// Append a rule whose matches are discarded.
    #[must_use]
    pub fn skip(mut self, matcher: Matcher) -> Self {
        self.rules.push(LexRule {
            matcher,
            action: RuleAction::Skip,
        });
        self
    }

    pub fn rules(&self) -> &[LexRule<K>] {
        &self.rules
    }

    pub fn unknown_kind(&self) -> K {
        self.unknown
    }

    pub fn eof_kind(&self) -> K {
        self.eof
    }

    /// Cursor positioned on the first token of `src`.
    pub fn cursor<'t, 'src>(&'t self, src: &'src str) -> Cursor<'t, 'src, K> {
        Cursor::new(self, src)
    }

    /// Lex one token starting at byte offset `from`.
    ///
    /// Returns the token and the offset just past it (past any skipped text
    /// before it, too). `from` must lie on a character boundary.
    pub fn match_next<'src>(&self, src: &'src str, from: usize) -> (Token<'src, K>, usize) {
        let mut pos = from;
        loop {
            if pos >= src.len() {
                let end = src.len();
                return (Token::new(self.eof, "", end), end);
            }

            match self.first_match(src, pos) {
                Some((RuleAction::Skip, end)) => {
                    trace!(from = pos, to = end, "skip");
                    pos = end;
                }
                Some((RuleAction::Emit(kind), end)) => {
                    let token = Token::new(kind, src.get(pos..end).unwrap_or_default(), pos);
                    trace!(kind = kind.name(), offset = pos, len = end - pos, "token");
                    return (token, end);
                }
                None => {
                    let end = pos + char_width(src, pos);
                    let token = Token::new(self.unknown, src.get(pos..end).unwrap_or_default(), pos);
                    trace!(offset = pos, "unknown character");
                    return (token, end);
                }
            }
        }
    }

    fn first_match(&self, src: &str, pos: usize) -> Option<(RuleAction<K>, usize)> {
        let bytes = src.as_bytes();
        self.rules.iter().find_map(|rule| {
            let end = rule.matcher.match_at(bytes, pos);
            // A match that splits a UTF-8 sequence cannot become a `&str`.
            (end > pos && src.is_char_boundary(end)).then_some((rule.action, end))
        })
    }
}

fn char_width(src: &str, pos: usize) -> usize {
    src.get(pos..)
        .and_then(|rest| rest.chars().next())
        .map_or(1, char::len_utf8)
}
