//! Tokens: a kind plus a borrowed slice of the source.

use std::fmt;

/// A language's token classification.
///
/// `name` is the upper-case label used when a token is displayed, e.g.
/// `INTEGER` in `Token(INTEGER, 42)`.
pub trait TokenKind: Copy + Eq + fmt::Debug {
    fn name(self) -> &'static str;
}

/// A classified lexeme borrowing its text from the source buffer.
///
/// Equality compares kind and text only; `offset` is kept for diagnostics
/// and does not take part in comparisons.
#[derive(Clone, Copy, Debug)]
pub struct Token<'src, K> {
    pub kind: K,
    pub text: &'src str,
    /// Byte offset of `text` in the source.
    pub offset: usize,
}

impl<'src, K> Token<'src, K> {
    #[inline]
    pub const fn new(kind: K, text: &'src str, offset: usize) -> Self {
        Token { kind, text, offset }
    }
}

impl<K: PartialEq> PartialEq for Token<'_, K> {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.text == other.text
    }
}

impl<K: Eq> Eq for Token<'_, K> {}

impl<K: TokenKind> fmt::Display for Token<'_, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.text.is_empty() {
            write!(f, "Token({})", self.kind.name())
        } else {
            write!(f, "Token({}, {})", self.kind.name(), self.text)
        }
    }
}
