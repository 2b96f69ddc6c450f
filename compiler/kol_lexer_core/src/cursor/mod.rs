//! Copyable token cursor.
//!
//! A [`Cursor`] caches the current token and the offset just past it.
//! Advancing re-runs the rule table from that offset. Copying a cursor is
//! the save operation for backtracking; assigning the copy back restores.
//! Since lexing is a pure function of the source and offset, two cursors at
//! the same position always observe the same current token.

use std::ptr;

use crate::{RuleTable, Token, TokenKind};

/// Position in a token stream.
///
/// The end cursor sits at the end of the source with the end-of-input
/// token as its current token. Advancing the end cursor leaves it unchanged.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'t, 'src, K> {
    table: &'t RuleTable<K>,
    src: &'src str,
    /// Offset just past `current` (and past any skipped text before it).
    next: usize,
    current: Token<'src, K>,
}

#[cfg(target_pointer_width = "64")]
const _: () = assert!(std::mem::size_of::<Cursor<'static, 'static, u8>>() <= 64);

impl<'t, 'src, K: TokenKind> Cursor<'t, 'src, K> {
    /// Cursor on the first token of `src`.
    pub fn new(table: &'t RuleTable<K>, src: &'src str) -> Self {
        let (current, next) = table.match_next(src, 0);
        Cursor {
            table,
            src,
            next,
            current,
        }
    }

    /// The end cursor for `src`.
    pub fn end(table: &'t RuleTable<K>, src: &'src str) -> Self {
        let (current, next) = table.match_next(src, src.len());
        Cursor {
            table,
            src,
            next,
            current,
        }
    }

    #[inline]
    pub fn current(&self) -> Token<'src, K> {
        self.current
    }

    /// Byte offset of the current token (the source length at the end).
    #[inline]
    pub fn offset(&self) -> usize {
        self.current.offset
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.next == self.src.len()
            && self.current.kind == self.table.eof_kind()
            && self.current.text.is_empty()
    }

    /// Move to the next token.
    pub fn advance(&mut self) {
        let (current, next) = self.table.match_next(self.src, self.next);
        self.current = current;
        self.next = next;
    }

    pub fn source(&self) -> &'src str {
        self.src
    }

    /// Iterator over the tokens from here up to, not including, end of input.
    pub fn tokens(self) -> Tokens<'t, 'src, K> {
        Tokens { cursor: self }
    }
}

impl<K: PartialEq> PartialEq for Cursor<'_, '_, K> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.src.as_ptr(), other.src.as_ptr())
            && self.src.len() == other.src.len()
            && self.next == other.next
            && self.current == other.current
    }
}

impl<K: Eq> Eq for Cursor<'_, '_, K> {}

/// Token iterator returned by [`Cursor::tokens`].
#[derive(Clone, Debug)]
pub struct Tokens<'t, 'src, K> {
    cursor: Cursor<'t, 'src, K>,
}

impl<'src, K: TokenKind> Iterator for Tokens<'_, 'src, K> {
    type Item = Token<'src, K>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor.is_at_end() {
            return None;
        }
        let token = self.cursor.current();
        self.cursor.advance();
        Some(token)
    }
}

#[cfg(test)]
mod tests;
