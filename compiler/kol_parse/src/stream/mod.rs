//! Token streams consumed by the combinators.

use std::ptr;

use kol_lexer_core::{Cursor, Token, TokenKind};

/// A copyable position in a sequence of tokens.
///
/// Copying a stream saves its position; assigning a saved copy back
/// restores it.
pub trait TokenStream: Copy {
    type Token: Clone;

    /// The current token, or `None` at end of input.
    fn peek(&self) -> Option<Self::Token>;

    /// Move past the current token. No effect at end of input.
    fn advance(&mut self);

    fn is_at_end(&self) -> bool;

    /// Position of the current token, strictly increasing as the stream
    /// advances. Used for diagnostics and progress checks.
    fn offset(&self) -> usize;
}

impl<'src, K: TokenKind> TokenStream for Cursor<'_, 'src, K> {
    type Token = Token<'src, K>;

    #[inline]
    fn peek(&self) -> Option<Self::Token> {
        (!Cursor::is_at_end(self)).then(|| Cursor::current(self))
    }

    #[inline]
    fn advance(&mut self) {
        Cursor::advance(self);
    }

    #[inline]
    fn is_at_end(&self) -> bool {
        Cursor::is_at_end(self)
    }

    #[inline]
    fn offset(&self) -> usize {
        Cursor::offset(self)
    }
}

/// Stream over tokens that are already in memory.
#[derive(Debug)]
pub struct SliceStream<'a, T> {
    tokens: &'a [T],
    pos: usize,
}

impl<'a, T> SliceStream<'a, T> {
    pub fn new(tokens: &'a [T]) -> Self {
        SliceStream { tokens, pos: 0 }
    }

    /// Index of the current token.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Tokens not yet consumed.
    pub fn remaining(&self) -> &'a [T] {
        self.tokens.get(self.pos..).unwrap_or_default()
    }
}

impl<T> Clone for SliceStream<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for SliceStream<'_, T> {}

impl<T> PartialEq for SliceStream<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.tokens.as_ptr(), other.tokens.as_ptr())
            && self.tokens.len() == other.tokens.len()
            && self.pos == other.pos
    }
}

impl<T> Eq for SliceStream<'_, T> {}

impl<T: Clone> TokenStream for SliceStream<'_, T> {
    type Token = T;

    #[inline]
    fn peek(&self) -> Option<T> {
        self.tokens.get(self.pos).cloned()
    }

    #[inline]
    fn advance(&mut self) {
        if self.pos < self.tokens.len() {
            self.pos += 1;
        }
    }

    #[inline]
    fn is_at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    #[inline]
    fn offset(&self) -> usize {
        self.pos
    }
}
