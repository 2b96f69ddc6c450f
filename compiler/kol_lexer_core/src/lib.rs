//! Table-driven lexing for the kolibri toolkit.
//!
//! A language describes its tokens as an ordered [`RuleTable`] of
//! [`Matcher`]s. The table is tried first-match (not longest-match) at each
//! position; skip rules discard whitespace and comments, and anything no
//! rule claims becomes a single-character *unknown* token so lexing never
//! fails.
//!
//! Tokens borrow their text from the source buffer. A [`Cursor`] is a small
//! `Copy` value holding the current token and the position after it, so a
//! parser saves and restores its position by copying the cursor.
//!
//! ```
//! use kol_lexer_core::{CharClass, Matcher, RuleTable, TokenKind};
//!
//! #[derive(Clone, Copy, Debug, PartialEq, Eq)]
//! enum Kind { Unknown, Number, Eof }
//!
//! impl TokenKind for Kind {
//!     fn name(self) -> &'static str {
//!         match self {
//!             Kind::Unknown => "UNKNOWN",
//!             Kind::Number => "NUMBER",
//!             Kind::Eof => "EOF",
//!         }
//!     }
//! }
//!
//! let table = RuleTable::new(Kind::Unknown, Kind::Eof)
//!     .skip(Matcher::run(CharClass::Blank))
//!     .rule(Matcher::run(CharClass::Digit), Kind::Number);
//!
//! let texts: Vec<_> = table.cursor(" 12 7").tokens().map(|t| t.text).collect();
//! assert_eq!(texts, ["12", "7"]);
//! ```

mod char_class;
mod cursor;
mod matcher;
mod rules;
mod token;

pub use char_class::CharClass;
pub use cursor::{Cursor, Tokens};
pub use matcher::Matcher;
pub use rules::{LexRule, RuleAction, RuleTable};
pub use token::{Token, TokenKind};

#[cfg(test)]
mod test_kinds;
