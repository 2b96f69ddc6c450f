//! Token kinds and a small rule table shared by the unit tests.

use crate::{CharClass, Matcher, RuleTable, TokenKind};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Kind {
    Unknown,
    Number,
    Plus,
    Word,
    Comment,
    Eof,
}

impl TokenKind for Kind {
    fn name(self) -> &'static str {
        match self {
            Kind::Unknown => "UNKNOWN",
            Kind::Number => "NUMBER",
            Kind::Plus => "PLUS",
            Kind::Word => "WORD",
            Kind::Comment => "COMMENT",
            Kind::Eof => "EOF",
        }
    }
}

/// Blanks and `#...;` comments are skipped; `/*...*/` is a token.
pub fn table() -> RuleTable<Kind> {
    RuleTable::new(Kind::Unknown, Kind::Eof)
        .skip(Matcher::run(CharClass::Blank))
        .skip(Matcher::delimited("#", ";"))
        .rule(Matcher::delimited("/*", "*/"), Kind::Comment)
        .rule(Matcher::byte(b'+'), Kind::Plus)
        .rule(Matcher::run(CharClass::Digit), Kind::Number)
        .rule(Matcher::run(CharClass::Letter), Kind::Word)
}
