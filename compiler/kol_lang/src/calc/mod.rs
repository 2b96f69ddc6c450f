//! Integer calculator.
//!
//! ```text
//! expr   := term (("+" | "-") term)*
//! term   := factor (("*" | "/") factor)*
//! factor := "+" factor | "-" factor | "(" expr ")" | INTEGER
//! ```
//!
//! Arithmetic is on `i32`; overflow and division by zero are errors and
//! `/` truncates toward zero.

mod factory;
mod interp;

use kol_lexer_core::{CharClass, Matcher, RuleTable, Token, TokenKind};
use kol_parse::{Expr, Grammar, GrammarError, Parser, Rule, RuleId, Shape};
use tracing::debug;

use crate::{infix_chain, is_kind, Ast, Error};

pub use factory::CalcFactory;
pub use interp::interpret;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CalcKind {
    Unknown,
    Plus,
    Minus,
    Multiply,
    Divide,
    Integer,
    NullTerm,
    LParens,
    RParens,
    /// Reserved; no lexer rule produces it.
    Keyword,
    Comment,
    EndOfFile,
}

impl TokenKind for CalcKind {
    fn name(self) -> &'static str {
        match self {
            CalcKind::Unknown => "UNKNOWN",
            CalcKind::Plus => "PLUS",
            CalcKind::Minus => "MINUS",
            CalcKind::Multiply => "MULTIPLY",
            CalcKind::Divide => "DIVIDE",
            CalcKind::Integer => "INTEGER",
            CalcKind::NullTerm => "NULLTERM",
            CalcKind::LParens => "LPARENS",
            CalcKind::RParens => "RPARENS",
            CalcKind::Keyword => "KEYWORD",
            CalcKind::Comment => "COMMENT",
            CalcKind::EndOfFile => "ENDOFFILE",
        }
    }
}

pub type CalcToken<'src> = Token<'src, CalcKind>;

pub const EXPR: RuleId = RuleId::new(0);
pub const TERM: RuleId = RuleId::new(1);
pub const FACTOR: RuleId = RuleId::new(2);

/// Calculator lexer. Spaces are skipped; comments are tokens.
pub fn lexer() -> RuleTable<CalcKind> {
    RuleTable::new(CalcKind::Unknown, CalcKind::EndOfFile)
        .skip(Matcher::run(CharClass::Byte(b' ')))
        .rule(Matcher::delimited("/*", "*/"), CalcKind::Comment)
        .rule(Matcher::byte(b'\0'), CalcKind::NullTerm)
        .rule(Matcher::byte(b'('), CalcKind::LParens)
        .rule(Matcher::byte(b')'), CalcKind::RParens)
        .rule(Matcher::byte(b'+'), CalcKind::Plus)
        .rule(Matcher::byte(b'-'), CalcKind::Minus)
        .rule(Matcher::byte(b'*'), CalcKind::Multiply)
        .rule(Matcher::byte(b'/'), CalcKind::Divide)
        .rule(Matcher::run(CharClass::Digit), CalcKind::Integer)
}

pub fn grammar<'src>() -> Result<Grammar<CalcToken<'src>>, GrammarError> {
    Grammar::new(vec![
        Rule::new(EXPR, Shape::InfixChain, infix_chain([CalcKind::Plus, CalcKind::Minus], TERM))
            .named("expr"),
        Rule::new(
            TERM,
            Shape::InfixChain,
            infix_chain([CalcKind::Multiply, CalcKind::Divide], FACTOR),
        )
        .named("term"),
        Rule::choice(
            FACTOR,
            [
                (
                    Shape::TermNonTerm,
                    Expr::seq([is_kind(CalcKind::Plus), Expr::nonterm(FACTOR)]),
                ),
                (
                    Shape::TermNonTerm,
                    Expr::seq([is_kind(CalcKind::Minus), Expr::nonterm(FACTOR)]),
                ),
                (
                    Shape::Bypass,
                    Expr::seq([
                        is_kind(CalcKind::LParens),
                        Expr::nonterm(EXPR),
                        is_kind(CalcKind::RParens),
                    ]),
                ),
                (Shape::Term, is_kind(CalcKind::Integer)),
            ],
        )
        .named("factor"),
    ])
}

/// Parse a calculator expression.
pub fn parse(src: &str) -> Result<Ast<'_>, Error> {
    let table = lexer();
    let parser = Parser::new(grammar()?);
    let mut factory = CalcFactory::default();
    let root = parser.parse(&mut factory, table.cursor(src))?;
    Ok(Ast {
        arena: factory.into_arena(),
        root,
    })
}

/// Parse and evaluate `src`.
pub fn evaluate(src: &str) -> Result<i32, Error> {
    let ast = parse(src)?;
    let value = interpret(&ast)?;
    debug!(value, "evaluated");
    Ok(value)
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
