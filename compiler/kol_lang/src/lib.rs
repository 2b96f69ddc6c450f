//! Client languages for the kolibri parser.
//!
//! Two front ends share one AST: a four-function integer calculator and a
//! small Pascal subset. Each language supplies a lexer [`RuleTable`], a
//! grammar, and a [`ParserFactory`] that builds nodes into an [`AstArena`];
//! the engine itself stays language-agnostic.
//!
//! ```
//! assert_eq!(kol_lang::calc::evaluate("(1+2)*3"), Ok(9));
//! ```
//!
//! [`RuleTable`]: kol_lexer_core::RuleTable
//! [`ParserFactory`]: kol_parse::ParserFactory

pub mod ast;
pub mod calc;
pub mod dot;
mod error;
pub mod pascal;

pub use ast::{Ast, AstArena, BinaryOp, ConstKind, Node, NodeId, UnaryOp};
pub use error::{Error, EvalError};

use kol_lexer_core::{Token, TokenKind};
use kol_parse::{Expr, RuleId};

/// Term accepting any token of `kind`.
fn is_kind<'src, K>(kind: K) -> Expr<Token<'src, K>>
where
    K: TokenKind + Send + Sync + 'static,
{
    Expr::term(move |token: &Token<'src, K>| token.kind == kind)
}

/// `operand (op operand)*` for an infix chain rule.
fn infix_chain<'src, K, const N: usize>(ops: [K; N], operand: RuleId) -> Expr<Token<'src, K>>
where
    K: TokenKind + Send + Sync + 'static,
{
    Expr::seq([
        Expr::nonterm(operand),
        Expr::zero_or_more(Expr::seq([
            Expr::choice(ops.map(is_kind)),
            Expr::nonterm(operand),
        ])),
    ])
}

/// The languages this crate implements.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Language {
    Calc,
    Pascal,
}

impl Language {
    /// Pick a language from a file name: `.pas` is Pascal, anything else
    /// the calculator.
    pub fn from_path(path: &str) -> Self {
        let is_pascal = std::path::Path::new(path)
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("pas"));
        if is_pascal {
            Language::Pascal
        } else {
            Language::Calc
        }
    }

    /// Parse a `--lang` value.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "calc" => Some(Language::Calc),
            "pascal" => Some(Language::Pascal),
            _ => None,
        }
    }

    /// Parse `src` into an AST.
    pub fn parse(self, src: &str) -> Result<Ast<'_>, Error> {
        match self {
            Language::Calc => calc::parse(src),
            Language::Pascal => pascal::parse(src),
        }
    }

    /// Token listing of `src`, one `Display`ed token per entry.
    pub fn tokens(self, src: &str) -> Vec<String> {
        match self {
            Language::Calc => calc::lexer()
                .cursor(src)
                .tokens()
                .map(|token| token.to_string())
                .collect(),
            Language::Pascal => pascal::lexer()
                .cursor(src)
                .tokens()
                .map(|token| token.to_string())
                .collect(),
        }
    }
}
