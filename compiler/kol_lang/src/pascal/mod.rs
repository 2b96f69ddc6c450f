//! A Pascal subset: one program block of variable declarations and
//! assignment statements over integer and real expressions.
//!
//! ```text
//! program       := PROGRAM variable ";" block "."
//! block         := declarations compound
//! declarations  := VAR (var_decl ";")+ | empty
//! var_decl      := ID ("," ID)* ":" type_spec
//! type_spec     := INTEGER | REAL
//! compound      := BEGIN statement_list END
//! statement_list:= statement (";" statement)*
//! statement     := compound | assignment | empty
//! assignment    := variable ":=" expr
//! expr          := term (("+" | "-") term)*
//! term          := factor (("*" | DIV | "/") factor)*
//! factor        := "+" factor | "-" factor | INTEGER_CONST | REAL_CONST
//!                | "(" expr ")" | variable
//! variable      := ID
//! ```
//!
//! Keywords are case-insensitive and identifiers are folded to lower case.
//! The lexer is first-match, so a keyword is recognised even when it is
//! the prefix of a longer identifier.

mod factory;
mod interp;

use kol_lexer_core::{CharClass, Matcher, RuleTable, Token, TokenKind};
use kol_parse::{Expr, Grammar, GrammarError, Parser, Rule, Shape};
use tracing::debug;

use crate::{infix_chain, is_kind, Ast, Error};

pub use factory::PascalFactory;
pub use interp::Interpreter;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PascalKind {
    Unknown,
    Plus,
    Minus,
    Multiply,
    IntegerDiv,
    FloatDiv,
    Begin,
    End,
    Real,
    Integer,
    RealConst,
    IntegerConst,
    Id,
    Assign,
    Semi,
    Dot,
    LParens,
    RParens,
    Program,
    Var,
    Colon,
    Comma,
    EndOfFile,
}

impl TokenKind for PascalKind {
    fn name(self) -> &'static str {
        match self {
            PascalKind::Unknown => "UNKNOWN",
            PascalKind::Plus => "PLUS",
            PascalKind::Minus => "MINUS",
            PascalKind::Multiply => "MULTIPLY",
            PascalKind::IntegerDiv => "INTEGER_DIV",
            PascalKind::FloatDiv => "FLOAT_DIV",
            PascalKind::Begin => "BEGIN",
            PascalKind::End => "END",
            PascalKind::Real => "REAL",
            PascalKind::Integer => "INTEGER",
            PascalKind::RealConst => "REAL_CONST",
            PascalKind::IntegerConst => "INTEGER_CONST",
            PascalKind::Id => "ID",
            PascalKind::Assign => "ASSIGN",
            PascalKind::Semi => "SEMI",
            PascalKind::Dot => "DOT",
            PascalKind::LParens => "LPARENS",
            PascalKind::RParens => "RPARENS",
            PascalKind::Program => "PROGRAM",
            PascalKind::Var => "VAR",
            PascalKind::Colon => "COLON",
            PascalKind::Comma => "COMMA",
            PascalKind::EndOfFile => "ENDOFFILE",
        }
    }
}

pub type PascalToken<'src> = Token<'src, PascalKind>;

/// Rule ids, in grammar order.
pub mod rules {
    use kol_parse::RuleId;

    pub const PROGRAM: RuleId = RuleId::new(0);
    pub const BLOCK: RuleId = RuleId::new(1);
    pub const DECLARATIONS: RuleId = RuleId::new(2);
    pub const VAR_DECL: RuleId = RuleId::new(3);
    pub const TYPE_SPEC: RuleId = RuleId::new(4);
    pub const COMPOUND: RuleId = RuleId::new(5);
    pub const STATEMENT_LIST: RuleId = RuleId::new(6);
    pub const STATEMENT: RuleId = RuleId::new(7);
    pub const ASSIGNMENT: RuleId = RuleId::new(8);
    pub const EMPTY: RuleId = RuleId::new(9);
    pub const EXPR: RuleId = RuleId::new(10);
    pub const TERM: RuleId = RuleId::new(11);
    pub const FACTOR: RuleId = RuleId::new(12);
    pub const VARIABLE: RuleId = RuleId::new(13);
}

pub fn lexer() -> RuleTable<PascalKind> {
    let ident_start = CharClass::Letter.or(CharClass::Byte(b'_'));
    RuleTable::new(PascalKind::Unknown, PascalKind::EndOfFile)
        .skip(Matcher::run(CharClass::Blank.or(CharClass::Newline)))
        .skip(Matcher::delimited("{", "}"))
        .rule(Matcher::byte(b'('), PascalKind::LParens)
        .rule(Matcher::byte(b')'), PascalKind::RParens)
        .rule(Matcher::byte(b'+'), PascalKind::Plus)
        .rule(Matcher::byte(b'-'), PascalKind::Minus)
        .rule(Matcher::byte(b'*'), PascalKind::Multiply)
        .rule(Matcher::byte(b';'), PascalKind::Semi)
        .rule(Matcher::byte(b'.'), PascalKind::Dot)
        .rule(Matcher::byte(b'/'), PascalKind::FloatDiv)
        .rule(
            Matcher::sequence([Matcher::byte(b':'), Matcher::byte(b'=')]),
            PascalKind::Assign,
        )
        .rule(Matcher::byte(b':'), PascalKind::Colon)
        .rule(Matcher::byte(b','), PascalKind::Comma)
        .rule(Matcher::keyword("DIV"), PascalKind::IntegerDiv)
        .rule(Matcher::keyword("PROGRAM"), PascalKind::Program)
        .rule(Matcher::keyword("INTEGER"), PascalKind::Integer)
        .rule(Matcher::keyword("REAL"), PascalKind::Real)
        .rule(Matcher::keyword("VAR"), PascalKind::Var)
        .rule(Matcher::keyword("BEGIN"), PascalKind::Begin)
        .rule(Matcher::keyword("END"), PascalKind::End)
        .rule(
            Matcher::sequence([
                Matcher::run(CharClass::Digit),
                Matcher::byte(b'.'),
                Matcher::run(CharClass::Digit),
            ]),
            PascalKind::RealConst,
        )
        .rule(Matcher::run(CharClass::Digit), PascalKind::IntegerConst)
        .rule(
            Matcher::sequence([
                Matcher::char(ident_start.clone()),
                Matcher::run(CharClass::LetterOrDigit),
            ]),
            PascalKind::Id,
        )
        .rule(Matcher::char(ident_start), PascalKind::Id)
}

pub fn grammar<'src>() -> Result<Grammar<PascalToken<'src>>, GrammarError> {
    use rules::{
        ASSIGNMENT, BLOCK, COMPOUND, DECLARATIONS, EMPTY, EXPR, FACTOR, PROGRAM, STATEMENT,
        STATEMENT_LIST, TERM, TYPE_SPEC, VARIABLE, VAR_DECL,
    };
    use PascalKind as K;

    Grammar::new(vec![
        Rule::new(
            PROGRAM,
            Shape::NonTermNonTerm,
            Expr::seq([
                is_kind(K::Program),
                Expr::nonterm(VARIABLE),
                is_kind(K::Semi),
                Expr::nonterm(BLOCK),
                is_kind(K::Dot),
            ]),
        )
        .named("program"),
        Rule::new(
            BLOCK,
            Shape::NonTermNonTerm,
            Expr::seq([Expr::nonterm(DECLARATIONS), Expr::nonterm(COMPOUND)]),
        )
        .named("block"),
        Rule::new(
            DECLARATIONS,
            Shape::NonTermList,
            Expr::choice([
                Expr::seq([
                    is_kind(K::Var),
                    Expr::one_or_more(Expr::seq([Expr::nonterm(VAR_DECL), is_kind(K::Semi)])),
                ]),
                Expr::nonterm(EMPTY),
            ]),
        )
        .named("declarations"),
        Rule::new(
            VAR_DECL,
            Shape::TermNonTermList,
            Expr::seq([
                is_kind(K::Id),
                Expr::zero_or_more(Expr::seq([is_kind(K::Comma), is_kind(K::Id)])),
                is_kind(K::Colon),
                Expr::nonterm(TYPE_SPEC),
            ]),
        )
        .named("variable_declaration"),
        Rule::new(
            TYPE_SPEC,
            Shape::Term,
            Expr::choice([is_kind(K::Integer), is_kind(K::Real)]),
        )
        .named("type_spec"),
        Rule::new(
            COMPOUND,
            Shape::NonTerm,
            Expr::seq([
                is_kind(K::Begin),
                Expr::nonterm(STATEMENT_LIST),
                is_kind(K::End),
            ]),
        )
        .named("compound_statement"),
        Rule::new(
            STATEMENT_LIST,
            Shape::NonTermList,
            Expr::seq([
                Expr::nonterm(STATEMENT),
                Expr::zero_or_more(Expr::seq([is_kind(K::Semi), Expr::nonterm(STATEMENT)])),
            ]),
        )
        .named("statement_list"),
        Rule::choice(
            STATEMENT,
            [
                (Shape::Bypass, Expr::nonterm(COMPOUND)),
                (Shape::Bypass, Expr::nonterm(ASSIGNMENT)),
                (Shape::Bypass, Expr::nonterm(EMPTY)),
            ],
        )
        .named("statement"),
        Rule::new(
            ASSIGNMENT,
            Shape::NonTermTermNonTerm,
            Expr::seq([
                Expr::nonterm(VARIABLE),
                is_kind(K::Assign),
                Expr::nonterm(EXPR),
            ]),
        )
        .named("assignment_statement"),
        Rule::new(EMPTY, Shape::Empty, Expr::Empty).named("empty"),
        Rule::new(EXPR, Shape::InfixChain, infix_chain([K::Plus, K::Minus], TERM)).named("expr"),
        Rule::new(
            TERM,
            Shape::InfixChain,
            infix_chain([K::Multiply, K::IntegerDiv, K::FloatDiv], FACTOR),
        )
        .named("term"),
        Rule::choice(
            FACTOR,
            [
                (
                    Shape::TermNonTerm,
                    Expr::seq([is_kind(K::Plus), Expr::nonterm(FACTOR)]),
                ),
                (
                    Shape::TermNonTerm,
                    Expr::seq([is_kind(K::Minus), Expr::nonterm(FACTOR)]),
                ),
                (Shape::Term, is_kind(K::IntegerConst)),
                (Shape::Term, is_kind(K::RealConst)),
                (
                    Shape::Bypass,
                    Expr::seq([is_kind(K::LParens), Expr::nonterm(EXPR), is_kind(K::RParens)]),
                ),
                (Shape::Bypass, Expr::nonterm(VARIABLE)),
            ],
        )
        .named("factor"),
        Rule::new(VARIABLE, Shape::Term, is_kind(K::Id)).named("variable"),
    ])
}

/// Parse a Pascal program.
pub fn parse(src: &str) -> Result<Ast<'_>, Error> {
    let table = lexer();
    let parser = Parser::new(grammar()?);
    let mut factory = PascalFactory::default();
    let root = parser.parse(&mut factory, table.cursor(src))?;
    Ok(Ast {
        arena: factory.into_arena(),
        root,
    })
}

/// Parse and execute a program, returning the final variable state.
pub fn run(src: &str) -> Result<Interpreter, Error> {
    let ast = parse(src)?;
    let mut interpreter = Interpreter::new();
    interpreter.run(&ast)?;
    debug!(variables = interpreter.len(), "program finished");
    Ok(interpreter)
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
