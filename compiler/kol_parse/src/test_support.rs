//! Test doubles shared by the unit tests.
//!
//! Tests drive the engine with `&'static str` tokens over a
//! [`SliceStream`](crate::SliceStream). [`RecordingFactory`] renders nodes as
//! strings, so a tree can be compared as text, and logs every call with its
//! rule id.

use kol_lexer_core::TokenKind;

use crate::{Expr, ParserFactory, RuleId};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Kind {
    Unknown,
    Integer,
    Plus,
    Eof,
}

impl TokenKind for Kind {
    fn name(self) -> &'static str {
        match self {
            Kind::Unknown => "UNKNOWN",
            Kind::Integer => "INTEGER",
            Kind::Plus => "PLUS",
            Kind::Eof => "EOF",
        }
    }
}

/// Term matching exactly `text`.
pub fn lit(text: &'static str) -> Expr<&'static str> {
    Expr::term(move |t: &&str| *t == text)
}

/// Term matching any all-digit token.
pub fn number() -> Expr<&'static str> {
    Expr::term(|t: &&str| !t.is_empty() && t.bytes().all(|b| b.is_ascii_digit()))
}

#[derive(Default, Debug)]
pub struct RecordingFactory {
    pub calls: Vec<String>,
}

impl RecordingFactory {
    fn log(&mut self, call: String) {
        self.calls.push(call);
    }
}

impl ParserFactory<&'static str> for RecordingFactory {
    type Node = String;

    fn create_null(&mut self) -> String {
        self.log("null".to_string());
        "NULL".to_string()
    }

    fn create_empty(&mut self, rule: RuleId) -> String {
        self.log(format!("empty {rule}"));
        "EMPTY".to_string()
    }

    fn create_term(&mut self, rule: RuleId, term: &'static str) -> String {
        self.log(format!("term {rule} {term}"));
        term.to_string()
    }

    fn create_nonterm(&mut self, rule: RuleId, node: String) -> String {
        self.log(format!("nonterm {rule}"));
        format!("<{node}>")
    }

    fn create_term_nonterm(&mut self, rule: RuleId, term: &'static str, node: String) -> String {
        self.log(format!("term_nonterm {rule}"));
        format!("{term}{node}")
    }

    fn create_nonterm_nonterm(&mut self, rule: RuleId, lhs: String, rhs: String) -> String {
        self.log(format!("nonterm_nonterm {rule}"));
        format!("{{{lhs} {rhs}}}")
    }

    fn create_nonterm_term_nonterm(
        &mut self,
        rule: RuleId,
        lhs: String,
        term: &'static str,
        rhs: String,
    ) -> String {
        self.log(format!("nonterm_term_nonterm {rule}"));
        format!("({lhs} {term} {rhs})")
    }

    fn create_nonterm_list(&mut self, rule: RuleId, nodes: Vec<String>) -> String {
        self.log(format!("nonterm_list {rule}"));
        format!("[{}]", nodes.join(", "))
    }

    fn create_term_nonterm_list(
        &mut self,
        rule: RuleId,
        terms: Vec<&'static str>,
        nodes: Vec<String>,
    ) -> String {
        self.log(format!("term_nonterm_list {rule}"));
        format!("[{} | {}]", terms.join(" "), nodes.join(", "))
    }
}
