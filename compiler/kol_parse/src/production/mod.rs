//! Per-attempt accumulators that turn a successful match into one node.
//!
//! A [`Production`] is created fresh each time a rule alternative is tried.
//! Terms and nonterms are recorded in match order; slots the shape does not
//! use are ignored. When the alternative matches, [`Production::build`]
//! selects the pieces its [`Shape`] calls for and invokes the matching
//! factory method.

use smallvec::SmallVec;

use crate::{ParserFactory, RuleId};

/// Which factory method a rule's production calls, and with what.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Shape {
    /// `create_empty`.
    Empty,
    /// `create_term` with the last recorded term.
    Term,
    /// `create_nonterm` with the last recorded nonterm.
    NonTerm,
    /// `create_term_nonterm` with the last term and the last nonterm.
    TermNonTerm,
    /// `create_nonterm_nonterm` with the first and second nonterms.
    NonTermNonTerm,
    /// `create_nonterm_term_nonterm` with the first and second nonterms and
    /// the last term.
    NonTermTermNonTerm,
    /// Left fold of `n0 t0 n1 t1 n2 ...` through
    /// `create_nonterm_term_nonterm`: `((n0 t0 n1) t1 n2) ...`. A single
    /// nonterm is returned unchanged; none yields `create_null`.
    InfixChain,
    /// `create_nonterm_list` with every nonterm.
    NonTermList,
    /// `create_term_nonterm_list` with every term and every nonterm.
    TermNonTermList,
    /// No node of its own: the last nonterm is returned as is.
    Bypass,
}

impl Shape {
    fn keeps_terms(self) -> bool {
        matches!(
            self,
            Shape::Term
                | Shape::TermNonTerm
                | Shape::NonTermTermNonTerm
                | Shape::InfixChain
                | Shape::TermNonTermList
        )
    }

    fn keeps_nonterms(self) -> bool {
        !matches!(self, Shape::Empty | Shape::Term)
    }
}

/// Recorded lengths to roll a production back to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Checkpoint {
    terms: usize,
    nonterms: usize,
}

/// Matched pieces of one rule attempt.
#[derive(Debug)]
pub struct Production<T, N> {
    rule: RuleId,
    shape: Shape,
    terms: SmallVec<[T; 4]>,
    nonterms: SmallVec<[N; 4]>,
}

impl<T, N> Production<T, N> {
    pub fn new(rule: RuleId, shape: Shape) -> Self {
        Production {
            rule,
            shape,
            terms: SmallVec::new(),
            nonterms: SmallVec::new(),
        }
    }

    pub fn rule(&self) -> RuleId {
        self.rule
    }

    pub fn shape(&self) -> Shape {
        self.shape
    }

    pub fn add_terminal(&mut self, term: T) {
        if self.shape.keeps_terms() {
            self.terms.push(term);
        }
    }

    pub fn add_nonterm(&mut self, node: N) {
        if self.shape.keeps_nonterms() {
            self.nonterms.push(node);
        }
    }

    pub fn terms(&self) -> &[T] {
        &self.terms
    }

    pub fn nonterms(&self) -> &[N] {
        &self.nonterms
    }

    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint {
            terms: self.terms.len(),
            nonterms: self.nonterms.len(),
        }
    }

    /// Discard everything recorded since `checkpoint`.
    pub fn rollback(&mut self, checkpoint: Checkpoint) {
        self.terms.truncate(checkpoint.terms);
        self.nonterms.truncate(checkpoint.nonterms);
    }

    /// Hand the recorded pieces to `factory`.
    ///
    /// A shape whose required pieces were never recorded builds
    /// `create_null`.
    pub fn build<F>(self, factory: &mut F) -> N
    where
        F: ParserFactory<T, Node = N>,
    {
        let Production {
            rule,
            shape,
            mut terms,
            mut nonterms,
        } = self;

        match shape {
            Shape::Empty => factory.create_empty(rule),
            Shape::Term => match terms.pop() {
                Some(term) => factory.create_term(rule, term),
                None => factory.create_null(),
            },
            Shape::NonTerm => match nonterms.pop() {
                Some(node) => factory.create_nonterm(rule, node),
                None => factory.create_null(),
            },
            Shape::TermNonTerm => match (terms.pop(), nonterms.pop()) {
                (Some(term), Some(node)) => factory.create_term_nonterm(rule, term, node),
                _ => factory.create_null(),
            },
            Shape::NonTermNonTerm => {
                let mut nodes = nonterms.into_iter();
                match (nodes.next(), nodes.next()) {
                    (Some(lhs), Some(rhs)) => factory.create_nonterm_nonterm(rule, lhs, rhs),
                    _ => factory.create_null(),
                }
            }
            Shape::NonTermTermNonTerm => {
                let op = terms.pop();
                let mut nodes = nonterms.into_iter();
                match (nodes.next(), op, nodes.next()) {
                    (Some(lhs), Some(op), Some(rhs)) => {
                        factory.create_nonterm_term_nonterm(rule, lhs, op, rhs)
                    }
                    _ => factory.create_null(),
                }
            }
            Shape::InfixChain => fold_infix(rule, terms, nonterms, factory),
            Shape::NonTermList => factory.create_nonterm_list(rule, nonterms.into_vec()),
            Shape::TermNonTermList => {
                factory.create_term_nonterm_list(rule, terms.into_vec(), nonterms.into_vec())
            }
            Shape::Bypass => match nonterms.pop() {
                Some(node) => node,
                None => factory.create_null(),
            },
        }
    }
}

fn fold_infix<T, N, F>(
    rule: RuleId,
    terms: SmallVec<[T; 4]>,
    nonterms: SmallVec<[N; 4]>,
    factory: &mut F,
) -> N
where
    F: ParserFactory<T, Node = N>,
{
    let mut operands = nonterms.into_iter();
    let Some(mut acc) = operands.next() else {
        return factory.create_null();
    };
    for (op, rhs) in terms.into_iter().zip(operands) {
        acc = factory.create_nonterm_term_nonterm(rule, acc, op, rhs);
    }
    acc
}
