//! Rule tables and rule dispatch.
//!
//! A [`Grammar`] is an ordered list of [`Rule`]s where rule `n` sits at
//! position `n`, so dispatch is a direct index. [`Grammar::new`] checks that
//! layout, and that every `NonTerm` reference resolves, before any parse
//! runs.

use kol_stack::ensure_sufficient_stack;
use tracing::trace;

use crate::{Expr, GrammarError, MatchResult, ParserFactory, Production, RuleId, Shape, TokenStream};

const RULE_NO_MATCH: &str = "rule does not match";

/// Resolves `NonTerm` references while matching.
///
/// [`Grammar`] is the real implementation; tests substitute their own.
pub trait RuleDispatch<T, F: ParserFactory<T>> {
    /// Match rule `rule` at the stream's position.
    ///
    /// On `NoMatch` the stream is left where it was.
    fn match_rule<S>(&self, factory: &mut F, rule: RuleId, stream: &mut S) -> MatchResult<F::Node>
    where
        S: TokenStream<Token = T>;
}

/// One way to match a rule: a production shape and the expression feeding it.
#[derive(Debug)]
pub struct Alternative<T> {
    pub shape: Shape,
    pub expr: Expr<T>,
}

/// A grammar rule.
///
/// Most rules have one alternative. A rule with several is an ordered
/// choice in which each alternative builds its node with its own shape,
/// e.g. a factor that is either `- factor` (term + nonterm) or an integer
/// (term alone).
#[derive(Debug)]
pub struct Rule<T> {
    id: RuleId,
    name: &'static str,
    alternatives: Vec<Alternative<T>>,
}

impl<T> Rule<T> {
    pub fn new(id: RuleId, shape: Shape, expr: Expr<T>) -> Self {
        Rule {
            id,
            name: "",
            alternatives: vec![Alternative { shape, expr }],
        }
    }

    /// Rule whose alternatives are tried in order.
    pub fn choice(id: RuleId, alternatives: impl IntoIterator<Item = (Shape, Expr<T>)>) -> Self {
        Rule {
            id,
            name: "",
            alternatives: alternatives
                .into_iter()
                .map(|(shape, expr)| Alternative { shape, expr })
                .collect(),
        }
    }

    /// Attach a name shown in traces.
    #[must_use]
    pub fn named(mut self, name: &'static str) -> Self {
        self.name = name;
        self
    }

    pub fn id(&self) -> RuleId {
        self.id
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn alternatives(&self) -> &[Alternative<T>] {
        &self.alternatives
    }

    /// Try each alternative with a fresh production.
    pub fn match_with<S, F, G>(&self, factory: &mut F, grammar: &G, stream: &mut S) -> MatchResult<F::Node>
    where
        S: TokenStream<Token = T>,
        F: ParserFactory<T>,
        G: RuleDispatch<T, F>,
    {
        for (index, alternative) in self.alternatives.iter().enumerate() {
            let saved = *stream;
            let mut production = Production::new(self.id, alternative.shape);
            match alternative.expr.matches(&mut production, factory, grammar, stream) {
                MatchResult::Matched(()) => {
                    trace!(rule = %self.id, name = self.name, alternative = index, "rule matched");
                    return MatchResult::Matched(production.build(factory));
                }
                MatchResult::NoMatch(_) => *stream = saved,
                MatchResult::Error(message) => return MatchResult::Error(message),
            }
        }
        MatchResult::no_match(RULE_NO_MATCH)
    }
}

/// A validated rule table.
#[derive(Debug)]
pub struct Grammar<T> {
    rules: Vec<Rule<T>>,
}

impl<T> Grammar<T> {
    pub fn new(rules: Vec<Rule<T>>) -> Result<Self, GrammarError> {
        if rules.is_empty() {
            return Err(GrammarError::Empty);
        }
        for (position, rule) in rules.iter().enumerate() {
            if rule.id.index() != position {
                return Err(GrammarError::MisplacedRule {
                    position,
                    id: rule.id,
                });
            }
            if rule.alternatives.is_empty() {
                return Err(GrammarError::NoAlternatives { id: rule.id });
            }
        }
        for rule in &rules {
            for alternative in &rule.alternatives {
                if let Some(target) = alternative
                    .expr
                    .referenced_rules()
                    .into_iter()
                    .find(|target| target.index() >= rules.len())
                {
                    return Err(GrammarError::UnknownRule {
                        rule: rule.id,
                        target,
                    });
                }
            }
        }
        Ok(Grammar { rules })
    }

    pub fn rule(&self, id: RuleId) -> Option<&Rule<T>> {
        self.rules.get(id.index())
    }

    pub fn rules(&self) -> &[Rule<T>] {
        &self.rules
    }
}

impl<T, F: ParserFactory<T>> RuleDispatch<T, F> for Grammar<T> {
    fn match_rule<S>(&self, factory: &mut F, rule: RuleId, stream: &mut S) -> MatchResult<F::Node>
    where
        S: TokenStream<Token = T>,
    {
        if stream.is_at_end() {
            return MatchResult::error(format!("unexpected end of input in {rule}"));
        }
        let Some(target) = self.rule(rule) else {
            return MatchResult::error(format!("{rule} is not defined"));
        };
        trace!(rule = %rule, name = target.name, offset = stream.offset(), "enter rule");
        ensure_sufficient_stack(|| target.match_with(factory, self, stream))
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
mod tests;
