use pretty_assertions::assert_eq;

use super::{Grammar, Rule, RuleDispatch};
use crate::test_support::{lit, number, RecordingFactory};
use crate::{Expr, GrammarError, MatchResult, RuleId, Shape, SliceStream, TokenStream};

type Tok = &'static str;

fn r(index: u32) -> RuleId {
    RuleId::new(index)
}

/// `neg := "-" neg | number`, a rule whose alternatives build different
/// shapes.
fn negation() -> Grammar<Tok> {
    Grammar::new(vec![Rule::choice(
        r(0),
        [
            (Shape::TermNonTerm, Expr::seq([lit("-"), Expr::nonterm(r(0))])),
            (Shape::Term, number()),
        ],
    )
    .named("neg")])
    .unwrap()
}

/// `nest := "(" nest ")" | number`, passing the inner node through.
fn nesting() -> Grammar<Tok> {
    Grammar::new(vec![Rule::choice(
        r(0),
        [
            (Shape::Bypass, Expr::seq([lit("("), Expr::nonterm(r(0)), lit(")")])),
            (Shape::Term, number()),
        ],
    )])
    .unwrap()
}

fn run(grammar: &Grammar<Tok>, tokens: &[Tok]) -> (MatchResult<String>, usize, Vec<String>) {
    let mut factory = RecordingFactory::default();
    let mut stream = SliceStream::new(tokens);
    let result = grammar.match_rule(&mut factory, RuleId::ROOT, &mut stream);
    (result, stream.position(), factory.calls)
}

// === Validation ===

#[test]
fn empty_grammar_is_rejected() {
    assert_eq!(Grammar::<Tok>::new(Vec::new()).unwrap_err(), GrammarError::Empty);
}

#[test]
fn rule_out_of_position_is_rejected() {
    let err = Grammar::new(vec![
        Rule::new(r(0), Shape::Term, number()),
        Rule::new(r(2), Shape::Term, number()),
    ])
    .unwrap_err();
    assert_eq!(
        err,
        GrammarError::MisplacedRule {
            position: 1,
            id: r(2)
        }
    );
    assert_eq!(err.to_string(), "Rule#2 is declared at position 1");
}

#[test]
fn rule_without_alternatives_is_rejected() {
    let err = Grammar::<Tok>::new(vec![Rule::choice(r(0), [])]).unwrap_err();
    assert_eq!(err, GrammarError::NoAlternatives { id: r(0) });
}

#[test]
fn dangling_reference_is_rejected() {
    let err = Grammar::<Tok>::new(vec![
        Rule::new(r(0), Shape::NonTerm, Expr::nonterm(r(1))),
        Rule::new(r(1), Shape::Term, Expr::optional(Expr::nonterm(r(7)))),
    ])
    .unwrap_err();
    assert_eq!(
        err,
        GrammarError::UnknownRule {
            rule: r(1),
            target: r(7)
        }
    );
    assert_eq!(err.to_string(), "Rule#1 refers to undefined Rule#7");
}

#[test]
fn accessors_expose_rules() {
    let grammar = negation();
    assert_eq!(grammar.rules().len(), 1);
    let rule = grammar.rule(r(0)).unwrap();
    assert_eq!(rule.id(), r(0));
    assert_eq!(rule.name(), "neg");
    assert_eq!(rule.alternatives().len(), 2);
    assert_eq!(rule.alternatives()[1].shape, Shape::Term);
    assert!(grammar.rule(r(1)).is_none());
}

// === Dispatch ===

#[test]
fn alternatives_build_their_own_shapes() {
    let (result, position, calls) = run(&negation(), &["-", "-", "3"]);
    assert_eq!(result, MatchResult::Matched("--3".to_string()));
    assert_eq!(position, 3);
    assert_eq!(
        calls,
        vec!["term Rule#0 3", "term_nonterm Rule#0", "term_nonterm Rule#0"]
    );
}

#[test]
fn failed_alternative_leaves_no_pieces_behind() {
    // The first alternative records "(" and "4" before failing on the
    // missing ")"; the second must start from a clean production.
    let grammar = Grammar::new(vec![Rule::choice(
        r(0),
        [
            (
                Shape::TermNonTermList,
                Expr::seq([lit("("), number(), lit(")")]),
            ),
            (Shape::TermNonTermList, Expr::one_or_more(Expr::choice([lit("("), number()]))),
        ],
    )])
    .unwrap();
    let (result, position, _) = run(&grammar, &["(", "4"]);
    assert_eq!(result, MatchResult::Matched("[( 4 | ]".to_string()));
    assert_eq!(position, 2);
}

#[test]
fn bypass_returns_inner_node() {
    let (result, position, calls) = run(&nesting(), &["(", "(", "8", ")", ")"]);
    assert_eq!(result, MatchResult::Matched("8".to_string()));
    assert_eq!(position, 5);
    assert_eq!(calls, vec!["term Rule#0 8"]);
}

#[test]
fn no_match_restores_stream() {
    let (result, position, calls) = run(&nesting(), &["(", "(", "8", ")"]);
    assert_eq!(result, MatchResult::NoMatch("rule does not match"));
    assert_eq!(position, 0);
    // The inner rule matched and built its node before the outer attempt failed.
    assert_eq!(calls, vec!["term Rule#0 8"]);
}

#[test]
fn end_of_input_is_an_error() {
    let (result, _, calls) = run(&negation(), &[]);
    assert_eq!(
        result,
        MatchResult::Error("unexpected end of input in Rule#0".to_string())
    );
    assert!(calls.is_empty());
}

#[test]
fn undefined_rule_is_an_error() {
    let grammar = negation();
    let mut factory = RecordingFactory::default();
    let tokens = ["1"];
    let mut stream = SliceStream::new(&tokens);
    let result = grammar.match_rule(&mut factory, r(4), &mut stream);
    assert_eq!(result.message(), Some("Rule#4 is not defined"));
    assert!(!stream.is_at_end());
}

#[test]
fn deep_nesting_grows_the_stack() {
    const DEPTH: usize = 5_000;
    let mut tokens = vec!["("; DEPTH];
    tokens.push("1");
    tokens.extend(std::iter::repeat(")").take(DEPTH));
    let (result, position, _) = run(&nesting(), &tokens);
    assert_eq!(result, MatchResult::Matched("1".to_string()));
    assert_eq!(position, tokens.len());
}
