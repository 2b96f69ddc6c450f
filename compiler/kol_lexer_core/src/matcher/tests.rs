use proptest::prelude::*;

use super::Matcher;
use crate::CharClass;

// === Char ===

#[test]
fn char_consumes_one_matching_byte() {
    assert_eq!(Matcher::byte(b'+').match_at(b"+1", 0), 1);
}

#[test]
fn char_rejects_other_byte() {
    assert_eq!(Matcher::byte(b'+').match_at(b"-1", 0), 0);
}

#[test]
fn char_at_end_is_no_match() {
    assert_eq!(Matcher::char(CharClass::Digit).match_at(b"12", 2), 2);
}

// === Run ===

#[test]
fn run_consumes_longest_prefix() {
    assert_eq!(Matcher::run(CharClass::Digit).match_at(b"123+4", 0), 3);
}

#[test]
fn run_may_consume_nothing() {
    assert_eq!(Matcher::run(CharClass::Digit).match_at(b"+4", 0), 0);
}

#[test]
fn run_stops_at_end() {
    assert_eq!(Matcher::run(CharClass::Blank).match_at(b"a   ", 1), 4);
}

// === Literal ===

#[test]
fn literal_matches_exact_text() {
    assert_eq!(Matcher::literal("begin").match_at(b"begin x", 0), 5);
}

#[test]
fn literal_is_case_sensitive_by_default() {
    assert_eq!(Matcher::literal("begin").match_at(b"BEGIN", 0), 0);
}

#[test]
fn literal_fails_on_short_input() {
    assert_eq!(Matcher::literal("begin").match_at(b"beg", 0), 0);
}

#[test]
fn literal_fails_on_mismatch_before_end() {
    assert_eq!(Matcher::literal("begin").match_at(b"begun", 0), 0);
}

#[test]
fn keyword_folds_ascii_case() {
    assert_eq!(Matcher::keyword("begin").match_at(b"BeGiN;", 0), 5);
    assert_eq!(Matcher::keyword("DIV").match_at(b"div", 0), 3);
}

#[test]
fn keyword_fails_on_short_input() {
    assert_eq!(Matcher::keyword("program").match_at(b"PROG", 0), 0);
}

#[test]
fn keyword_does_not_fold_non_letters() {
    assert_eq!(Matcher::keyword("a[").match_at(b"A{", 0), 0);
}

// === Delimited ===

#[test]
fn delimited_consumes_through_stop() {
    let m = Matcher::delimited("/*", "*/");
    assert_eq!(m.match_at(b"/* note */1", 0), 10);
}

#[test]
fn delimited_stops_at_first_stop_literal() {
    let m = Matcher::delimited("/*", "*/");
    assert_eq!(m.match_at(b"/* a */ b */", 0), 7);
}

#[test]
fn delimited_without_stop_is_no_match() {
    let m = Matcher::delimited("/*", "*/");
    assert_eq!(m.match_at(b"/* never closed", 0), 0);
}

#[test]
fn delimited_requires_start_literal() {
    let m = Matcher::delimited("{", "}");
    assert_eq!(m.match_at(b"x { }", 0), 0);
    assert_eq!(m.match_at(b"x { }", 2), 5);
}

#[test]
fn delimited_stop_may_directly_follow_start() {
    let m = Matcher::delimited("/*", "*/");
    assert_eq!(m.match_at(b"/**/", 0), 4);
}

// === Sequence ===

#[test]
fn sequence_matches_all_steps() {
    let assign = Matcher::sequence([Matcher::byte(b':'), Matcher::byte(b'=')]);
    assert_eq!(assign.match_at(b":=1", 0), 2);
}

#[test]
fn sequence_resets_on_later_failure() {
    let assign = Matcher::sequence([Matcher::byte(b':'), Matcher::byte(b'=')]);
    assert_eq!(assign.match_at(b": =", 0), 0);
}

#[test]
fn sequence_fails_when_input_ends_between_steps() {
    let real = Matcher::sequence([
        Matcher::run(CharClass::Digit),
        Matcher::byte(b'.'),
        Matcher::run(CharClass::Digit),
    ]);
    assert_eq!(real.match_at(b"12.", 0), 0);
    assert_eq!(real.match_at(b"12.5", 0), 4);
}

#[test]
fn sequence_fails_when_a_step_consumes_nothing() {
    let ident = Matcher::sequence([
        Matcher::char(CharClass::Letter),
        Matcher::run(CharClass::LetterOrDigit),
    ]);
    assert_eq!(ident.match_at(b"x+", 0), 0);
    assert_eq!(ident.match_at(b"x1+", 0), 2);
}

#[test]
fn empty_sequence_is_no_match() {
    assert_eq!(Matcher::sequence([]).match_at(b"abc", 0), 0);
}

proptest! {
    #[test]
    fn matchers_never_overrun_input(input in proptest::collection::vec(any::<u8>(), 0..64), from in 0usize..80) {
        let matchers = [
            Matcher::run(CharClass::Digit),
            Matcher::keyword("end"),
            Matcher::delimited("{", "}"),
            Matcher::sequence([Matcher::byte(b':'), Matcher::byte(b'=')]),
        ];
        for m in &matchers {
            let end = m.match_at(&input, from);
            prop_assert!(end == from || (end > from && end <= input.len()));
        }
    }
}
