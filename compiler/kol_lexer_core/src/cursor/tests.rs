use pretty_assertions::assert_eq;
use proptest::prelude::*;

use super::Cursor;
use crate::test_kinds::{table, Kind};
use crate::Token;

fn rendered(src: &str) -> Vec<String> {
    let table = table();
    table.cursor(src).tokens().map(|t| t.to_string()).collect()
}

#[test]
fn empty_source_starts_at_end() {
    let table = table();
    let cursor = table.cursor("");
    assert!(cursor.is_at_end());
    assert_eq!(cursor, Cursor::end(&table, ""));
    assert_eq!(cursor.current().to_string(), "Token(EOF)");
}

#[test]
fn blank_source_starts_at_end() {
    let table = table();
    let src = "   ";
    assert_eq!(table.cursor(src), Cursor::end(&table, src));
}

#[test]
fn last_token_is_not_end() {
    let table = table();
    let src = "7";
    let mut cursor = table.cursor(src);
    assert!(!cursor.is_at_end());
    assert_eq!(cursor.current(), Token::new(Kind::Number, "7", 0));
    cursor.advance();
    assert!(cursor.is_at_end());
    assert_eq!(cursor, Cursor::end(&table, src));
}

#[test]
fn advancing_at_end_is_idempotent() {
    let table = table();
    let src = "1";
    let mut cursor = Cursor::end(&table, src);
    cursor.advance();
    cursor.advance();
    assert_eq!(cursor, Cursor::end(&table, src));
    assert_eq!(cursor.offset(), 1);
}

#[test]
fn tokens_in_order() {
    assert_eq!(
        rendered("12 + ab /* c */ \u{5}"),
        vec![
            "Token(NUMBER, 12)",
            "Token(PLUS, +)",
            "Token(WORD, ab)",
            "Token(COMMENT, /* c */)",
            "Token(UNKNOWN, \u{5})",
        ]
    );
}

#[test]
fn copies_are_independent() {
    let table = table();
    let src = "1 + 2";
    let mut a = table.cursor(src);
    let saved = a;
    a.advance();
    a.advance();
    assert_eq!(saved.current(), Token::new(Kind::Number, "1", 0));
    assert_eq!(a.current(), Token::new(Kind::Number, "2", 4));
    assert_ne!(a, saved);
    a = saved;
    assert_eq!(a, saved);
}

#[test]
fn two_scans_stay_in_step() {
    let table = table();
    let src = "3+4 + x";
    let mut a = table.cursor(src);
    let mut b = table.cursor(src);
    while !a.is_at_end() {
        assert_eq!(a, b);
        a.advance();
        b.advance();
    }
    assert_eq!(b, Cursor::end(&table, src));
}

#[test]
fn cursors_over_different_buffers_differ() {
    let table = table();
    let one = String::from("5");
    let two = String::from("5");
    assert_ne!(table.cursor(&one), table.cursor(&two));
}

#[test]
fn offset_tracks_current_token() {
    let table = table();
    let mut cursor = table.cursor("  10 + 2");
    assert_eq!(cursor.offset(), 2);
    cursor.advance();
    assert_eq!(cursor.offset(), 5);
    assert_eq!(cursor.source(), "  10 + 2");
}

proptest! {
    #[test]
    fn cursor_reaches_end_in_bounded_steps(src in "[ a-z0-9+#;/*\u{5}]{0,40}") {
        let table = table();
        let mut cursor = table.cursor(&src);
        let mut steps = 0;
        while !cursor.is_at_end() {
            cursor.advance();
            steps += 1;
            prop_assert!(steps <= src.len());
        }
    }
}
