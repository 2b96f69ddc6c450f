use super::CharClass;

#[test]
fn digit_accepts_only_ascii_digits() {
    assert!(CharClass::Digit.matches(b'0'));
    assert!(CharClass::Digit.matches(b'9'));
    assert!(!CharClass::Digit.matches(b'a'));
    assert!(!CharClass::Digit.matches(0xC3));
}

#[test]
fn letter_covers_both_cases() {
    assert!(CharClass::Letter.matches(b'a'));
    assert!(CharClass::Letter.matches(b'Z'));
    assert!(!CharClass::Letter.matches(b'_'));
}

#[test]
fn letter_or_digit() {
    for b in [b'a', b'Q', b'5'] {
        assert!(CharClass::LetterOrDigit.matches(b));
    }
    assert!(!CharClass::LetterOrDigit.matches(b' '));
}

#[test]
fn blank_and_newline_are_disjoint() {
    assert!(CharClass::Blank.matches(b' '));
    assert!(CharClass::Blank.matches(b'\t'));
    assert!(!CharClass::Blank.matches(b'\n'));
    assert!(CharClass::Newline.matches(b'\n'));
    assert!(CharClass::Newline.matches(b'\r'));
    assert!(!CharClass::Newline.matches(b' '));
}

#[test]
fn any_of_set() {
    let class = CharClass::AnyOf(b"+-");
    assert!(class.matches(b'+'));
    assert!(class.matches(b'-'));
    assert!(!class.matches(b'*'));
}

#[test]
fn or_combines_classes() {
    let ident_start = CharClass::Letter.or(CharClass::Byte(b'_'));
    assert!(ident_start.matches(b'x'));
    assert!(ident_start.matches(b'_'));
    assert!(!ident_start.matches(b'1'));
}
