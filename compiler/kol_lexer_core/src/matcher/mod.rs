//! Character-level matchers.
//!
//! Every matcher has the same contract: given the source bytes and a start
//! position, return the position just past the consumed prefix. Returning
//! the start position unchanged means "no match"; a matcher never reports a
//! partial match.
//!
//! | Matcher | Consumes |
//! |---------|----------|
//! | `Char` | one byte in the class |
//! | `Run` | the longest prefix of bytes in the class (possibly empty) |
//! | `Literal` | the literal text, optionally ASCII case-insensitive |
//! | `Delimited` | start literal through the first following stop literal |
//! | `Sequence` | each step in turn, every step consuming something |

use memchr::memmem;

use crate::CharClass;

/// A prefix matcher over source bytes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Matcher {
    Char(CharClass),
    Run(CharClass),
    Literal {
        text: &'static str,
        case_insensitive: bool,
    },
    Delimited {
        start: &'static str,
        stop: &'static str,
    },
    Sequence(Vec<Matcher>),
}

impl Matcher {
    pub fn char(class: CharClass) -> Self {
        Matcher::Char(class)
    }

    /// Single-byte matcher for `byte`.
    pub fn byte(byte: u8) -> Self {
        Matcher::Char(CharClass::Byte(byte))
    }

    pub fn run(class: CharClass) -> Self {
        Matcher::Run(class)
    }

    /// Case-sensitive literal.
    pub fn literal(text: &'static str) -> Self {
        Matcher::Literal {
            text,
            case_insensitive: false,
        }
    }

    /// Literal compared with ASCII case folding (`A`–`Z` only).
    pub fn keyword(text: &'static str) -> Self {
        Matcher::Literal {
            text,
            case_insensitive: true,
        }
    }

    pub fn delimited(start: &'static str, stop: &'static str) -> Self {
        Matcher::Delimited { start, stop }
    }

    pub fn sequence(steps: impl IntoIterator<Item = Matcher>) -> Self {
        Matcher::Sequence(steps.into_iter().collect())
    }

    /// Match at `from`, returning the end of the consumed prefix.
    ///
    /// `from` is returned unchanged when the matcher does not apply. `Run`
    /// can legitimately consume nothing, which is indistinguishable from a
    /// failed match; callers that need progress must check `end > from`.
    pub fn match_at(&self, src: &[u8], from: usize) -> usize {
        match self {
            Matcher::Char(class) => match src.get(from) {
                Some(&b) if class.matches(b) => from + 1,
                _ => from,
            },
            Matcher::Run(class) => {
                let rest = src.get(from..).unwrap_or_default();
                from + rest.iter().take_while(|&&b| class.matches(b)).count()
            }
            Matcher::Literal {
                text,
                case_insensitive,
            } => match_literal(src, from, text.as_bytes(), *case_insensitive),
            Matcher::Delimited { start, stop } => match_delimited(src, from, start, stop),
            Matcher::Sequence(steps) => match_sequence(src, from, steps),
        }
    }
}

fn match_literal(src: &[u8], from: usize, literal: &[u8], case_insensitive: bool) -> usize {
    let Some(window) = src.get(from..from + literal.len()) else {
        return from;
    };
    let hit = if case_insensitive {
        window.eq_ignore_ascii_case(literal)
    } else {
        window == literal
    };
    if hit {
        from + literal.len()
    } else {
        from
    }
}

fn match_delimited(src: &[u8], from: usize, start: &str, stop: &str) -> usize {
    let body = match_literal(src, from, start.as_bytes(), false);
    if body == from {
        return from;
    }
    let rest = src.get(body..).unwrap_or_default();
    match memmem::find(rest, stop.as_bytes()) {
        Some(at) => body + at + stop.len(),
        None => from,
    }
}

fn match_sequence(src: &[u8], from: usize, steps: &[Matcher]) -> usize {
    let mut pos = from;
    for (i, step) in steps.iter().enumerate() {
        // A later step never starts at end of input.
        if i > 0 && pos >= src.len() {
            return from;
        }
        let next = step.match_at(src, pos);
        if next == pos {
            return from;
        }
        pos = next;
    }
    pos
}

#[cfg(test)]
mod tests;
