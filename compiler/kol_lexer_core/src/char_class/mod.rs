//! Byte classes used by single-character and run matchers.

/// A predicate over one source byte.
///
/// All built-in classes are ASCII-only, so a class never accepts part of a
/// multi-byte UTF-8 sequence unless an explicit [`CharClass::Byte`] or
/// [`CharClass::AnyOf`] names such a byte.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CharClass {
    /// Exactly this byte.
    Byte(u8),
    /// `0`–`9`.
    Digit,
    /// `a`–`z` and `A`–`Z`.
    Letter,
    /// [`CharClass::Letter`] or [`CharClass::Digit`].
    LetterOrDigit,
    /// Space or horizontal tab.
    Blank,
    /// `\n` or `\r`.
    Newline,
    /// Any byte in the set.
    AnyOf(&'static [u8]),
    /// Either class.
    Either(Box<CharClass>, Box<CharClass>),
}

impl CharClass {
    /// Whether `byte` belongs to this class.
    #[inline]
    pub fn matches(&self, byte: u8) -> bool {
        match self {
            CharClass::Byte(b) => byte == *b,
            CharClass::Digit => byte.is_ascii_digit(),
            CharClass::Letter => byte.is_ascii_alphabetic(),
            CharClass::LetterOrDigit => byte.is_ascii_alphanumeric(),
            CharClass::Blank => byte == b' ' || byte == b'\t',
            CharClass::Newline => byte == b'\n' || byte == b'\r',
            CharClass::AnyOf(set) => set.contains(&byte),
            CharClass::Either(a, b) => a.matches(byte) || b.matches(byte),
        }
    }

    /// Union of `self` and `other`.
    #[must_use]
    pub fn or(self, other: CharClass) -> CharClass {
        CharClass::Either(Box::new(self), Box::new(other))
    }
}

#[cfg(test)]
mod tests;
