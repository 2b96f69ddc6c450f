//! Tri-state match results.
//!
//! | Variant | Meaning | Combinator reaction |
//! |---------|---------|---------------------|
//! | `Matched` | input matched | continue |
//! | `NoMatch` | this path does not apply | restore, try next alternative |
//! | `Error` | input cannot be parsed | stop, propagate unchanged |
//!
//! Combinators return `MatchResult<()>`: what they match is recorded in the
//! current production. Rule dispatch returns `MatchResult<Node>`, carrying
//! the node built for the rule.

/// Result of matching an expression or a rule.
#[derive(Clone, Debug, PartialEq, Eq)]
#[must_use]
pub enum MatchResult<T = ()> {
    Matched(T),
    /// Recoverable mismatch, with a static description of what failed.
    NoMatch(&'static str),
    /// Fatal failure.
    Error(String),
}

impl MatchResult<()> {
    pub const MATCHED: MatchResult<()> = MatchResult::Matched(());
}

impl<T> MatchResult<T> {
    // === Constructors ===

    #[inline]
    pub fn no_match(reason: &'static str) -> Self {
        MatchResult::NoMatch(reason)
    }

    #[cold]
    pub fn error(message: impl Into<String>) -> Self {
        MatchResult::Error(message.into())
    }

    // === Predicates ===

    #[inline]
    pub fn is_match(&self) -> bool {
        matches!(self, MatchResult::Matched(_))
    }

    #[inline]
    pub fn is_no_match(&self) -> bool {
        matches!(self, MatchResult::NoMatch(_))
    }

    #[inline]
    pub fn is_error(&self) -> bool {
        matches!(self, MatchResult::Error(_))
    }

    // === Transformations ===

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> MatchResult<U> {
        match self {
            MatchResult::Matched(value) => MatchResult::Matched(f(value)),
            MatchResult::NoMatch(reason) => MatchResult::NoMatch(reason),
            MatchResult::Error(message) => MatchResult::Error(message),
        }
    }

    /// The failure message, if any.
    pub fn message(&self) -> Option<&str> {
        match self {
            MatchResult::Matched(_) => None,
            MatchResult::NoMatch(reason) => Some(reason),
            MatchResult::Error(message) => Some(message),
        }
    }

    /// Convert to `Option`, dropping failure detail.
    pub fn ok(self) -> Option<T> {
        match self {
            MatchResult::Matched(value) => Some(value),
            MatchResult::NoMatch(_) | MatchResult::Error(_) => None,
        }
    }
}
