//! Grammar rule identifiers.

use std::fmt;

/// Index of a rule in its grammar.
///
/// A rule's id must equal its position in the grammar's rule list;
/// [`Grammar::new`](crate::Grammar::new) rejects grammars where it does not.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, PartialOrd, Ord)]
#[repr(transparent)]
pub struct RuleId(u32);

impl RuleId {
    /// The start rule.
    pub const ROOT: RuleId = RuleId(0);

    #[inline]
    pub const fn new(index: u32) -> Self {
        RuleId(index)
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rule#{}", self.0)
    }
}
