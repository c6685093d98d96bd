#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A transition label of an NFA.
///
/// Epsilon is modeled as its own variant instead of a reserved character so that it can never
/// clash with a legitimate member of the declared alphabet. The textual epsilon sentinel used by
/// the definition format (see [crate::NfaDefinition]) is resolved to [Symbol::Epsilon] during
/// parsing and does not exist beyond that point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Symbol {
    /// An epsilon transition, consuming no input symbol.
    Epsilon,
    /// A transition on a single alphabet character.
    Char(char),
}

impl Symbol {
    /// Returns true if the symbol is the epsilon transition label.
    #[inline]
    pub fn is_epsilon(&self) -> bool {
        matches!(self, Symbol::Epsilon)
    }

    /// Returns the alphabet character if the symbol is not epsilon.
    #[inline]
    pub fn as_char(&self) -> Option<char> {
        match self {
            Symbol::Epsilon => None,
            Symbol::Char(c) => Some(*c),
        }
    }
}

impl From<char> for Symbol {
    fn from(c: char) -> Self {
        Symbol::Char(c)
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Symbol::Epsilon => write!(f, "ε"),
            Symbol::Char(c) => write!(f, "{}", c),
        }
    }
}
