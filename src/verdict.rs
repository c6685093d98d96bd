#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The outcome of recognizing a single word with a DFA.
///
/// The [std::fmt::Display] implementation pairs the word with its verdict, rendering the empty
/// word as `ε`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Recognition {
    word: String,
    accepted: bool,
}

impl Recognition {
    pub(crate) fn new(word: String, accepted: bool) -> Self {
        Self { word, accepted }
    }

    /// The word that was checked, as handed to the recognizer after trimming.
    pub fn word(&self) -> &str {
        &self.word
    }

    /// True if the DFA accepts the word.
    pub fn is_accepted(&self) -> bool {
        self.accepted
    }
}

impl std::fmt::Display for Recognition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let word = if self.word.is_empty() {
            "ε"
        } else {
            self.word.as_str()
        };
        if self.accepted {
            write!(f, "{} accepted", word)
        } else {
            write!(f, "{} not accepted", word)
        }
    }
}
