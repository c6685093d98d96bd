use thiserror::Error;

/// The result type for the `nfa2dfa` crate.
pub type Result<T> = std::result::Result<T, Nfa2DfaError>;

/// The error type for the `nfa2dfa` crate.
#[derive(Error, Debug)]
pub struct Nfa2DfaError {
    /// The source of the error.
    pub source: Box<Nfa2DfaErrorKind>,
}

impl Nfa2DfaError {
    /// Create a new `Nfa2DfaError`.
    pub fn new(kind: Nfa2DfaErrorKind) -> Self {
        Nfa2DfaError {
            source: Box::new(kind),
        }
    }

    /// Create a validation error from a message.
    pub fn validation<T: Into<String>>(reason: T) -> Self {
        Nfa2DfaError::new(Nfa2DfaErrorKind::ValidationError(reason.into()))
    }
}

impl std::fmt::Display for Nfa2DfaError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.source)
    }
}

/// The error kind type.
#[derive(Error, Debug)]
pub enum Nfa2DfaErrorKind {
    /// The automaton definition is inconsistent, e.g. a transition references an undeclared
    /// state or the epsilon sentinel is part of the declared alphabet.
    #[error("invalid automaton: {0}")]
    ValidationError(String),

    /// A line of a textual automaton definition could not be parsed.
    #[error("definition line {line}: {reason}")]
    DefinitionError {
        /// The one-based line number within the definition text.
        line: usize,
        /// What went wrong in that line.
        reason: String,
    },

    /// Two distinct DFA states canonicalize to the same name. This can only happen for state
    /// labels that are neither fixed-width nor separator-safe.
    #[error("canonical name '{0}' denotes two distinct DFA states")]
    NameCollision(String),

    /// A std::io error occurred.
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

impl From<std::io::Error> for Nfa2DfaError {
    fn from(error: std::io::Error) -> Self {
        Nfa2DfaError::new(Nfa2DfaErrorKind::IoError(error))
    }
}
