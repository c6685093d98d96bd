#![forbid(missing_docs)]
//! # `nfa2dfa`
//! The `nfa2dfa` crate converts nondeterministic finite automata, with or without epsilon
//! transitions, into equivalent deterministic finite automata using the subset construction
//! algorithm, and uses the resulting DFA to decide membership of words in the recognized
//! language.
//!
//! An NFA is built programmatically with the [NfaBuilder] or parsed from a simple line-oriented
//! text format with [NfaDefinition]. The states of the converted DFA are epsilon-closed sets of
//! NFA states; at the API boundary they are addressed by canonical, order-independent names
//! formed from the sorted member labels, so the set {q2, q0} becomes the state `q0q2`.
//!
//! # Example
//! ```rust
//! use nfa2dfa::{NfaBuilder, Symbol};
//!
//! fn main() -> nfa2dfa::Result<()> {
//!     let nfa = NfaBuilder::new()
//!         .add_states(&["q0", "q1", "q2"])
//!         .alphabet(&['0', '1'])
//!         .initial_state("q0")
//!         .add_final_state("q2")
//!         .add_transition("q0", Symbol::Char('0'), "q0")
//!         .add_transition("q0", Symbol::Char('0'), "q1")
//!         .add_transition("q0", Symbol::Char('1'), "q0")
//!         .add_transition("q1", Symbol::Char('1'), "q2")
//!         .build()?;
//!
//!     let dfa = nfa.to_dfa()?;
//!     assert_eq!(dfa.initial_state(), "q0");
//!
//!     for recognition in dfa.recognize(["01", "00"]) {
//!         println!("{}", recognition);
//!     }
//!     Ok(())
//! }
//! ```
//! The output of the example is:
//! ```text
//! 01 accepted
//! 00 not accepted
//! ```
//!
//! # Crate features
//! - `dot_writer` (default): rendering of NFAs and DFAs to the graphviz dot format via
//!   [Nfa::render_dot] and [Dfa::render_dot].
//! - `serde` (default): serialization support for [Symbol], [Recognition] and [NfaDefinition].

/// Module with the textual definition format.
mod definition;
pub use definition::{write_dfa, NfaDefinition, DEFAULT_EPSILON_SENTINEL};

/// Module with the DFA and the word recognizer.
mod dfa;
pub use dfa::Dfa;

/// Module with error definitions.
mod errors;
pub use errors::{Nfa2DfaError, Nfa2DfaErrorKind, Result};

/// The module with internal implementation details.
mod internal;

/// Module with the NFA.
mod nfa;
pub use nfa::Nfa;

/// Module with the NFA builder.
mod nfa_builder;
pub use nfa_builder::NfaBuilder;

/// Module that provides the transition label type.
mod symbol;
pub use symbol::Symbol;

/// Module that provides the recognition verdict type.
mod verdict;
pub use verdict::Recognition;
