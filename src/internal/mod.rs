/// Module with conversion of automata to the graphviz dot format.
#[cfg(feature = "dot_writer")]
pub(crate) mod dot;

/// Module for the ID types of NFA and DFA states.
mod ids;
pub(crate) use ids::{DfaStateID, StateID};

/// Module that provides the label interner for NFA states.
mod label_registry;
pub(crate) use label_registry::LabelRegistry;

/// Module that provides the interned NFA and the state-set algebra.
mod nfa_impl;
pub(crate) use nfa_impl::NfaImpl;

/// Module with the subset construction engine and the resulting DFA representation.
mod subset;
pub(crate) use subset::DfaImpl;
