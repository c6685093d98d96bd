//! Textual automaton definitions.
//!
//! The definition format is line oriented:
//! - line 1: all state labels, separated by whitespace,
//! - line 2: the initial state,
//! - line 3: the final states, separated by whitespace (may be empty),
//! - every further non-empty line: a transition `source symbol target` with a single-character
//!   symbol.
//!
//! The reserved symbol `h` (see [DEFAULT_EPSILON_SENTINEL]) denotes an epsilon transition. The
//! sentinel only exists in this format; in the API epsilon is the [crate::Symbol::Epsilon]
//! variant, and an alphabet that contains the sentinel is rejected during conversion.

use std::io::Write;

use crate::{Dfa, Nfa, Nfa2DfaError, Nfa2DfaErrorKind, NfaBuilder, Result, Symbol};

/// The reserved character that denotes an epsilon transition in a textual definition.
pub const DEFAULT_EPSILON_SENTINEL: char = 'h';

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A parsed but not yet validated NFA definition.
///
/// This is the exchange format between the textual representation and the validated [Nfa]. The
/// transition symbols still contain the epsilon sentinel; it is resolved by
/// [NfaDefinition::into_nfa].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NfaDefinition {
    /// All state labels in declaration order.
    pub states: Vec<String>,
    /// The initial state label.
    pub initial: String,
    /// The final state labels.
    pub finals: Vec<String>,
    /// The transitions as (source, symbol, target) triples; the symbol may be the epsilon
    /// sentinel.
    pub transitions: Vec<(String, char, String)>,
}

fn definition_error(line: usize, reason: String) -> Nfa2DfaError {
    Nfa2DfaError::new(Nfa2DfaErrorKind::DefinitionError { line, reason })
}

impl NfaDefinition {
    /// Parses a textual NFA definition.
    ///
    /// Malformed lines are fatal; a corrupt automaton cannot yield a meaningful conversion.
    pub fn parse(input: &str) -> Result<Self> {
        let mut lines = input.lines().enumerate();

        let (_, states_line) = lines
            .next()
            .ok_or_else(|| definition_error(1, "missing state line".to_string()))?;
        let states: Vec<String> = states_line.split_whitespace().map(str::to_string).collect();
        if states.is_empty() {
            return Err(definition_error(1, "no states declared".to_string()));
        }

        let (_, initial_line) = lines
            .next()
            .ok_or_else(|| definition_error(2, "missing initial state line".to_string()))?;
        let mut initial_tokens = initial_line.split_whitespace();
        let initial = initial_tokens
            .next()
            .ok_or_else(|| definition_error(2, "no initial state declared".to_string()))?
            .to_string();
        if initial_tokens.next().is_some() {
            return Err(definition_error(
                2,
                "more than one initial state declared".to_string(),
            ));
        }

        let (_, finals_line) = lines
            .next()
            .ok_or_else(|| definition_error(3, "missing final state line".to_string()))?;
        let finals: Vec<String> = finals_line.split_whitespace().map(str::to_string).collect();

        let mut transitions = Vec::new();
        for (index, line) in lines {
            if line.trim().is_empty() {
                continue;
            }
            let parts: Vec<&str> = line.split_whitespace().collect();
            let [source, symbol, target] = parts.as_slice() else {
                return Err(definition_error(
                    index + 1,
                    format!("expected 'source symbol target', got '{}'", line.trim()),
                ));
            };
            let mut chars = symbol.chars();
            let symbol = chars.next().unwrap_or_default();
            if chars.next().is_some() {
                return Err(definition_error(
                    index + 1,
                    format!("transition symbol '{}' is not a single character", parts[1]),
                ));
            }
            transitions.push((source.to_string(), symbol, target.to_string()));
        }

        Ok(NfaDefinition {
            states,
            initial,
            finals,
            transitions,
        })
    }

    /// Converts the definition into a validated [Nfa] using the default epsilon sentinel and an
    /// alphabet derived from the non-epsilon transition symbols.
    pub fn into_nfa(self) -> Result<Nfa> {
        self.into_nfa_with(DEFAULT_EPSILON_SENTINEL, None)
    }

    /// Converts the definition into a validated [Nfa].
    ///
    /// `epsilon` is the sentinel character to interpret as an epsilon transition. When
    /// `alphabet` is `None` the alphabet is derived from the non-epsilon transition symbols; an
    /// explicit alphabet that contains the sentinel is rejected.
    pub fn into_nfa_with(self, epsilon: char, alphabet: Option<&[char]>) -> Result<Nfa> {
        let alphabet = match alphabet {
            Some(alphabet) => {
                if alphabet.contains(&epsilon) {
                    return Err(Nfa2DfaError::validation(format!(
                        "the epsilon sentinel '{epsilon}' must not be part of the alphabet"
                    )));
                }
                alphabet.to_vec()
            }
            None => self
                .transitions
                .iter()
                .filter(|(_, symbol, _)| *symbol != epsilon)
                .map(|(_, symbol, _)| *symbol)
                .collect(),
        };

        let mut builder = NfaBuilder::new()
            .alphabet(&alphabet)
            .initial_state(&self.initial);
        for state in &self.states {
            builder = builder.add_state(state);
        }
        for label in &self.finals {
            builder = builder.add_final_state(label);
        }
        for (source, symbol, target) in &self.transitions {
            let on = if *symbol == epsilon {
                Symbol::Epsilon
            } else {
                Symbol::Char(*symbol)
            };
            builder = builder.add_transition(source, on, target);
        }
        builder.build()
    }
}

/// Writes the definition of a DFA in the same line layout the NFA definition uses, with the
/// canonical state names: states, initial state, final states, then one transition per line.
pub fn write_dfa<W: Write>(dfa: &Dfa, output: &mut W) -> Result<()> {
    let names: Vec<&str> = dfa.state_names().collect();
    writeln!(output, "{}", names.join(" "))?;
    writeln!(output, "{}", dfa.initial_state())?;
    let finals: Vec<&str> = dfa.final_states().collect();
    writeln!(output, "{}", finals.join(" "))?;
    for (source, symbol, target) in dfa.transitions() {
        writeln!(output, "{} {} {}", source, symbol, target)?;
    }
    Ok(())
}
