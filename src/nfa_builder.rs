use crate::internal::{LabelRegistry, NfaImpl};
use crate::{Nfa, Nfa2DfaError, Result, Symbol};

/// A builder for creating a validated [Nfa].
///
/// All adders are chainable; [NfaBuilder::build] performs the validation the conversion core
/// relies on: every transition endpoint, the initial state and every final state must be
/// declared, and every non-epsilon transition symbol must be part of the declared alphabet.
#[derive(Debug, Clone, Default)]
pub struct NfaBuilder {
    states: Vec<String>,
    alphabet: Vec<char>,
    transitions: Vec<(String, Symbol, String)>,
    initial: Option<String>,
    finals: Vec<String>,
}

impl NfaBuilder {
    /// Creates a new NFA builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares a state.
    pub fn add_state(mut self, label: &str) -> Self {
        self.states.push(label.to_string());
        self
    }

    /// Declares multiple states.
    pub fn add_states(mut self, labels: &[&str]) -> Self {
        self.states.extend(labels.iter().map(|l| l.to_string()));
        self
    }

    /// Sets the alphabet. Duplicates are removed, the order is irrelevant.
    pub fn alphabet(mut self, symbols: &[char]) -> Self {
        self.alphabet = symbols.to_vec();
        self
    }

    /// Adds a transition. Multiple transitions per (state, symbol) pair are permitted, that is
    /// the nondeterminism. Use [Symbol::Epsilon] for an epsilon transition.
    pub fn add_transition(mut self, from: &str, on: Symbol, to: &str) -> Self {
        self.transitions
            .push((from.to_string(), on, to.to_string()));
        self
    }

    /// Sets the initial state.
    pub fn initial_state(mut self, label: &str) -> Self {
        self.initial = Some(label.to_string());
        self
    }

    /// Declares a final state.
    pub fn add_final_state(mut self, label: &str) -> Self {
        self.finals.push(label.to_string());
        self
    }

    /// Declares multiple final states.
    pub fn final_states(mut self, labels: &[&str]) -> Self {
        self.finals.extend(labels.iter().map(|l| l.to_string()));
        self
    }

    /// Builds the NFA from the builder, validating and interning the definition.
    pub fn build(self) -> Result<Nfa> {
        if self.states.is_empty() {
            return Err(Nfa2DfaError::validation("no states declared"));
        }
        let initial = self
            .initial
            .ok_or_else(|| Nfa2DfaError::validation("no initial state declared"))?;

        let mut registry = LabelRegistry::new();
        for label in &self.states {
            registry.intern(label);
        }

        let initial = registry
            .get(&initial)
            .ok_or_else(|| Nfa2DfaError::validation(format!("initial state '{initial}' is not a declared state")))?;

        let mut finals = Vec::with_capacity(self.finals.len());
        for label in &self.finals {
            finals.push(registry.get(label).ok_or_else(|| {
                Nfa2DfaError::validation(format!("final state '{label}' is not a declared state"))
            })?);
        }

        let mut alphabet = self.alphabet;
        alphabet.sort_unstable();
        alphabet.dedup();

        let mut nfa = NfaImpl::new(registry, alphabet, initial, finals);
        for (from, on, to) in &self.transitions {
            let from = nfa.registry.get(from).ok_or_else(|| {
                Nfa2DfaError::validation(format!("transition source '{from}' is not a declared state"))
            })?;
            let to = nfa.registry.get(to).ok_or_else(|| {
                Nfa2DfaError::validation(format!("transition target '{to}' is not a declared state"))
            })?;
            match on {
                Symbol::Epsilon => nfa.add_epsilon_transition(from, to),
                Symbol::Char(ch) => {
                    if nfa.alphabet.binary_search(ch).is_err() {
                        return Err(Nfa2DfaError::validation(format!(
                            "transition symbol '{ch}' is not part of the alphabet"
                        )));
                    }
                    nfa.add_transition(from, *ch, to);
                }
            }
        }

        Ok(Nfa { inner: nfa })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Nfa2DfaErrorKind;

    fn base() -> NfaBuilder {
        NfaBuilder::new()
            .add_states(&["q0", "q1"])
            .alphabet(&['a', 'b'])
            .initial_state("q0")
            .add_final_state("q1")
    }

    fn expect_validation_error(result: Result<Nfa>, fragment: &str) {
        let err = result.unwrap_err();
        match *err.source {
            Nfa2DfaErrorKind::ValidationError(ref reason) => {
                assert!(reason.contains(fragment), "unexpected reason: {reason}")
            }
            ref other => panic!("unexpected error kind: {other}"),
        }
    }

    #[test]
    fn test_builds_valid_nfa() {
        let nfa = base()
            .add_transition("q0", Symbol::Char('a'), "q1")
            .add_transition("q0", Symbol::Epsilon, "q1")
            .build()
            .unwrap();
        assert_eq!(nfa.states().count(), 2);
    }

    #[test]
    fn test_rejects_missing_initial_state() {
        let result = NfaBuilder::new().add_state("q0").build();
        expect_validation_error(result, "no initial state");
    }

    #[test]
    fn test_rejects_undeclared_states() {
        expect_validation_error(base().initial_state("q9").build(), "initial state 'q9'");
        expect_validation_error(base().add_final_state("q9").build(), "final state 'q9'");
        expect_validation_error(
            base().add_transition("q9", Symbol::Char('a'), "q0").build(),
            "source 'q9'",
        );
        expect_validation_error(
            base().add_transition("q0", Symbol::Char('a'), "q9").build(),
            "target 'q9'",
        );
    }

    #[test]
    fn test_rejects_symbol_outside_alphabet() {
        expect_validation_error(
            base().add_transition("q0", Symbol::Char('x'), "q1").build(),
            "symbol 'x'",
        );
    }

    #[test]
    fn test_alphabet_is_sorted_and_deduplicated() {
        let nfa = base().alphabet(&['b', 'a', 'b']).build().unwrap();
        assert_eq!(nfa.alphabet(), &['a', 'b']);
    }
}
