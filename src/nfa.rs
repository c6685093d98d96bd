use crate::internal::{DfaImpl, NfaImpl};
use crate::{Dfa, NfaBuilder, Result, Symbol};

/// A nondeterministic finite automaton, possibly with epsilon transitions.
///
/// An `Nfa` is validated and immutable; it is created through the [NfaBuilder] or parsed from a
/// textual definition with [crate::NfaDefinition]. Its only non-trivial operation is
/// [Nfa::to_dfa], the subset construction.
#[derive(Debug, Clone)]
pub struct Nfa {
    pub(crate) inner: NfaImpl,
}

impl Nfa {
    /// Creates a builder for an NFA.
    pub fn builder() -> NfaBuilder {
        NfaBuilder::new()
    }

    /// Returns an iterator over the state labels in declaration order.
    pub fn states(&self) -> impl Iterator<Item = &str> {
        self.inner.registry.iter()
    }

    /// Returns the alphabet, sorted and deduplicated. Epsilon is not part of the alphabet.
    pub fn alphabet(&self) -> &[char] {
        &self.inner.alphabet
    }

    /// Returns the label of the initial state.
    pub fn initial_state(&self) -> &str {
        self.inner.registry.label(self.inner.initial)
    }

    /// Returns an iterator over the labels of the final states.
    pub fn final_states(&self) -> impl Iterator<Item = &str> {
        self.inner
            .finals
            .iter()
            .map(|s| self.inner.registry.label(*s))
    }

    /// Returns an iterator over all transitions as (source label, symbol, target label) triples.
    pub fn transitions(&self) -> impl Iterator<Item = (&str, Symbol, &str)> {
        let registry = &self.inner.registry;
        self.inner
            .states
            .iter()
            .enumerate()
            .flat_map(move |(index, state)| {
                let from = registry.label((index as u32).into());
                state
                    .transitions
                    .iter()
                    .map(move |(ch, to)| (from, Symbol::Char(*ch), registry.label(*to)))
                    .chain(
                        state
                            .epsilon_transitions
                            .iter()
                            .map(move |to| (from, Symbol::Epsilon, registry.label(*to))),
                    )
            })
    }

    /// Decides membership of a word by nondeterministic simulation of the NFA itself, i.e.
    /// by stepping the epsilon-closed set of current states through the word.
    ///
    /// [Dfa::accepts] on the converted automaton agrees with this for every word; the direct
    /// simulation is mainly useful for cross-checking.
    pub fn accepts(&self, word: &str) -> bool {
        self.inner.accepts(word)
    }

    /// Converts the NFA into an equivalent DFA using the subset construction algorithm.
    pub fn to_dfa(&self) -> Result<Dfa> {
        Ok(Dfa {
            inner: DfaImpl::try_from_nfa(&self.inner)?,
        })
    }

    /// Renders the NFA to the graphviz dot format.
    #[cfg(feature = "dot_writer")]
    pub fn render_dot<W: std::io::Write>(&self, label: &str, output: &mut W) {
        crate::internal::dot::nfa_render(&self.inner, label, output);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn init() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn epsilon_nfa() -> Nfa {
        // q0 --ε--> q1, q1 --a--> q2
        Nfa::builder()
            .add_states(&["q0", "q1", "q2"])
            .alphabet(&['a'])
            .initial_state("q0")
            .add_final_state("q2")
            .add_transition("q0", Symbol::Epsilon, "q1")
            .add_transition("q1", Symbol::Char('a'), "q2")
            .build()
            .unwrap()
    }

    #[test]
    fn test_accessors() {
        init();
        let nfa = epsilon_nfa();
        assert_eq!(nfa.states().collect::<Vec<_>>(), vec!["q0", "q1", "q2"]);
        assert_eq!(nfa.alphabet(), &['a']);
        assert_eq!(nfa.initial_state(), "q0");
        assert_eq!(nfa.final_states().collect::<Vec<_>>(), vec!["q2"]);
        let mut transitions = nfa.transitions().collect::<Vec<_>>();
        transitions.sort();
        assert_eq!(
            transitions,
            vec![
                ("q0", Symbol::Epsilon, "q1"),
                ("q1", Symbol::Char('a'), "q2"),
            ]
        );
    }

    #[test]
    fn test_nondeterministic_simulation() {
        init();
        let nfa = epsilon_nfa();
        assert!(!nfa.accepts(""));
        assert!(nfa.accepts("a"));
        assert!(!nfa.accepts("aa"));
        assert!(!nfa.accepts("b"));
    }
}
