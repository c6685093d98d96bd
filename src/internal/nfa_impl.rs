//! This module contains the interned NFA representation.
//! It also provides the state-set algebra (epsilon closure and move) the subset construction
//! algorithm is built on. Sets of NFA states are represented as sorted, deduplicated vectors of
//! [StateID]s, which makes set equality plain vector equality.

use log::trace;

use super::{LabelRegistry, StateID};

/// The interned NFA. Read-only after construction through the builder.
#[derive(Debug, Clone, Default)]
pub(crate) struct NfaImpl {
    /// The interned state labels.
    pub(crate) registry: LabelRegistry,
    /// The alphabet, sorted and deduplicated. Never contains the epsilon label.
    pub(crate) alphabet: Vec<char>,
    /// One entry per interned state, indexed by [StateID].
    pub(crate) states: Vec<NfaStateImpl>,
    /// The initial state.
    pub(crate) initial: StateID,
    /// The final states, sorted.
    pub(crate) finals: Vec<StateID>,
}

impl NfaImpl {
    pub(crate) fn new(
        registry: LabelRegistry,
        alphabet: Vec<char>,
        initial: StateID,
        mut finals: Vec<StateID>,
    ) -> Self {
        let states = (0..registry.len()).map(|_| NfaStateImpl::default()).collect();
        finals.sort_unstable();
        finals.dedup();
        Self {
            registry,
            alphabet,
            states,
            initial,
            finals,
        }
    }

    pub(crate) fn add_transition(&mut self, from: StateID, on: char, target_state: StateID) {
        trace!("NFA transition {} --{}--> {}", from, on, target_state);
        self.states[from.as_usize()]
            .transitions
            .push((on, target_state));
    }

    pub(crate) fn add_epsilon_transition(&mut self, from: StateID, target_state: StateID) {
        trace!("NFA transition {} --ε--> {}", from, target_state);
        self.states[from.as_usize()]
            .epsilon_transitions
            .push(target_state);
    }

    pub(crate) fn is_final(&self, state: StateID) -> bool {
        self.finals.binary_search(&state).is_ok()
    }

    /// Calculate the epsilon closure of a set of states.
    ///
    /// The result is the smallest superset of the input closed under epsilon transitions,
    /// computed as a fixed point with an index-walking work list. The input is not mutated and
    /// the returned vector is sorted and deduplicated, so it can serve directly as a set key.
    pub(crate) fn epsilon_closure_set<I>(&self, states: I) -> Vec<StateID>
    where
        I: IntoIterator<Item = StateID>,
    {
        let mut closure: Vec<StateID> = states.into_iter().collect();
        let mut i = 0;
        while i < closure.len() {
            let current_state = closure[i];
            for target_state in &self.states[current_state.as_usize()].epsilon_transitions {
                if !closure.contains(target_state) {
                    closure.push(*target_state);
                }
            }
            i += 1;
        }
        closure.sort_unstable();
        closure.dedup();
        closure
    }

    /// Calculate move(T, a) for a set of states T and an alphabet character a.
    /// This is the set of states reachable from T by exactly one transition labeled a.
    /// Epsilon transitions are never consulted here.
    pub(crate) fn move_set(&self, states: &[StateID], on: char) -> Vec<StateID> {
        let mut move_set = Vec::new();
        for state in states {
            for (ch, target_state) in &self.states[state.as_usize()].transitions {
                if *ch == on {
                    move_set.push(*target_state);
                }
            }
        }
        move_set.sort_unstable();
        move_set.dedup();
        move_set
    }

    /// Nondeterministic simulation of the NFA itself: step the epsilon-closed state set through
    /// the word and check for a final state at the end. This is the reference semantics the
    /// derived DFA must agree with.
    pub(crate) fn accepts(&self, word: &str) -> bool {
        let mut current = self.epsilon_closure_set([self.initial]);
        for ch in word.chars() {
            current = self.epsilon_closure_set(self.move_set(&current, ch));
            if current.is_empty() {
                return false;
            }
        }
        current.iter().any(|s| self.is_final(*s))
    }
}

/// A single NFA state. Symbol transitions and epsilon transitions are kept apart so that the
/// closure computation never has to filter.
#[derive(Debug, Clone, Default)]
pub(crate) struct NfaStateImpl {
    pub(crate) transitions: Vec<(char, StateID)>,
    pub(crate) epsilon_transitions: Vec<StateID>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(ids: &[u32]) -> Vec<StateID> {
        ids.iter().map(|i| StateID::new(*i)).collect()
    }

    /// q0 --ε--> q1 --ε--> q2, q1 --a--> q0
    fn epsilon_chain() -> NfaImpl {
        let mut registry = LabelRegistry::new();
        let q0 = registry.intern("q0");
        let q1 = registry.intern("q1");
        let q2 = registry.intern("q2");
        let mut nfa = NfaImpl::new(registry, vec!['a'], q0, vec![q2]);
        nfa.add_epsilon_transition(q0, q1);
        nfa.add_epsilon_transition(q1, q2);
        nfa.add_transition(q1, 'a', q0);
        nfa
    }

    #[test]
    fn test_epsilon_closure_chain() {
        let nfa = epsilon_chain();
        assert_eq!(nfa.epsilon_closure_set(ids(&[0])), ids(&[0, 1, 2]));
        assert_eq!(nfa.epsilon_closure_set(ids(&[1])), ids(&[1, 2]));
        assert_eq!(nfa.epsilon_closure_set(ids(&[2])), ids(&[2]));
    }

    #[test]
    fn test_epsilon_closure_is_idempotent() {
        let nfa = epsilon_chain();
        let once = nfa.epsilon_closure_set(ids(&[0]));
        let twice = nfa.epsilon_closure_set(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_epsilon_closure_of_empty_set_is_empty() {
        let nfa = epsilon_chain();
        assert!(nfa.epsilon_closure_set(ids(&[])).is_empty());
    }

    #[test]
    fn test_epsilon_closure_without_epsilon_out_edges() {
        let mut registry = LabelRegistry::new();
        let q0 = registry.intern("q0");
        let nfa = NfaImpl::new(registry, vec!['a'], q0, vec![]);
        assert_eq!(nfa.epsilon_closure_set([q0]), vec![q0]);
    }

    #[test]
    fn test_move_set_ignores_epsilon() {
        let nfa = epsilon_chain();
        // Only q1 has an 'a' transition; the epsilon edges do not contribute.
        assert_eq!(nfa.move_set(&ids(&[0, 1, 2]), 'a'), ids(&[0]));
        assert!(nfa.move_set(&ids(&[0, 2]), 'a').is_empty());
    }

    #[test]
    fn test_move_set_deduplicates() {
        let mut registry = LabelRegistry::new();
        let q0 = registry.intern("q0");
        let q1 = registry.intern("q1");
        let q2 = registry.intern("q2");
        let mut nfa = NfaImpl::new(registry, vec!['a'], q0, vec![q2]);
        nfa.add_transition(q0, 'a', q2);
        nfa.add_transition(q1, 'a', q2);
        assert_eq!(nfa.move_set(&[q0, q1], 'a'), vec![q2]);
    }

    #[test]
    fn test_nondeterministic_accepts() {
        let nfa = epsilon_chain();
        // The closure of q0 already contains the final state q2.
        assert!(nfa.accepts(""));
        // 'a' leads back to q0 whose closure contains q2 again.
        assert!(nfa.accepts("a"));
        assert!(nfa.accepts("aa"));
        // Unknown symbol empties the state set.
        assert!(!nfa.accepts("b"));
    }
}
