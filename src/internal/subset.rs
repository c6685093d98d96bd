//! This module contains the DFA implementation.
//! The DFA is generated from the NFA using the subset construction algorithm: every DFA state is
//! an epsilon-closed set of NFA states, discovered breadth-first from the closure of the NFA's
//! initial state. Deduplication of discovered states is by set content, never by name.

use std::collections::{BTreeMap, BTreeSet, VecDeque};

use log::trace;
use rustc_hash::FxHashMap;

use crate::errors::{Nfa2DfaError, Nfa2DfaErrorKind};
use crate::Result;

use super::{
    ids::DfaStateIDBase, DfaStateID, LabelRegistry, NfaImpl, StateID,
};

/// The DFA implementation, the result of the subset construction.
/// The initial state is always the first state in the vector, i.e. state 0.
#[derive(Debug, Clone, Default)]
pub(crate) struct DfaImpl {
    /// The discovered states in discovery (breadth-first) order.
    pub(crate) states: Vec<DfaStateData>,
    /// The states whose underlying NFA-state set contains a final NFA state.
    pub(crate) finals: BTreeSet<DfaStateID>,
    /// The transition table. An absent entry is an implicit reject.
    pub(crate) transitions: BTreeMap<DfaStateID, BTreeMap<char, DfaStateID>>,
    /// The alphabet, copied from the NFA.
    pub(crate) alphabet: Vec<char>,
    /// The interned NFA labels, used to resolve canonical names back to label sets.
    pub(crate) registry: LabelRegistry,
    /// Reverse lookup from canonical name to state id. Injective by construction.
    pub(crate) names: FxHashMap<String, DfaStateID>,
}

impl DfaImpl {
    /// The initial DFA state, the epsilon closure of the NFA's initial state.
    pub(crate) fn initial(&self) -> DfaStateID {
        DfaStateID::new(0)
    }

    pub(crate) fn is_final(&self, state: DfaStateID) -> bool {
        self.finals.contains(&state)
    }

    /// The recorded successor of a state on a character, if any. Characters outside the
    /// alphabet fall through to `None` like any other missing entry.
    pub(crate) fn target(&self, state: DfaStateID, on: char) -> Option<DfaStateID> {
        self.transitions.get(&state).and_then(|t| t.get(&on)).copied()
    }

    /// Create a DFA from an NFA using the subset construction algorithm.
    pub(crate) fn try_from_nfa(nfa: &NfaImpl) -> Result<Self> {
        let mut dfa = DfaImpl {
            states: Vec::new(),
            finals: BTreeSet::new(),
            transitions: BTreeMap::new(),
            alphabet: nfa.alphabet.clone(),
            registry: nfa.registry.clone(),
            names: FxHashMap::default(),
        };

        // The initial state of the DFA is the epsilon closure of the initial state of the NFA.
        let initial_set = nfa.epsilon_closure_set([nfa.initial]);
        let mut seen: FxHashMap<Vec<StateID>, DfaStateID> = FxHashMap::default();
        let initial_state = dfa.add_state_if_new(initial_set, nfa, &mut seen)?;
        // The work queue holds discovered states that still need their transitions expanded.
        // FIFO order makes state numbering breadth-first; the resulting automaton does not
        // depend on the order.
        let mut work_queue = VecDeque::from([initial_state]);

        while let Some(state_id) = work_queue.pop_front() {
            let nfa_states = dfa.states[state_id.as_usize()].nfa_states.clone();
            for ch in dfa.alphabet.clone() {
                let target_states = nfa.epsilon_closure_set(nfa.move_set(&nfa_states, ch));
                if target_states.is_empty() {
                    // Implicit reject, no transition and no explicit dead state.
                    continue;
                }
                let known = seen.contains_key(&target_states);
                let target_state = dfa.add_state_if_new(target_states, nfa, &mut seen)?;
                dfa.transitions
                    .entry(state_id)
                    .or_default()
                    .insert(ch, target_state);
                if !known {
                    work_queue.push_back(target_state);
                }
            }
        }

        trace!("Constructed DFA:\n{}", dfa);
        Ok(dfa)
    }

    /// Add a state to the DFA if it does not already exist.
    /// The state is identified by the sorted set of NFA states that constitute it; two discovery
    /// paths yielding the same set collapse to one DFA state. The state becomes a final state if
    /// its set intersects the final states of the NFA.
    fn add_state_if_new(
        &mut self,
        nfa_states: Vec<StateID>,
        nfa: &NfaImpl,
        seen: &mut FxHashMap<Vec<StateID>, DfaStateID>,
    ) -> Result<DfaStateID> {
        debug_assert!(nfa_states.windows(2).all(|w| w[0] < w[1]));
        if let Some(state_id) = seen.get(&nfa_states) {
            return Ok(*state_id);
        }

        let state_id = DfaStateID::new(self.states.len() as DfaStateIDBase);
        let name = canonical_name(&nfa_states, &self.registry);
        if let Some(other) = self.names.insert(name.clone(), state_id) {
            // Two distinct sets concatenated to the same name, e.g. {"a","bc"} vs {"ab","c"}.
            trace!("Name '{}' already taken by state {}", name, other);
            return Err(Nfa2DfaError::new(Nfa2DfaErrorKind::NameCollision(name)));
        }

        if nfa_states.iter().any(|s| nfa.is_final(*s)) {
            trace!("* State {} '{}' is a final state.", state_id, name);
            self.finals.insert(state_id);
        }

        trace!("Add state {}: '{}' {:?}", state_id, name, nfa_states);
        seen.insert(nfa_states.clone(), state_id);
        self.states.push(DfaStateData {
            id: state_id,
            nfa_states,
            name,
        });
        Ok(state_id)
    }
}

impl std::fmt::Display for DfaImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "DFA")?;
        writeln!(f, "States:")?;
        for state in &self.states {
            writeln!(f, "{}: '{}' {:?}", state.id, state.name, state.nfa_states)?;
        }
        writeln!(f, "Final states:")?;
        for state_id in &self.finals {
            writeln!(f, "{}", state_id)?;
        }
        writeln!(f, "Transitions:")?;
        for (source_id, targets) in &self.transitions {
            write!(f, "{} -> ", source_id)?;
            for (ch, target_id) in targets {
                write!(f, "{}:{}, ", ch, target_id)?;
            }
            writeln!(f)?
        }
        Ok(())
    }
}

/// A single DFA state together with the set of NFA states it stands for.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct DfaStateData {
    pub(crate) id: DfaStateID,
    /// The sorted, deduplicated ids of the NFA states that constitute this DFA state.
    pub(crate) nfa_states: Vec<StateID>,
    /// The canonical name, the lexicographically sorted concatenation of the member labels.
    pub(crate) name: String,
}

/// The canonical, order-independent name of a set of NFA states: the member labels sorted
/// lexicographically and concatenated without a separator, e.g. {q2, q0} becomes "q0q2".
pub(crate) fn canonical_name(nfa_states: &[StateID], registry: &LabelRegistry) -> String {
    let mut labels: Vec<&str> = nfa_states.iter().map(|s| registry.label(*s)).collect();
    labels.sort_unstable();
    labels.concat()
}
