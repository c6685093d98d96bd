use crate::internal::DfaImpl;
use crate::Recognition;

/// A deterministic finite automaton, the result of [crate::Nfa::to_dfa].
///
/// Every DFA state is an epsilon-closed set of NFA states; at the API boundary states are
/// addressed by their canonical names, the lexicographically sorted concatenation of the member
/// labels (e.g. the set {q2, q0} is named `q0q2`). The naming is injective over the discovered
/// states, which the construction verifies.
///
/// The transition table records at most one target per (state, symbol) pair; a missing entry is
/// an implicit reject, there is no explicit dead state.
#[derive(Debug, Clone)]
pub struct Dfa {
    pub(crate) inner: DfaImpl,
}

impl Dfa {
    /// Returns the number of discovered DFA states.
    pub fn state_count(&self) -> usize {
        self.inner.states.len()
    }

    /// Returns an iterator over the canonical state names in discovery order.
    /// The initial state comes first.
    pub fn state_names(&self) -> impl Iterator<Item = &str> {
        self.inner.states.iter().map(|s| s.name.as_str())
    }

    /// Returns the canonical name of the initial state.
    pub fn initial_state(&self) -> &str {
        &self.inner.states[self.inner.initial().as_usize()].name
    }

    /// Returns an iterator over the canonical names of the final states.
    pub fn final_states(&self) -> impl Iterator<Item = &str> {
        self.inner
            .finals
            .iter()
            .map(|s| self.inner.states[s.as_usize()].name.as_str())
    }

    /// Returns the alphabet of the automaton.
    pub fn alphabet(&self) -> &[char] {
        &self.inner.alphabet
    }

    /// Returns an iterator over all transitions as (source name, symbol, target name) triples.
    pub fn transitions(&self) -> impl Iterator<Item = (&str, char, &str)> {
        let states = &self.inner.states;
        self.inner
            .transitions
            .iter()
            .flat_map(move |(source, targets)| {
                let from = states[source.as_usize()].name.as_str();
                targets
                    .iter()
                    .map(move |(ch, target)| (from, *ch, states[target.as_usize()].name.as_str()))
            })
    }

    /// Resolves a canonical state name back to the sorted labels of the underlying NFA states.
    /// Returns `None` for a name that does not denote a discovered state.
    pub fn state_set(&self, name: &str) -> Option<Vec<&str>> {
        self.inner.names.get(name).map(|id| {
            let mut labels: Vec<&str> = self.inner.states[id.as_usize()]
                .nfa_states
                .iter()
                .map(|s| self.inner.registry.label(*s))
                .collect();
            labels.sort_unstable();
            labels
        })
    }

    /// Returns true if the named state is a final state.
    pub fn is_final_state(&self, name: &str) -> bool {
        self.inner
            .names
            .get(name)
            .is_some_and(|id| self.inner.is_final(*id))
    }

    /// Decides whether the DFA accepts the given word.
    ///
    /// The empty word is accepted iff the initial state is final. A symbol without a recorded
    /// transition, including any character outside the alphabet, rejects immediately without
    /// consuming the remaining symbols.
    pub fn accepts(&self, word: &str) -> bool {
        let mut current = self.inner.initial();
        for ch in word.chars() {
            match self.inner.target(current, ch) {
                Some(target) => current = target,
                None => return false,
            }
        }
        self.inner.is_final(current)
    }

    /// Runs the recognizer over a sequence of words and returns one [Recognition] per word, in
    /// input order. Each word is trimmed before simulation; a rejected word never affects the
    /// processing of the remaining ones.
    pub fn recognize<I, S>(&self, words: I) -> Vec<Recognition>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        words
            .into_iter()
            .map(|word| {
                let word = word.as_ref().trim().to_string();
                let accepted = self.accepts(&word);
                Recognition::new(word, accepted)
            })
            .collect()
    }

    /// Renders the DFA to the graphviz dot format.
    #[cfg(feature = "dot_writer")]
    pub fn render_dot<W: std::io::Write>(&self, label: &str, output: &mut W) {
        crate::internal::dot::dfa_render(&self.inner, label, output);
    }
}

#[cfg(test)]
mod tests {
    use crate::{Nfa, Symbol};

    fn init() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn sample_dfa() -> crate::Dfa {
        Nfa::builder()
            .add_states(&["q0", "q1", "q2"])
            .alphabet(&['0', '1'])
            .initial_state("q0")
            .add_final_state("q2")
            .add_transition("q0", Symbol::Char('0'), "q0")
            .add_transition("q0", Symbol::Char('0'), "q1")
            .add_transition("q0", Symbol::Char('1'), "q0")
            .add_transition("q1", Symbol::Char('1'), "q2")
            .build()
            .unwrap()
            .to_dfa()
            .unwrap()
    }

    #[test]
    fn test_accessors() {
        init();
        let dfa = sample_dfa();
        assert_eq!(dfa.state_count(), 3);
        assert_eq!(dfa.initial_state(), "q0");
        assert_eq!(dfa.final_states().collect::<Vec<_>>(), vec!["q0q2"]);
        assert!(dfa.is_final_state("q0q2"));
        assert!(!dfa.is_final_state("q0"));
        assert!(!dfa.is_final_state("unknown"));
        assert_eq!(dfa.state_set("q0q1"), Some(vec!["q0", "q1"]));
        assert_eq!(dfa.state_set("q1"), None);
    }

    #[test]
    fn test_accepts() {
        init();
        let dfa = sample_dfa();
        assert!(dfa.accepts("01"));
        assert!(!dfa.accepts("00"));
        assert!(!dfa.accepts(""));
        // Out-of-alphabet symbol rejects, it does not panic or error.
        assert!(!dfa.accepts("012"));
    }

    #[test]
    fn test_recognize_keeps_order_and_trims() {
        init();
        let dfa = sample_dfa();
        let results = dfa.recognize([" 01 ", "00", ""]);
        assert_eq!(results.len(), 3);
        assert_eq!(results[0].word(), "01");
        assert!(results[0].is_accepted());
        assert!(!results[1].is_accepted());
        assert_eq!(results[2].word(), "");
        assert!(!results[2].is_accepted());
        assert_eq!(results[2].to_string(), "ε not accepted");
    }
}
