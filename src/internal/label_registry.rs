use rustc_hash::FxHashMap;

use super::{ids::StateIDBase, StateID};

/// LabelRegistry interns the string labels of the NFA states.
///
/// All core algorithms work on dense [StateID]s; the labels only resurface at the API boundary
/// and in the canonical names of DFA states.
#[derive(Debug, Clone, Default)]
pub(crate) struct LabelRegistry {
    labels: Vec<String>,
    index: FxHashMap<String, StateID>,
}

impl LabelRegistry {
    /// Creates a new LabelRegistry.
    pub(crate) fn new() -> Self {
        Self {
            labels: Vec::new(),
            index: FxHashMap::default(),
        }
    }

    /// Adds a label to the registry if it is not already present and returns its ID.
    pub(crate) fn intern(&mut self, label: &str) -> StateID {
        if let Some(id) = self.index.get(label) {
            *id
        } else {
            let id = StateID::new(self.labels.len() as StateIDBase);
            self.labels.push(label.to_string());
            self.index.insert(label.to_string(), id);
            id
        }
    }

    /// Returns the ID of a label if it has been interned before.
    pub(crate) fn get(&self, label: &str) -> Option<StateID> {
        self.index.get(label).copied()
    }

    /// Returns the label of an interned state.
    pub(crate) fn label(&self, id: StateID) -> &str {
        &self.labels[id]
    }

    /// Returns an iterator over all interned labels in id order.
    pub(crate) fn iter(&self) -> impl Iterator<Item = &str> {
        self.labels.iter().map(|l| l.as_str())
    }

    /// Returns the number of interned labels.
    pub(crate) fn len(&self) -> usize {
        self.labels.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intern_is_idempotent() {
        let mut registry = LabelRegistry::new();
        let q0 = registry.intern("q0");
        let q1 = registry.intern("q1");
        assert_ne!(q0, q1);
        assert_eq!(registry.intern("q0"), q0);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_lookup() {
        let mut registry = LabelRegistry::new();
        let q0 = registry.intern("q0");
        assert_eq!(registry.get("q0"), Some(q0));
        assert_eq!(registry.get("q1"), None);
        assert_eq!(registry.label(q0), "q0");
    }
}
