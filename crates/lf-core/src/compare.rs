//! Page-session loan comparison list.

use tracing::debug;

pub const DEFAULT_CAPACITY: usize = 3;
pub const DEFAULT_MIN_SELECTION: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    Added,
    AlreadyPresent,
    LimitReached,
}

/// State of the "Compare (n)" action, derived from the list size alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompareButton {
    pub label: String,
    pub enabled: bool,
}

/// Ordered set of loan ids with a fixed capacity.
#[derive(Debug, Clone)]
pub struct CompareList {
    ids: Vec<String>,
    capacity: usize,
    min_selection: usize,
}

impl Default for CompareList {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY, DEFAULT_MIN_SELECTION)
    }
}

impl CompareList {
    pub fn new(capacity: usize, min_selection: usize) -> Self {
        Self {
            ids: Vec::with_capacity(capacity),
            capacity,
            min_selection,
        }
    }

    /// The capacity check runs first: a full list rejects even a duplicate.
    pub fn add(&mut self, id: impl Into<String>) -> AddOutcome {
        let id = id.into();
        if self.ids.len() >= self.capacity {
            debug!(%id, capacity = self.capacity, "compare list full");
            return AddOutcome::LimitReached;
        }
        if self.contains(&id) {
            debug!(%id, "already in compare list");
            return AddOutcome::AlreadyPresent;
        }
        self.ids.push(id);
        AddOutcome::Added
    }

    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.ids.len();
        self.ids.retain(|existing| existing != id);
        self.ids.len() != before
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|existing| existing == id)
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn button(&self) -> CompareButton {
        CompareButton {
            label: format!("Compare ({})", self.ids.len()),
            enabled: self.ids.len() >= self.min_selection,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn duplicate_add_is_silent_noop() {
        let mut list = CompareList::default();
        assert_eq!(list.add("7"), AddOutcome::Added);
        assert_eq!(list.add("7"), AddOutcome::AlreadyPresent);
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn fourth_add_is_rejected() {
        let mut list = CompareList::default();
        for id in ["a", "b", "c"] {
            assert_eq!(list.add(id), AddOutcome::Added);
        }
        assert_eq!(list.add("d"), AddOutcome::LimitReached);
        assert_eq!(list.add("a"), AddOutcome::LimitReached);
        assert_eq!(list.ids(), ["a", "b", "c"]);
    }

    #[test]
    fn remove_is_idempotent() {
        let mut list = CompareList::default();
        list.add("a");
        assert!(!list.remove("zzz"));
        assert!(list.remove("a"));
        assert!(!list.remove("a"));
        assert!(list.is_empty());
    }

    #[test]
    fn button_tracks_size() {
        let mut list = CompareList::default();
        assert_eq!(
            list.button(),
            CompareButton {
                label: "Compare (0)".into(),
                enabled: false
            }
        );
        list.add("a");
        assert!(!list.button().enabled);
        list.add("b");
        assert_eq!(list.button().label, "Compare (2)");
        assert!(list.button().enabled);
        list.remove("a");
        assert!(!list.button().enabled);
    }

    proptest! {
        #[test]
        fn never_exceeds_capacity_or_duplicates(
            ops in prop::collection::vec((any::<bool>(), 0u8..6), 0..40),
        ) {
            let mut list = CompareList::default();
            for (is_add, id) in ops {
                let id = id.to_string();
                if is_add {
                    list.add(id);
                } else {
                    list.remove(&id);
                }
                prop_assert!(list.len() <= DEFAULT_CAPACITY);
                let mut sorted = list.ids().to_vec();
                sorted.sort();
                sorted.dedup();
                prop_assert_eq!(sorted.len(), list.len());
                prop_assert_eq!(list.button().enabled, list.len() >= DEFAULT_MIN_SELECTION);
            }
        }
    }
}
