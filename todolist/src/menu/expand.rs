use std::collections::HashMap;

/// Open/closed flags for menu nodes, keyed by record id.
///
/// Ids without an entry are collapsed.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ExpandState {
    open: HashMap<i64, bool>,
}

impl ExpandState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip the flag for `id` and return the new value.
    pub fn toggle(&mut self, id: i64) -> bool {
        let entry = self.open.entry(id).or_insert(false);
        *entry = !*entry;
        *entry
    }

    pub fn is_expanded(&self, id: i64) -> bool {
        self.open.get(&id).copied().unwrap_or(false)
    }

    /// Number of ids that have been toggled at least once.
    pub fn len(&self) -> usize {
        self.open.len()
    }

    pub fn is_empty(&self) -> bool {
        self.open.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_is_collapsed() {
        let state = ExpandState::new();
        assert!(!state.is_expanded(1));
        assert!(state.is_empty());
    }

    #[test]
    fn test_toggle_opens_then_closes() {
        let mut state = ExpandState::new();
        assert!(state.toggle(1));
        assert!(state.is_expanded(1));
        assert!(!state.toggle(1));
        assert!(!state.is_expanded(1));
    }

    #[test]
    fn test_toggle_twice_restores_previous_state() {
        let mut state = ExpandState::new();
        state.toggle(7);
        let before = state.clone();
        state.toggle(7);
        state.toggle(7);
        assert_eq!(state, before);
    }

    #[test]
    fn test_ids_are_independent() {
        let mut state = ExpandState::new();
        state.toggle(1);
        state.toggle(2);
        state.toggle(2);
        assert!(state.is_expanded(1));
        assert!(!state.is_expanded(2));
    }

    #[test]
    fn test_unknown_id_still_records_entry() {
        let mut state = ExpandState::new();
        state.toggle(-42);
        assert_eq!(state.len(), 1);
        assert!(state.is_expanded(-42));
    }
}
