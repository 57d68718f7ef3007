//! View-local presentation state. Which cards are expanded, keyed by record id.
//!
//! Kept apart from the entities: toggling a card never touches a domain record.

use std::collections::HashSet;

#[derive(Debug, Default)]
pub struct ExpansionState {
    expanded: HashSet<String>,
}

impl ExpansionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_expanded(&self, id: &str) -> bool {
        self.expanded.contains(id)
    }

    /// Flip one card. Returns the new state.
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.expanded.remove(id) {
            false
        } else {
            self.expanded.insert(id.to_string());
            true
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_is_per_id() {
        let mut state = ExpansionState::new();
        assert!(!state.is_expanded("1"));
        assert!(state.toggle("1"));
        assert!(state.is_expanded("1"));
        assert!(!state.is_expanded("2"));
        assert!(!state.toggle("1"));
        assert!(!state.is_expanded("1"));
    }
}
