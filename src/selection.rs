//! Bulk-action selection.
//!
//! [`Selection`] tracks which record ids are checked for bulk operations,
//! independently of any checkbox state. It is a plain id set; the API facade
//! keeps it consistent with the store by refusing unknown ids on the way in
//! and calling [`Selection::reconcile`] after deletions.

use std::collections::HashSet;

#[derive(Debug, Default, Clone)]
pub struct Selection {
    ids: HashSet<String>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if the id was not already selected.
    pub fn add(&mut self, id: impl Into<String>) -> bool {
        self.ids.insert(id.into())
    }

    /// Returns true if the id was selected.
    pub fn remove(&mut self, id: &str) -> bool {
        self.ids.remove(id)
    }

    /// Flip an id's membership, returning whether it is selected afterwards.
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.ids.remove(id) {
            false
        } else {
            self.ids.insert(id.to_string());
            true
        }
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn ids(&self) -> &HashSet<String> {
        &self.ids
    }

    /// Drop every selected id that is not in `valid_ids`. Called after
    /// deletions so the selection never references a missing record.
    pub fn reconcile(&mut self, valid_ids: &HashSet<String>) {
        self.ids.retain(|id| valid_ids.contains(id));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_contains() {
        let mut selection = Selection::new();
        assert!(selection.add("P001"));
        assert!(!selection.add("P001"));
        assert!(selection.contains("P001"));
        assert_eq!(selection.len(), 1);
    }

    #[test]
    fn test_remove() {
        let mut selection = Selection::new();
        selection.add("P001");
        assert!(selection.remove("P001"));
        assert!(!selection.remove("P001"));
        assert!(selection.is_empty());
    }

    #[test]
    fn test_toggle_flips_membership() {
        let mut selection = Selection::new();
        assert!(selection.toggle("P001"));
        assert!(selection.contains("P001"));
        assert!(!selection.toggle("P001"));
        assert!(!selection.contains("P001"));
    }

    #[test]
    fn test_clear() {
        let mut selection = Selection::new();
        selection.add("P001");
        selection.add("P002");
        selection.clear();
        assert!(selection.is_empty());
    }

    #[test]
    fn test_reconcile_drops_stale_ids() {
        let mut selection = Selection::new();
        selection.add("P001");
        selection.add("P003");

        // P001 and P003 were deleted; only P002 survives in the store.
        let valid: HashSet<String> = ["P002".to_string()].into_iter().collect();
        selection.reconcile(&valid);

        assert!(selection.is_empty());
    }

    #[test]
    fn test_reconcile_keeps_valid_ids() {
        let mut selection = Selection::new();
        selection.add("P001");
        selection.add("P002");

        let valid: HashSet<String> = ["P002".to_string(), "P003".to_string()]
            .into_iter()
            .collect();
        selection.reconcile(&valid);

        assert_eq!(selection.len(), 1);
        assert!(selection.contains("P002"));
    }
}
