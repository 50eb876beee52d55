//! Selection snapshot handed to displays.

use serde::{Deserialize, Serialize};

/// Snapshot of the selection as seen through the current filters.
///
/// Only identifiers of items that currently pass the filters appear in
/// `selected`, in filtered order. Identifiers of filtered-out items stay
/// recorded by the provider and reappear once the filter lets them through.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionInfo {
    /// Identifiers of selected, currently filtered items.
    pub selected: Vec<String>,
    /// Whether more than one item may be selected at a time.
    pub multiselect: bool,
    /// Filtered item count at the time of the snapshot.
    pub total: usize,
}

impl SelectionInfo {
    #[must_use]
    pub fn has_selection(&self) -> bool {
        !self.selected.is_empty()
    }

    #[must_use]
    pub fn selection_count(&self) -> usize {
        self.selected.len()
    }

    #[must_use]
    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.iter().any(|s| s == id)
    }

    /// First selected identifier, if any.
    #[must_use]
    pub fn single_selection(&self) -> Option<&str> {
        self.selected.first().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_snapshot() {
        let info = SelectionInfo::default();
        assert!(!info.has_selection());
        assert_eq!(info.single_selection(), None);
    }

    #[test]
    fn test_lookup() {
        let info = SelectionInfo {
            selected: vec!["b".into(), "c".into()],
            multiselect: true,
            total: 3,
        };
        assert_eq!(info.selection_count(), 2);
        assert!(info.is_selected("c"));
        assert!(!info.is_selected("a"));
        assert_eq!(info.single_selection(), Some("b"));
    }
}
