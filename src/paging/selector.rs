//! Page window and selection state.
//!
//! [`PageSelector`] knows nothing about items beyond their identifiers and the
//! filtered total. It answers two questions for the provider: which slice of
//! the filtered sequence is on screen, and which identifiers are selected.
//!
//! # Selection state machine
//!
//! ```text
//! single-select:  empty ⇄ single
//! multi-select:   empty ⇄ single ⇄ multi
//! ```
//!
//! In single-select mode selecting a new identifier replaces the previous one
//! in one step, so the selected set never holds two identifiers.

use crate::domain::page::{page_count, DEFAULT_PAGE_SIZE};
use std::collections::HashSet;

/// Tracks the current page and the selected identifiers.
#[derive(Debug, Clone)]
pub struct PageSelector {
    multiselect: bool,
    page_size: usize,
    page: usize,
    total: usize,
    selected: HashSet<String>,
}

impl Default for PageSelector {
    fn default() -> Self {
        Self::new(false, DEFAULT_PAGE_SIZE)
    }
}

impl PageSelector {
    /// Creates a selector. A zero `page_size` is clamped to 1.
    #[must_use]
    pub fn new(multiselect: bool, page_size: usize) -> Self {
        Self {
            multiselect,
            page_size: page_size.max(1),
            page: 0,
            total: 0,
            selected: HashSet::new(),
        }
    }

    #[must_use]
    pub const fn is_multiselect(&self) -> bool {
        self.multiselect
    }

    #[must_use]
    pub const fn page_size(&self) -> usize {
        self.page_size
    }

    #[must_use]
    pub const fn page(&self) -> usize {
        self.page
    }

    /// Filtered total the page bounds are computed from.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.total
    }

    #[must_use]
    pub fn pages(&self) -> usize {
        page_count(self.total, self.page_size)
    }

    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size.max(1);
        self.clamp_page();
    }

    /// Records a new filtered total and pulls the page back into range.
    pub fn set_total(&mut self, total: usize) {
        self.total = total;
        self.clamp_page();
    }

    /// Moves to `page`, clamped to `[0, pages - 1]`.
    pub fn set_page(&mut self, page: usize) {
        self.page = page.min(self.pages() - 1);
    }

    pub fn first_page(&mut self) {
        self.page = 0;
    }

    pub fn previous_page(&mut self) {
        self.page = self.page.saturating_sub(1);
    }

    pub fn next_page(&mut self) {
        self.set_page(self.page.saturating_add(1));
    }

    pub fn last_page(&mut self) {
        self.page = self.pages() - 1;
    }

    fn clamp_page(&mut self) {
        self.set_page(self.page);
    }

    /// The slice of `filtered` on the current page.
    ///
    /// When everything fits on one page the whole sequence is returned, so
    /// visible and filtered coincide.
    #[must_use]
    pub fn current_page<'a, E>(&self, filtered: &'a [E]) -> &'a [E] {
        if filtered.len() <= self.page_size {
            return filtered;
        }
        let chunks = filtered.len().div_ceil(self.page_size);
        let start = self.page.min(chunks - 1) * self.page_size;
        let end = (start + self.page_size).min(filtered.len());
        &filtered[start..end]
    }

    /// Adds or removes `id`.
    ///
    /// Selecting in single-select mode first drops every other identifier.
    /// Returns whether the selected set changed.
    pub fn select(&mut self, id: &str, on: bool) -> bool {
        if on {
            if !self.multiselect {
                if self.selected.len() == 1 && self.selected.contains(id) {
                    return false;
                }
                self.selected.clear();
            }
            self.selected.insert(id.to_string())
        } else {
            self.selected.remove(id)
        }
    }

    /// Marks every identifier in `ids` selected. No-op in single-select mode.
    pub fn select_all<'a>(&mut self, ids: impl IntoIterator<Item = &'a str>) {
        if !self.multiselect {
            return;
        }
        self.selected.extend(ids.into_iter().map(String::from));
    }

    /// Removes every identifier in `ids` from the selection.
    pub fn deselect_all<'a>(&mut self, ids: impl IntoIterator<Item = &'a str>) {
        for id in ids {
            self.selected.remove(id);
        }
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }

    #[must_use]
    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.contains(id)
    }

    /// Every recorded identifier, including ones currently filtered out.
    #[must_use]
    pub const fn selected_ids(&self) -> &HashSet<String> {
        &self.selected
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selector(page_size: usize, total: usize) -> PageSelector {
        let mut selector = PageSelector::new(true, page_size);
        selector.set_total(total);
        selector
    }

    #[test]
    fn test_page_size_is_clamped() {
        let mut selector = PageSelector::new(false, 0);
        assert_eq!(selector.page_size(), 1);
        selector.set_page_size(0);
        assert_eq!(selector.page_size(), 1);
    }

    #[test]
    fn test_set_page_clamps_to_last_page() {
        let mut selector = selector(2, 5);
        assert_eq!(selector.pages(), 3);
        selector.set_page(5);
        assert_eq!(selector.page(), 2);
    }

    #[test]
    fn test_shrinking_total_pulls_page_back() {
        let mut selector = selector(2, 10);
        selector.set_page(4);
        selector.set_total(3);
        assert_eq!(selector.page(), 1);
        selector.set_total(0);
        assert_eq!(selector.page(), 0);
    }

    #[test]
    fn test_navigation_stays_in_range() {
        let mut selector = selector(3, 7);
        selector.previous_page();
        assert_eq!(selector.page(), 0);
        selector.next_page();
        selector.next_page();
        selector.next_page();
        assert_eq!(selector.page(), 2);
        selector.first_page();
        assert_eq!(selector.page(), 0);
        selector.last_page();
        assert_eq!(selector.page(), 2);
    }

    #[test]
    fn test_current_page_slices() {
        let items = [1, 2, 3, 4, 5];
        let mut selector = selector(2, items.len());
        assert_eq!(selector.current_page(&items), &[1, 2]);
        selector.set_page(1);
        assert_eq!(selector.current_page(&items), &[3, 4]);
        selector.set_page(2);
        assert_eq!(selector.current_page(&items), &[5]);
    }

    #[test]
    fn test_current_page_when_everything_fits() {
        let items = [1, 2, 3];
        let selector = selector(3, items.len());
        assert_eq!(selector.current_page(&items), &items);
        assert!(selector.current_page::<u8>(&[]).is_empty());
    }

    #[test]
    fn test_single_select_is_exclusive() {
        let mut selector = PageSelector::new(false, 10);
        assert!(selector.select("a", true));
        assert!(selector.select("b", true));
        assert!(!selector.is_selected("a"));
        assert!(selector.is_selected("b"));
        assert_eq!(selector.selected_ids().len(), 1);
        assert!(!selector.select("b", true));
    }

    #[test]
    fn test_multi_select_accumulates() {
        let mut selector = PageSelector::new(true, 10);
        selector.select("a", true);
        selector.select("b", true);
        assert_eq!(selector.selected_ids().len(), 2);
        assert!(selector.select("a", false));
        assert!(!selector.select("a", false));
        assert_eq!(selector.selected_ids().len(), 1);
    }

    #[test]
    fn test_bulk_select_requires_multiselect() {
        let mut single = PageSelector::new(false, 10);
        single.select_all(["a", "b"]);
        assert!(single.selected_ids().is_empty());

        let mut multi = PageSelector::new(true, 10);
        multi.select_all(["a", "b", "c"]);
        multi.deselect_all(["b"]);
        assert!(multi.is_selected("a"));
        assert!(!multi.is_selected("b"));
        multi.clear();
        assert!(multi.selected_ids().is_empty());
    }
}
