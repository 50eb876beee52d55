//! Named filters and an optional comparator applied to the item collection.

use super::value::FilterValue;
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;

/// Orders two items for display.
pub type Comparator<T> = Box<dyn Fn(&T, &T) -> Ordering>;

/// Computes the filtered, optionally sorted view of a collection.
///
/// Filters are registered under a name and conjoined: an item is kept only if
/// every registered filter matches it. With no filters every item is kept.
/// The result is expressed as positions into the input slice so callers can
/// map back to their own storage without cloning items.
pub struct FilterEngine<T> {
    filters: BTreeMap<String, FilterValue<T>>,
    comparator: Option<Comparator<T>>,
}

impl<T> Default for FilterEngine<T> {
    fn default() -> Self {
        Self {
            filters: BTreeMap::new(),
            comparator: None,
        }
    }
}

impl<T> FilterEngine<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `value` under `name`, returning the filter it replaced.
    pub fn add_filter(&mut self, name: impl Into<String>, value: FilterValue<T>) -> Option<FilterValue<T>> {
        self.filters.insert(name.into(), value)
    }

    pub fn remove_filter(&mut self, name: &str) -> Option<FilterValue<T>> {
        self.filters.remove(name)
    }

    pub fn clear_filters(&mut self) {
        self.filters.clear();
    }

    #[must_use]
    pub fn filter(&self, name: &str) -> Option<&FilterValue<T>> {
        self.filters.get(name)
    }

    pub fn filter_mut(&mut self, name: &str) -> Option<&mut FilterValue<T>> {
        self.filters.get_mut(name)
    }

    #[must_use]
    pub fn has_filters(&self) -> bool {
        !self.filters.is_empty()
    }

    #[must_use]
    pub fn filter_count(&self) -> usize {
        self.filters.len()
    }

    /// Names of the registered filters in lexical order.
    pub fn filter_names(&self) -> impl Iterator<Item = &str> {
        self.filters.keys().map(String::as_str)
    }

    pub fn set_comparator(&mut self, comparator: impl Fn(&T, &T) -> Ordering + 'static) {
        self.comparator = Some(Box::new(comparator));
    }

    pub fn clear_comparator(&mut self) {
        self.comparator = None;
    }

    #[must_use]
    pub fn has_comparator(&self) -> bool {
        self.comparator.is_some()
    }

    /// Whether `item` passes every registered filter.
    #[must_use]
    pub fn accepts(&self, item: &T) -> bool {
        self.filters.values().all(|filter| filter.matches(item))
    }

    /// Positions of the items that pass every filter.
    ///
    /// Without a comparator the positions are ascending, i.e. insertion order.
    /// With a comparator they are sorted stably, so equal items keep their
    /// insertion order.
    #[must_use]
    pub fn apply(&self, items: &[T]) -> Vec<usize> {
        let _span = tracing::debug_span!(
            "apply_filters",
            total_items = items.len(),
            filters = self.filters.len(),
            sorted = self.comparator.is_some()
        )
        .entered();

        let mut positions: Vec<usize> = items
            .iter()
            .enumerate()
            .filter(|(_, item)| self.accepts(item))
            .map(|(pos, _)| pos)
            .collect();

        if let Some(comparator) = &self.comparator {
            positions.sort_by(|&a, &b| comparator(&items[a], &items[b]));
        }

        tracing::debug!(filtered_count = positions.len(), "filters applied");
        positions
    }
}

impl<T> fmt::Debug for FilterEngine<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FilterEngine")
            .field("filters", &self.filters)
            .field("sorted", &self.comparator.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn even() -> FilterValue<u32> {
        FilterValue::new(|n: &u32, _: &str| n % 2 == 0, "")
    }

    fn at_least(min: &str) -> FilterValue<u32> {
        FilterValue::new(|n: &u32, arg: &str| arg.parse::<u32>().map_or(true, |min| *n >= min), min)
    }

    #[test]
    fn test_no_filters_keeps_insertion_order() {
        let engine = FilterEngine::new();
        assert_eq!(engine.apply(&[5, 3, 9]), vec![0, 1, 2]);
        assert!(!engine.has_filters());
    }

    #[test]
    fn test_filters_are_conjoined() {
        let items = [1, 2, 3, 4, 5, 6, 7, 8];
        let mut engine = FilterEngine::new();
        engine.add_filter("even", even());
        engine.add_filter("min", at_least("5"));

        assert_eq!(engine.apply(&items), vec![5, 7]);

        engine.remove_filter("even");
        assert_eq!(engine.apply(&items), vec![4, 5, 6, 7]);

        engine.clear_filters();
        assert_eq!(engine.apply(&items).len(), items.len());
    }

    #[test]
    fn test_same_name_replaces_filter() {
        let mut engine = FilterEngine::new();
        assert!(engine.add_filter("min", at_least("3")).is_none());
        let previous = engine.add_filter("min", at_least("7"));

        assert_eq!(previous.map(|f| f.argument().to_string()), Some("3".to_string()));
        assert_eq!(engine.filter_count(), 1);
        assert_eq!(engine.apply(&[1, 7, 8]), vec![1, 2]);
    }

    #[test]
    fn test_argument_update_through_filter_mut() {
        let mut engine = FilterEngine::new();
        engine.add_filter("min", at_least("10"));
        assert!(engine.apply(&[1, 2, 3]).is_empty());

        if let Some(filter) = engine.filter_mut("min") {
            filter.set_argument("2");
        }
        assert_eq!(engine.apply(&[1, 2, 3]), vec![1, 2]);
    }

    #[test]
    fn test_comparator_sort_is_stable() {
        let items = [(2, "a"), (1, "b"), (2, "c"), (1, "d")];
        let mut engine = FilterEngine::new();
        engine.set_comparator(|a: &(u32, &str), b: &(u32, &str)| a.0.cmp(&b.0));

        assert_eq!(engine.apply(&items), vec![1, 3, 0, 2]);

        engine.clear_comparator();
        assert_eq!(engine.apply(&items), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_filter_names_are_sorted() {
        let mut engine = FilterEngine::new();
        engine.add_filter("zeta", even());
        engine.add_filter("alpha", even());
        assert_eq!(engine.filter_names().collect::<Vec<_>>(), vec!["alpha", "zeta"]);
    }
}
