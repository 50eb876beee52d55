//! The data provider: item store, filters, paging and selection wired together.
//!
//! [`DataProvider`] is the one object a list or table view talks to. It owns
//! the items, derives the filtered and visible sequences, keeps the selection
//! consistent with them, and pushes results to every registered [`Display`].
//!
//! # Data flow
//!
//! ```text
//! update(items) → ItemStore → FilterEngine → PageSelector → displays
//!                                  ↑               ↑
//!                        add/remove filter    goto/next/prev page
//! ```
//!
//! # Notification rules
//!
//! | Operation                        | `show_items` | `update_selection` | select handlers |
//! |----------------------------------|:------------:|:------------------:|:---------------:|
//! | `update`, `refresh`, filter ops  | yes          | yes                |                 |
//! | page moves, `set_page_size`      | yes          |                    |                 |
//! | `select`                         |              | yes                | yes             |
//! | bulk select / clear              |              | yes                |                 |
//!
//! Callbacks run synchronously, in registration order, after the state change
//! has completed.
//!
//! # Example
//!
//! ```rust
//! use pagewise::{DataProvider, FilterValue};
//!
//! let mut provider = DataProvider::new(|name: &String| name.clone(), true).with_page_size(2);
//! provider.update(["alpha", "beta", "gamma", "delta", "epsilon"].map(String::from))?;
//!
//! assert_eq!(provider.page_info().pages(), 3);
//!
//! provider.add_filter("name", FilterValue::text(|name: &String| name.clone(), "ta"));
//! assert_eq!(provider.filtered_items(), vec!["beta", "delta"]);
//! # Ok::<(), pagewise::ProviderError>(())
//! ```

use super::display::{Display, SelectHandler};
use crate::domain::error::Result;
use crate::domain::{PageInfo, SelectionInfo};
use crate::filter::{FilterEngine, FilterValue};
use crate::paging::PageSelector;
use crate::store::ItemStore;
use crate::Config;
use std::cmp::Ordering;
use std::fmt;

/// In-memory filter, sort, pagination and selection engine for one view.
pub struct DataProvider<T> {
    store: ItemStore<T>,
    filters: FilterEngine<T>,
    selector: PageSelector,
    /// Store positions passing the filters, in display order.
    filtered: Vec<usize>,
    displays: Vec<Box<dyn Display<T>>>,
    select_handlers: Vec<SelectHandler<T>>,
}

impl<T> DataProvider<T> {
    /// Creates an empty provider.
    ///
    /// # Parameters
    ///
    /// * `identity` - Maps an item to its stable identifier; must be unique per item
    /// * `multiselect` - Whether more than one item may be selected at a time
    pub fn new(identity: impl Fn(&T) -> String + 'static, multiselect: bool) -> Self {
        Self::with_selector(identity, PageSelector::new(multiselect, crate::domain::DEFAULT_PAGE_SIZE))
    }

    /// Creates an empty provider with page size and selection mode taken from `config`.
    pub fn from_config(identity: impl Fn(&T) -> String + 'static, config: &Config) -> Self {
        Self::with_selector(identity, PageSelector::new(config.multiselect, config.page_size))
    }

    fn with_selector(identity: impl Fn(&T) -> String + 'static, selector: PageSelector) -> Self {
        Self {
            store: ItemStore::new(identity),
            filters: FilterEngine::new(),
            selector,
            filtered: Vec::new(),
            displays: Vec::new(),
            select_handlers: Vec::new(),
        }
    }

    /// Sets the initial page size. Zero is clamped to 1.
    #[must_use]
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.selector.set_page_size(page_size);
        self
    }


    /// Registers a display. Displays are notified in registration order.
    pub fn add_display(&mut self, display: impl Display<T> + 'static) {
        self.displays.push(Box::new(display));
    }

    /// Registers a handler fired whenever [`DataProvider::select`] toggles an item.
    pub fn on_select(&mut self, handler: impl FnMut(&T, bool) + 'static) {
        self.select_handlers.push(Box::new(handler));
    }


    /// Replaces all items, clears the selection and recomputes.
    ///
    /// Filters, comparator, page size and page index survive the update; the
    /// page index is clamped to the new page count.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ProviderError::DuplicateKey`] if two items share an
    /// identifier. Items, selection and displays are left untouched.
    pub fn update(&mut self, items: impl IntoIterator<Item = T>) -> Result<()> {
        let _span = tracing::debug_span!("update").entered();

        self.store.replace(items)?;
        self.selector.clear();
        tracing::debug!(items = self.store.len(), "items replaced");

        self.refresh();
        Ok(())
    }

    /// Re-derives the filtered and visible sequences and notifies displays
    /// without touching the items.
    pub fn refresh(&mut self) {
        self.recompute();
        self.show_items();
        self.update_selection();
    }

    fn recompute(&mut self) {
        let _span = tracing::debug_span!(
            "recompute",
            total_items = self.store.len(),
            filters = self.filters.filter_count()
        )
        .entered();

        self.filtered = self.filters.apply(self.store.all());
        self.selector.set_total(self.filtered.len());

        tracing::debug!(
            filtered = self.filtered.len(),
            page = self.selector.page(),
            pages = self.selector.pages(),
            "recomputed"
        );
    }

    /// All items in insertion order, ignoring filters.
    #[must_use]
    pub fn all_items(&self) -> &[T] {
        self.store.all()
    }

    /// Items passing the filters, in display order.
    #[must_use]
    pub fn filtered_items(&self) -> Vec<&T> {
        self.resolve(&self.filtered)
    }

    /// Items on the current page.
    #[must_use]
    pub fn visible_items(&self) -> Vec<&T> {
        self.resolve(self.visible())
    }

    /// Whether `item` is on the current page.
    #[must_use]
    pub fn is_visible(&self, item: &T) -> bool {
        self.store
            .position(&self.store.id_of(item))
            .is_some_and(|pos| self.visible().contains(&pos))
    }

    fn visible(&self) -> &[usize] {
        self.selector.current_page(&self.filtered)
    }

    fn resolve(&self, positions: &[usize]) -> Vec<&T> {
        positions.iter().filter_map(|&pos| self.store.at(pos)).collect()
    }

    fn ids(&self, positions: &[usize]) -> Vec<String> {
        positions
            .iter()
            .filter_map(|&pos| self.store.id_at(pos))
            .map(String::from)
            .collect()
    }


    /// Registers or replaces the filter `name` and recomputes.
    pub fn add_filter(&mut self, name: impl Into<String>, value: FilterValue<T>) {
        let name = name.into();
        tracing::debug!(filter = %name, argument = %value.argument(), "adding filter");
        self.filters.add_filter(name, value);
        self.refresh();
    }

    /// Removes the filter `name`, recomputing if it was registered.
    pub fn remove_filter(&mut self, name: &str) -> Option<FilterValue<T>> {
        let removed = self.filters.remove_filter(name);
        if removed.is_some() {
            tracing::debug!(filter = %name, "filter removed");
            self.refresh();
        }
        removed
    }

    pub fn clear_filters(&mut self) {
        self.filters.clear_filters();
        self.refresh();
    }

    /// Changes the argument of filter `name` and recomputes.
    ///
    /// Returns `false` if no such filter is registered.
    pub fn set_filter_argument(&mut self, name: &str, argument: impl Into<String>) -> bool {
        let Some(filter) = self.filters.filter_mut(name) else {
            tracing::debug!(filter = %name, "no such filter");
            return false;
        };
        filter.set_argument(argument);
        self.refresh();
        true
    }

    #[must_use]
    pub fn filter(&self, name: &str) -> Option<&FilterValue<T>> {
        self.filters.filter(name)
    }

    #[must_use]
    pub fn has_filters(&self) -> bool {
        self.filters.has_filters()
    }

    /// Sorts the filtered items with `comparator` and recomputes.
    pub fn set_comparator(&mut self, comparator: impl Fn(&T, &T) -> Ordering + 'static) {
        self.filters.set_comparator(comparator);
        self.refresh();
    }

    /// Reverts to insertion order and recomputes.
    pub fn clear_comparator(&mut self) {
        self.filters.clear_comparator();
        self.refresh();
    }


    #[must_use]
    pub fn page_info(&self) -> PageInfo {
        PageInfo {
            page: self.selector.page(),
            page_size: self.selector.page_size(),
            visible: self.visible().len(),
            total: self.filtered.len(),
        }
    }

    /// Changes the page size (clamped to at least 1) and re-shows the page.
    pub fn set_page_size(&mut self, page_size: usize) {
        self.selector.set_page_size(page_size);
        self.show_items();
    }

    /// Moves to `page`, clamped to the valid range.
    pub fn goto_page(&mut self, page: usize) {
        self.selector.set_page(page);
        self.show_items();
    }

    pub fn first_page(&mut self) {
        self.selector.first_page();
        self.show_items();
    }

    pub fn previous_page(&mut self) {
        self.selector.previous_page();
        self.show_items();
    }

    pub fn next_page(&mut self) {
        self.selector.next_page();
        self.show_items();
    }

    pub fn last_page(&mut self) {
        self.selector.last_page();
        self.show_items();
    }


    /// Selects or deselects `item`.
    ///
    /// In single-select mode selecting an item deselects every other one. The
    /// select handlers fire for `item` only, followed by a selection snapshot.
    /// Items the provider does not hold are ignored.
    pub fn select(&mut self, item: &T, on: bool) {
        let id = self.store.id_of(item);
        let Some(pos) = self.store.position(&id) else {
            tracing::debug!(id = %id, "ignoring selection of unknown item");
            return;
        };

        let changed = self.selector.select(&id, on);
        tracing::debug!(id = %id, on, changed, "selection changed");

        if let Some(stored) = self.store.at(pos) {
            for handler in &mut self.select_handlers {
                handler(stored, on);
            }
        }
        self.update_selection();
    }

    /// Selects every filtered item. Multi-select only.
    pub fn select_all(&mut self) {
        if !self.selector.is_multiselect() {
            return;
        }
        let ids = self.ids(&self.filtered);
        self.selector.select_all(ids.iter().map(String::as_str));
        tracing::debug!(count = ids.len(), "selected all filtered items");
        self.update_selection();
    }

    /// Selects every item on the current page. Multi-select only.
    pub fn select_visible(&mut self) {
        if !self.selector.is_multiselect() {
            return;
        }
        let ids = self.ids(self.visible());
        self.selector.select_all(ids.iter().map(String::as_str));
        tracing::debug!(count = ids.len(), "selected visible items");
        self.update_selection();
    }

    /// Deselects every filtered item. Filtered-out items keep their recorded state.
    pub fn clear_all_selection(&mut self) {
        let ids = self.ids(&self.filtered);
        self.selector.deselect_all(ids.iter().map(String::as_str));
        tracing::debug!(count = ids.len(), "filtered selection cleared");
        self.update_selection();
    }

    /// Deselects the items on the current page.
    pub fn clear_visible_selection(&mut self) {
        let ids = self.ids(self.visible());
        self.selector.deselect_all(ids.iter().map(String::as_str));
        tracing::debug!(count = ids.len(), "visible selection cleared");
        self.update_selection();
    }

    /// Selected items that pass the filters, in display order.
    ///
    /// Identifiers whose items are filtered out or no longer stored are skipped.
    #[must_use]
    pub fn selection(&self) -> Vec<&T> {
        self.filtered
            .iter()
            .filter(|&&pos| self.is_selected_at(pos))
            .filter_map(|&pos| self.store.at(pos))
            .collect()
    }

    #[must_use]
    pub fn selection_info(&self) -> SelectionInfo {
        SelectionInfo {
            selected: self
                .filtered
                .iter()
                .filter_map(|&pos| self.store.id_at(pos))
                .filter(|id| self.selector.is_selected(id))
                .map(String::from)
                .collect(),
            multiselect: self.selector.is_multiselect(),
            total: self.filtered.len(),
        }
    }

    /// Whether any filtered item is selected.
    #[must_use]
    pub fn has_selection(&self) -> bool {
        self.filtered.iter().any(|&pos| self.is_selected_at(pos))
    }

    /// Whether `item` is recorded as selected, even if it is filtered out.
    #[must_use]
    pub fn is_selected(&self, item: &T) -> bool {
        self.selector.is_selected(&self.store.id_of(item))
    }

    /// First selected item in display order.
    #[must_use]
    pub fn single_selection(&self) -> Option<&T> {
        self.filtered
            .iter()
            .find(|&&pos| self.is_selected_at(pos))
            .and_then(|&pos| self.store.at(pos))
    }

    #[must_use]
    pub fn is_multiselect(&self) -> bool {
        self.selector.is_multiselect()
    }

    fn is_selected_at(&self, pos: usize) -> bool {
        self.store.id_at(pos).is_some_and(|id| self.selector.is_selected(id))
    }


    fn show_items(&mut self) {
        if self.displays.is_empty() {
            return;
        }
        let page_info = self.page_info();
        let items: Vec<&T> = self
            .selector
            .current_page(&self.filtered)
            .iter()
            .filter_map(|&pos| self.store.at(pos))
            .collect();
        for display in &mut self.displays {
            display.show_items(&items, &page_info);
        }
    }

    fn update_selection(&mut self) {
        if self.displays.is_empty() {
            return;
        }
        let selection = self.selection_info();
        for display in &mut self.displays {
            display.update_selection(&selection);
        }
    }
}

impl<T> fmt::Debug for DataProvider<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DataProvider")
            .field("store", &self.store)
            .field("filters", &self.filters)
            .field("selector", &self.selector)
            .field("filtered", &self.filtered.len())
            .field("displays", &self.displays.len())
            .field("select_handlers", &self.select_handlers.len())
            .finish()
    }
}
