//! Display callbacks fed by the provider.
//!
//! A display is anything that renders the provider's output: a table, a list,
//! a pager, a selection counter. It receives two independent notifications.
//!
//! - [`Display::show_items`] after every recompute or page move, with the items
//!   on the current page and a [`PageInfo`] snapshot.
//! - [`Display::update_selection`] after every recompute or selection change,
//!   with a [`SelectionInfo`] snapshot.
//!
//! A selection change alone never re-sends the items, since nothing about the
//! filtered or paged sequence changed.
//!
//! # Example
//!
//! ```rust
//! use pagewise::{Display, PageInfo, SelectionInfo};
//!
//! struct Pager;
//!
//! impl Display<String> for Pager {
//!     fn show_items(&mut self, items: &[&String], page_info: &PageInfo) {
//!         println!("{} of {}: {:?}", page_info.page + 1, page_info.pages(), items);
//!     }
//!
//!     fn update_selection(&mut self, selection: &SelectionInfo) {
//!         println!("{} selected", selection.selection_count());
//!     }
//! }
//! ```

use crate::domain::{PageInfo, SelectionInfo};

/// Receiver of page content and selection snapshots.
pub trait Display<T> {
    /// Called with the items of the current page, in display order.
    fn show_items(&mut self, items: &[&T], page_info: &PageInfo);

    /// Called with the selection as seen through the current filters.
    fn update_selection(&mut self, selection: &SelectionInfo);
}

/// Callback fired for a single item whose selection was toggled.
pub type SelectHandler<T> = Box<dyn FnMut(&T, bool)>;
