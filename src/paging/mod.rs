//! Pagination and selection.
//!
//! # Modules
//!
//! - `selector`: Page window math and the selected identifier set

pub mod selector;

pub use selector::PageSelector;
