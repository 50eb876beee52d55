//! Filtering and sorting of the item collection.
//!
//! # Modules
//!
//! - `value`: Predicate-plus-argument pairs, including text and fuzzy matchers
//! - `engine`: Named filter registry with conjunctive evaluation and stable sorting

pub mod engine;
pub mod value;

pub use engine::{Comparator, FilterEngine};
pub use value::{FilterValue, Predicate};
