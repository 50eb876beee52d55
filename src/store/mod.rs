//! Storage layer holding the authoritative item collection.
//!
//! # Modules
//!
//! - `item_store`: Insertion-ordered collection with unique identifiers

pub mod item_store;

pub use item_store::{IdentityFn, ItemStore};
