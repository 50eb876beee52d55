//! Insertion-ordered item collection keyed by identifier.
//!
//! Items live in a `Vec` in the order they were supplied; a `HashMap` from
//! identifier to position gives O(1) lookups. The rest of the crate refers to
//! items by their position, which stays stable until the next [`ItemStore::replace`].

use crate::domain::error::{ProviderError, Result};
use std::collections::HashMap;
use std::fmt;

/// Maps an item to its stable string identifier.
pub type IdentityFn<T> = Box<dyn Fn(&T) -> String>;

/// Authoritative collection of items.
///
/// # Invariants
///
/// - No two stored items share an identifier.
/// - `ids[i] == id_of(items[i])` and `index[ids[i]] == i` for every stored item.
pub struct ItemStore<T> {
    identity: IdentityFn<T>,
    items: Vec<T>,
    ids: Vec<String>,
    index: HashMap<String, usize>,
}

impl<T> ItemStore<T> {
    /// Creates an empty store using `identity` to key items.
    pub fn new(identity: impl Fn(&T) -> String + 'static) -> Self {
        Self {
            identity: Box::new(identity),
            items: Vec::new(),
            ids: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Replaces the whole collection.
    ///
    /// The new collection is built aside and only swapped in once every
    /// identifier has proven unique.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::DuplicateKey`] if two items map to the same
    /// identifier. The store keeps its previous contents in that case.
    pub fn replace(&mut self, items: impl IntoIterator<Item = T>) -> Result<()> {
        let iter = items.into_iter();
        let (lower, _) = iter.size_hint();
        let mut new_items = Vec::with_capacity(lower);
        let mut new_ids = Vec::with_capacity(lower);
        let mut new_index = HashMap::with_capacity(lower);

        for item in iter {
            let id = (self.identity)(&item);
            if new_index.contains_key(&id) {
                tracing::warn!(id = %id, "duplicate item identifier, rejecting update");
                return Err(ProviderError::DuplicateKey { id });
            }
            new_index.insert(id.clone(), new_items.len());
            new_ids.push(id);
            new_items.push(item);
        }

        self.items = new_items;
        self.ids = new_ids;
        self.index = new_index;
        Ok(())
    }

    /// All items in insertion order.
    #[must_use]
    pub fn all(&self) -> &[T] {
        &self.items
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Identifier of `item` according to the store's identity function.
    #[must_use]
    pub fn id_of(&self, item: &T) -> String {
        (self.identity)(item)
    }

    /// Whether an item with the same identifier is stored.
    #[must_use]
    pub fn contains(&self, item: &T) -> bool {
        self.index.contains_key(&self.id_of(item))
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&T> {
        self.position(id).and_then(|pos| self.items.get(pos))
    }

    /// Position of the item with identifier `id` in insertion order.
    #[must_use]
    pub fn position(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    /// Item at insertion position `pos`.
    #[must_use]
    pub fn at(&self, pos: usize) -> Option<&T> {
        self.items.get(pos)
    }

    /// Identifier of the item at insertion position `pos`.
    #[must_use]
    pub fn id_at(&self, pos: usize) -> Option<&str> {
        self.ids.get(pos).map(String::as_str)
    }
}

impl<T> fmt::Debug for ItemStore<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ItemStore")
            .field("len", &self.items.len())
            .finish_non_exhaustive()
    }
}
