//! Evaluation context shared by every clause of a query.

use std::collections::{HashMap, HashSet};

use gear_model_rs::{Inventory, Item, Store};

/// Collection-level facts that individual filters need.
///
/// Location filters index into the store roster and `dupe` needs to know which
/// definition hashes occur more than once. Both are computed by the caller and
/// passed in explicitly rather than read from global state.
#[derive(Debug, Clone, Default)]
pub struct SearchContext<'a> {
    stores: &'a [Store],
    current_store: Option<&'a str>,
    duplicates: HashSet<u32>,
}

impl<'a> SearchContext<'a> {
    /// Creates a context from a store roster and the full item collection.
    ///
    /// # Arguments
    ///
    /// * `stores` - Stores ordered characters first, vault last
    /// * `items` - Every item, used to find duplicates
    pub fn new(stores: &'a [Store], items: &[Item]) -> Self {
        let mut counts: HashMap<u32, usize> = HashMap::new();
        for item in items {
            *counts.entry(item.hash).or_default() += 1;
        }
        let duplicates = counts
            .into_iter()
            .filter(|(_, count)| *count > 1)
            .map(|(hash, _)| hash)
            .collect();

        Self {
            stores,
            current_store: None,
            duplicates,
        }
    }

    /// Creates a context for a whole inventory snapshot.
    pub fn from_inventory(inventory: &'a Inventory) -> Self {
        Self::new(&inventory.stores, &inventory.items)
            .with_current_store(inventory.current_store.as_deref())
    }

    /// Sets the store the player is currently on.
    pub fn with_current_store(mut self, store_id: Option<&'a str>) -> Self {
        self.current_store = store_id;
        self
    }

    /// Returns the store roster.
    pub fn stores(&self) -> &'a [Store] {
        self.stores
    }

    /// Finds a store by id.
    pub fn store(&self, id: &str) -> Option<&'a Store> {
        self.stores.iter().find(|s| s.id == id)
    }

    /// Returns the current store id, if any.
    pub fn current_store(&self) -> Option<&'a str> {
        self.current_store
    }

    /// Returns true if more than one item shares this definition hash.
    pub fn is_duplicate(&self, hash: u32) -> bool {
        self.duplicates.contains(&hash)
    }
}
