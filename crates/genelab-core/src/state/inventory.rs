//! The inventory — a set with insertion order preserved for display.

use serde::{Deserialize, Serialize};

use crate::content::Item;

/// Held items. Duplicates are forbidden; first-acquired order is kept so
/// the inventory bar renders stably.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Inventory {
    items: Vec<Item>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, item: Item) -> bool {
        self.items.contains(&item)
    }

    /// Insert if absent. Returns true if the item was newly added.
    pub fn insert(&mut self, item: Item) -> bool {
        if self.contains(item) {
            false
        } else {
            self.items.push(item);
            true
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }
}
