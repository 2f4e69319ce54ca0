//! The player's inventory.

use serde::{Deserialize, Serialize};

use brasskey_foundation::ObjectId;

/// One carried item: an entity reference plus its display name.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryItem {
    /// Id of the underlying entity.
    pub id: ObjectId,
    /// Display name at pickup time.
    pub name: String,
}

/// Ordered item list; insertion order is pickup order.
///
/// Adding an id twice is refused so a repeated Take can never duplicate
/// an entry.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inventory {
    items: Vec<InventoryItem>,
}

impl Inventory {
    /// Creates an empty inventory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an item; returns `false` if the id is already carried.
    pub fn add(&mut self, id: ObjectId, name: impl Into<String>) -> bool {
        if self.contains(&id) {
            return false;
        }
        self.items.push(InventoryItem {
            id,
            name: name.into(),
        });
        true
    }

    /// Removes an item by id; returns `false` if it was not carried.
    pub fn remove(&mut self, id: &ObjectId) -> bool {
        let before = self.items.len();
        self.items.retain(|item| &item.id != id);
        self.items.len() != before
    }

    /// Returns true if the id is carried.
    #[must_use]
    pub fn contains(&self, id: &ObjectId) -> bool {
        self.items.iter().any(|item| &item.id == id)
    }

    /// All items in pickup order.
    #[must_use]
    pub fn items(&self) -> &[InventoryItem] {
        &self.items
    }

    /// Number of carried items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if nothing is carried.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
