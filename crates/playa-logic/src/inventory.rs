//! Item-type → quantity multiset owned by one game session.
//!
//! A quantity of zero is the same as absence: entries are dropped when they
//! reach zero, so iteration only ever yields items actually held.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::items::ItemType;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawInventory")]
pub struct Inventory {
    items: BTreeMap<ItemType, u32>,
}

/// Wire shape of [`Inventory`]; zero entries are dropped on the way in.
#[derive(Deserialize)]
struct RawInventory {
    items: BTreeMap<ItemType, u32>,
}

impl From<RawInventory> for Inventory {
    fn from(raw: RawInventory) -> Self {
        raw.items.into_iter().collect()
    }
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `quantity` of `item`. Adding zero is a no-op.
    pub fn add(&mut self, item: ItemType, quantity: u32) {
        if quantity == 0 {
            return;
        }
        let held = self.items.entry(item).or_insert(0);
        *held = held.saturating_add(quantity);
    }

    /// Remove `quantity` of `item` if that many are held.
    ///
    /// Returns `false` and leaves the inventory untouched when fewer are
    /// held, so quantities never go negative.
    pub fn remove(&mut self, item: ItemType, quantity: u32) -> bool {
        let held = self.quantity_of(item);
        if held < quantity {
            return false;
        }
        let remaining = held - quantity;
        if remaining == 0 {
            self.items.remove(&item);
        } else {
            self.items.insert(item, remaining);
        }
        true
    }

    pub fn quantity_of(&self, item: ItemType) -> u32 {
        self.items.get(&item).copied().unwrap_or(0)
    }

    pub fn contains(&self, item: ItemType) -> bool {
        self.items.contains_key(&item)
    }

    /// Held items with their quantities, in item order.
    pub fn iter(&self) -> impl Iterator<Item = (ItemType, u32)> + '_ {
        self.items.iter().map(|(item, qty)| (*item, *qty))
    }

    /// Sum of all quantities.
    pub fn total_count(&self) -> u64 {
        self.items.values().map(|q| *q as u64).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl FromIterator<(ItemType, u32)> for Inventory {
    fn from_iter<I: IntoIterator<Item = (ItemType, u32)>>(iter: I) -> Self {
        let mut inventory = Inventory::new();
        for (item, quantity) in iter {
            inventory.add(item, quantity);
        }
        inventory
    }
}
