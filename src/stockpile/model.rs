use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

/// The id → item table, ordered by id so the data file diffs cleanly.
pub type ItemMap = BTreeMap<Uuid, Item>;

/// A stock-keeping unit.
///
/// `stock_value` is derived from `quantity * price` and is recomputed by every
/// setter, so it is never written independently. Missing `quantity`/`price`
/// in stored data default to zero, and unknown (legacy) keys are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    name: String,
    #[serde(default)]
    quantity: u64,
    #[serde(default)]
    price: f64,
    #[serde(default)]
    stock_value: f64,
}

impl Item {
    pub fn new(name: impl Into<String>, quantity: u64, price: f64) -> Self {
        let mut item = Self {
            name: name.into(),
            quantity,
            price,
            stock_value: 0.0,
        };
        item.recompute();
        item
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn quantity(&self) -> u64 {
        self.quantity
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn stock_value(&self) -> f64 {
        self.stock_value
    }

    pub fn set_quantity(&mut self, quantity: u64) {
        self.quantity = quantity;
        self.recompute();
    }

    pub fn set_price(&mut self, price: f64) {
        self.price = price;
        self.recompute();
    }

    /// Whether this item's name matches an already normalized name.
    pub fn matches_name(&self, normalized: &str) -> bool {
        normalize_name(&self.name) == normalized
    }

    pub(crate) fn recompute(&mut self) {
        self.stock_value = self.quantity as f64 * self.price;
    }
}

/// An item together with its identifier, as handed out to callers.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemRecord {
    pub id: Uuid,
    pub item: Item,
}

impl ItemRecord {
    pub fn new(id: Uuid, item: Item) -> Self {
        Self { id, item }
    }
}

/// On-disk layout of the data file: `{ "items": { "<uuid>": { ... } } }`.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct InventoryDocument {
    #[serde(default)]
    pub items: ItemMap,
}

/// Name comparison key: surrounding whitespace stripped, lowercased.
pub fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}
