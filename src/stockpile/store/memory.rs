use super::DataStore;
use crate::error::{Result, StockpileError};
use crate::model::ItemMap;
use std::path::PathBuf;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    items: Option<ItemMap>,
    corrupt: bool,
    fail_saves: bool,
    saves: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an already stored table.
    pub fn with_items(items: ItemMap) -> Self {
        Self {
            items: Some(items),
            ..Self::default()
        }
    }

    /// Make `load_items` fail as if the stored data were unparsable.
    pub fn corrupted() -> Self {
        Self {
            corrupt: true,
            ..Self::default()
        }
    }

    /// Make every subsequent `save_items` fail.
    pub fn fail_saves(&mut self, fail: bool) {
        self.fail_saves = fail;
    }

    /// Number of successful saves so far.
    pub fn save_count(&self) -> usize {
        self.saves
    }

    pub fn stored(&self) -> Option<&ItemMap> {
        self.items.as_ref()
    }
}

impl DataStore for InMemoryStore {
    fn load_items(&self) -> Result<Option<ItemMap>> {
        if self.corrupt {
            return Err(StockpileError::Store("stored data is corrupted".to_string()));
        }
        Ok(self.items.clone())
    }

    fn save_items(&mut self, items: &ItemMap) -> Result<()> {
        if self.fail_saves {
            return Err(StockpileError::Store("storage is read-only".to_string()));
        }
        self.items = Some(items.clone());
        self.saves += 1;
        Ok(())
    }

    fn location(&self) -> PathBuf {
        PathBuf::from("<memory>")
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::Item;
    use crate::store::item_store::ItemStore;
    use uuid::Uuid;

    pub struct StoreFixture {
        items: ItemMap,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                items: ItemMap::new(),
            }
        }

        pub fn with_item(mut self, name: &str, quantity: u64, price: f64) -> Self {
            self.items
                .insert(Uuid::new_v4(), Item::new(name, quantity, price));
            self
        }

        pub fn with_items(mut self, count: usize) -> Self {
            for i in 0..count {
                let name = format!("Test Item {}", i + 1);
                self.items
                    .insert(Uuid::new_v4(), Item::new(name, (i as u64 + 1) * 10, 1.5));
            }
            self
        }

        pub fn build(self) -> ItemStore<InMemoryStore> {
            ItemStore::open(InMemoryStore::with_items(self.items))
        }
    }
}
