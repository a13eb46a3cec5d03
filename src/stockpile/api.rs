//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for inventory operations, whatever the UI.
//!
//! It dispatches to `commands/*.rs`, normalizes loose references (a UUID or an
//! item name) into ids, and returns structured results. It does no business
//! logic and no terminal I/O.
//!
//! `StockpileApi<S: DataStore>` is generic over the storage backend:
//! `StockpileApi<FileStore>` in production, `StockpileApi<InMemoryStore>` in
//! tests.

use crate::commands;
use crate::error::{Result, StoreWarning};
use crate::model::{ItemMap, ItemRecord};
use crate::store::item_store::ItemStore;
use crate::store::DataStore;
use uuid::Uuid;

/// The main API facade for inventory operations.
pub struct StockpileApi<S: DataStore> {
    store: ItemStore<S>,
    paths: commands::StockpilePaths,
}

impl<S: DataStore> StockpileApi<S> {
    /// Open the store behind `backend`. Loading never fails; see
    /// [`StockpileApi::load_warning`].
    pub fn new(backend: S, paths: commands::StockpilePaths) -> Self {
        Self {
            store: ItemStore::open(backend),
            paths,
        }
    }

    /// Set when the data file was present but unreadable at startup.
    pub fn load_warning(&self) -> Option<&StoreWarning> {
        self.store.load_warning()
    }

    pub fn add_item(&mut self, name: &str, quantity: i64, price: f64) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.store, name, quantity, price)
    }

    pub fn update_item(
        &mut self,
        id: &Uuid,
        quantity: Option<i64>,
        price: Option<f64>,
    ) -> Result<commands::CmdResult> {
        commands::update::run(&mut self.store, id, quantity, price)
    }

    pub fn record_spend(&mut self, id: &Uuid, amount: i64) -> Result<commands::CmdResult> {
        commands::spend::run(&mut self.store, id, amount)
    }

    pub fn delete_item(&mut self, id: &Uuid) -> Result<commands::CmdResult> {
        commands::delete::run(&mut self.store, id)
    }

    pub fn delete_item_by_name(&mut self, name: &str) -> Result<commands::CmdResult> {
        commands::delete::by_name(&mut self.store, name)
    }

    pub fn lookup_by_name(&self, name: &str) -> Option<ItemRecord> {
        commands::get::find(&self.store, name)
    }

    /// Like [`StockpileApi::lookup_by_name`], but a miss is an error.
    pub fn get_item(&self, name: &str) -> Result<commands::CmdResult> {
        commands::get::run(&self.store, name)
    }

    /// Owned copy of the whole id → item table.
    pub fn list_all(&self) -> ItemMap {
        self.store.snapshot()
    }

    pub fn list_items(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.store)
    }

    pub fn suggest_names(&self, prefix: &str) -> Result<commands::CmdResult> {
        commands::suggest::run(&self.store, prefix)
    }

    /// Resolve a UUID or an item name to an id.
    pub fn resolve(&self, reference: &str) -> Result<Uuid> {
        commands::helpers::resolve_item(&self.store, reference)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.paths, action)
    }

    pub fn paths(&self) -> &commands::StockpilePaths {
        &self.paths
    }

    pub fn store(&self) -> &ItemStore<S> {
        &self.store
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, MessageLevel, Outcome, StockSummary, StockpilePaths};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StockpileError;
    use crate::store::memory::InMemoryStore;
    use std::path::PathBuf;

    fn api() -> StockpileApi<InMemoryStore> {
        StockpileApi::new(
            InMemoryStore::new(),
            StockpilePaths {
                config_dir: PathBuf::from("/nonexistent"),
            },
        )
    }

    #[test]
    fn add_then_lookup() {
        let mut api = api();
        api.add_item("Pen", 5, 2.0).unwrap();

        let record = api.lookup_by_name("pen").unwrap();
        assert_eq!(record.item.quantity(), 5);
        assert_eq!(record.item.price(), 2.0);
        assert_eq!(record.item.stock_value(), 10.0);
    }

    #[test]
    fn dispatches_by_resolved_reference() {
        let mut api = api();
        let id = api.add_item("Pen", 5, 2.0).unwrap().affected_items[0].id;

        let resolved = api.resolve("PEN").unwrap();
        assert_eq!(resolved, id);

        api.update_item(&resolved, Some(7), None).unwrap();
        api.record_spend(&resolved, 2).unwrap();
        assert_eq!(api.lookup_by_name("pen").unwrap().item.quantity(), 5);

        api.delete_item_by_name("pen").unwrap();
        assert!(api.lookup_by_name("pen").is_none());
        assert!(matches!(
            api.delete_item(&id),
            Err(StockpileError::ItemNotFound(_))
        ));
    }

    #[test]
    fn list_all_is_a_snapshot() {
        let mut api = api();
        let id = api.add_item("Pen", 5, 2.0).unwrap().affected_items[0].id;

        let snapshot = api.list_all();
        api.record_spend(&id, 5).unwrap();

        assert_eq!(snapshot[&id].quantity(), 5);
        assert_eq!(api.list_all()[&id].quantity(), 0);
    }

    #[test]
    fn corrupted_backend_surfaces_load_warning() {
        let api = StockpileApi::new(
            InMemoryStore::corrupted(),
            StockpilePaths {
                config_dir: PathBuf::from("/nonexistent"),
            },
        );
        assert!(matches!(
            api.load_warning(),
            Some(StoreWarning::LoadCorruption { .. })
        ));
        assert!(api.list_all().is_empty());
    }
}
