use crate::commands::CmdResult;
use crate::error::{Result, StockpileError};
use crate::model::ItemRecord;
use crate::store::item_store::ItemStore;
use crate::store::DataStore;

/// Look an item up by name (case-insensitive, trimmed).
pub fn find<S: DataStore>(store: &ItemStore<S>, name: &str) -> Option<ItemRecord> {
    store
        .find_by_name(name)
        .map(|(id, item)| ItemRecord::new(id, item.clone()))
}

pub fn run<S: DataStore>(store: &ItemStore<S>, name: &str) -> Result<CmdResult> {
    let record =
        find(store, name).ok_or_else(|| StockpileError::NameNotFound(name.trim().to_string()))?;
    Ok(CmdResult::default().with_listed_items(vec![record]))
}
