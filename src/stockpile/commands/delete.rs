use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, StockpileError};
use crate::model::ItemRecord;
use crate::store::item_store::ItemStore;
use crate::store::DataStore;
use uuid::Uuid;

use super::helpers::persist_into;

/// Remove an item permanently.
pub fn run<S: DataStore>(store: &mut ItemStore<S>, id: &Uuid) -> Result<CmdResult> {
    let item = store
        .remove(id)
        .ok_or(StockpileError::ItemNotFound(*id))?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Removed '{}' ({}) from inventory",
        item.name(),
        id
    )));
    result.affected_items.push(ItemRecord::new(*id, item));

    persist_into(store, &mut result);
    Ok(result)
}

/// Remove the item whose name matches `name` (case-insensitive, trimmed).
pub fn by_name<S: DataStore>(store: &mut ItemStore<S>, name: &str) -> Result<CmdResult> {
    let id = store
        .find_by_name(name)
        .map(|(id, _)| id)
        .ok_or_else(|| StockpileError::NameNotFound(name.trim().to_string()))?;
    run(store, &id)
}
