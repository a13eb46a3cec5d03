use crate::commands::CmdResult;
use crate::error::{Result, StockpileError};
use crate::model::ItemRecord;
use crate::store::item_store::ItemStore;
use crate::store::DataStore;
use uuid::Uuid;

/// Save the store and attach any persistence warning to `result`.
pub fn persist_into<S: DataStore>(store: &mut ItemStore<S>, result: &mut CmdResult) {
    if let Some(warning) = store.persist() {
        result.add_warning(warning);
    }
}

pub fn record<S: DataStore>(store: &ItemStore<S>, id: &Uuid) -> Result<ItemRecord> {
    store
        .get(id)
        .map(|item| ItemRecord::new(*id, item.clone()))
        .ok_or(StockpileError::ItemNotFound(*id))
}

/// Resolve a user-supplied reference: a full UUID, or else an item name.
pub fn resolve_item<S: DataStore>(store: &ItemStore<S>, reference: &str) -> Result<Uuid> {
    let reference = reference.trim();
    if let Ok(id) = Uuid::parse_str(reference) {
        if store.get(&id).is_some() {
            return Ok(id);
        }
    }
    store
        .find_by_name(reference)
        .map(|(id, _)| id)
        .ok_or_else(|| match Uuid::parse_str(reference) {
            Ok(id) => StockpileError::ItemNotFound(id),
            Err(_) => StockpileError::NameNotFound(reference.to_string()),
        })
}

pub fn positive_quantity(value: i64, what: &str) -> Result<u64> {
    if value <= 0 {
        return Err(StockpileError::Validation(format!(
            "{} must be a positive whole number, got {}",
            what, value
        )));
    }
    Ok(value as u64)
}

pub fn non_negative_quantity(value: i64, what: &str) -> Result<u64> {
    u64::try_from(value).map_err(|_| {
        StockpileError::Validation(format!("{} cannot be negative, got {}", what, value))
    })
}

pub fn positive_price(value: f64) -> Result<f64> {
    if !value.is_finite() || value <= 0.0 {
        return Err(StockpileError::Validation(format!(
            "Unit price must be a positive number, got {}",
            value
        )));
    }
    Ok(value)
}
