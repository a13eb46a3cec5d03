use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, StockpileError};
use crate::store::item_store::ItemStore;
use crate::store::DataStore;
use uuid::Uuid;

use super::helpers::{non_negative_quantity, persist_into, positive_price, record};

/// Set an item's quantity and/or unit price.
///
/// Both values are validated before either is written. With neither given the
/// result is [`Outcome::Unchanged`](crate::commands::Outcome::Unchanged) and
/// nothing is saved.
pub fn run<S: DataStore>(
    store: &mut ItemStore<S>,
    id: &Uuid,
    quantity: Option<i64>,
    price: Option<f64>,
) -> Result<CmdResult> {
    if store.get(id).is_none() {
        return Err(StockpileError::ItemNotFound(*id));
    }

    let quantity = quantity
        .map(|q| non_negative_quantity(q, "New quantity"))
        .transpose()?;
    let price = price.map(positive_price).transpose()?;

    if quantity.is_none() && price.is_none() {
        let mut result = CmdResult::unchanged();
        result.add_message(CmdMessage::info("No updates provided for the item."));
        return Ok(result);
    }

    let item = store
        .get_mut(id)
        .ok_or(StockpileError::ItemNotFound(*id))?;
    if let Some(q) = quantity {
        item.set_quantity(q);
    }
    if let Some(p) = price {
        item.set_price(p);
    }

    let updated = record(store, id)?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Updated '{}' ({})",
        updated.item.name(),
        id
    )));
    result.affected_items.push(updated);

    persist_into(store, &mut result);
    Ok(result)
}
