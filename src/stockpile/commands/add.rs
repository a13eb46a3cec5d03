use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, StockpileError};
use crate::model::{Item, ItemRecord};
use crate::store::item_store::ItemStore;
use crate::store::DataStore;
use uuid::Uuid;

use super::helpers::{persist_into, positive_price, positive_quantity};

/// Add stock under `name`.
///
/// A new item is created unless an item with the same name (ignoring case and
/// surrounding whitespace) already exists. In that case this is a restock:
/// `quantity` is added to the existing quantity and the unit price is
/// replaced by `price`.
pub fn run<S: DataStore>(
    store: &mut ItemStore<S>,
    name: &str,
    quantity: i64,
    price: f64,
) -> Result<CmdResult> {
    let name = name.trim();
    if name.is_empty() {
        return Err(StockpileError::Validation(
            "Item name cannot be empty".to_string(),
        ));
    }
    let quantity = positive_quantity(quantity, "Quantity")?;
    let price = positive_price(price)?;

    let mut result = CmdResult::default();

    let existing = store.find_by_name(name).map(|(id, _)| id);
    if let Some(id) = existing {
        let item = store
            .get_mut(&id)
            .ok_or(StockpileError::ItemNotFound(id))?;
        let previous = item.quantity();
        let total = previous.checked_add(quantity).ok_or_else(|| {
            StockpileError::Validation(format!(
                "Quantity overflow: {} + {} is too large",
                previous, quantity
            ))
        })?;
        item.set_quantity(total);
        item.set_price(price);
        let updated = ItemRecord::new(id, item.clone());

        result.add_message(CmdMessage::success(format!(
            "Restocked '{}' ({}): quantity {} -> {}, unit price now {:.2}",
            updated.item.name(),
            id,
            previous,
            total,
            price
        )));
        result.affected_items.push(updated);
    } else {
        let id = Uuid::new_v4();
        let item = Item::new(name, quantity, price);
        store.insert(id, item.clone());

        result.add_message(CmdMessage::success(format!(
            "Added '{}' ({})",
            name, id
        )));
        result.affected_items.push(ItemRecord::new(id, item));
    }

    persist_into(store, &mut result);
    Ok(result)
}
