use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, StockpileError};
use crate::store::item_store::ItemStore;
use crate::store::DataStore;
use uuid::Uuid;

use super::helpers::{persist_into, positive_quantity, record};

/// Take `amount` units out of stock. All or nothing.
pub fn run<S: DataStore>(store: &mut ItemStore<S>, id: &Uuid, amount: i64) -> Result<CmdResult> {
    let item = store
        .get_mut(id)
        .ok_or(StockpileError::ItemNotFound(*id))?;
    let amount = positive_quantity(amount, "Amount spent")?;

    let available = item.quantity();
    if amount > available {
        return Err(StockpileError::InsufficientStock {
            name: item.name().to_string(),
            available,
            requested: amount,
        });
    }
    item.set_quantity(available - amount);

    let updated = record(store, id)?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Recorded {} units of '{}' ({}) as spent. Remaining stock value: {:.2}",
        amount,
        updated.item.name(),
        id,
        updated.item.stock_value()
    )));
    result.affected_items.push(updated);

    persist_into(store, &mut result);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::add;
    use crate::store::memory::InMemoryStore;

    fn store_with_pen() -> (ItemStore<InMemoryStore>, Uuid) {
        let mut store = ItemStore::open(InMemoryStore::new());
        let id = add::run(&mut store, "Pen", 5, 2.0).unwrap().affected_items[0].id;
        (store, id)
    }

    #[test]
    fn decrements_quantity_and_value() {
        let (mut store, id) = store_with_pen();
        let result = run(&mut store, &id, 2).unwrap();

        assert_eq!(result.affected_items[0].item.stock_value(), 6.0);
        let item = store.get(&id).unwrap();
        assert_eq!(item.quantity(), 3);
        assert_eq!(item.stock_value(), 6.0);
    }

    #[test]
    fn can_spend_everything() {
        let (mut store, id) = store_with_pen();
        run(&mut store, &id, 5).unwrap();
        assert_eq!(store.get(&id).unwrap().quantity(), 0);
    }

    #[test]
    fn overspend_fails_and_changes_nothing() {
        let (mut store, id) = store_with_pen();
        let saves = store.backend().save_count();

        match run(&mut store, &id, 6) {
            Err(StockpileError::InsufficientStock {
                available,
                requested,
                ..
            }) => {
                assert_eq!(available, 5);
                assert_eq!(requested, 6);
            }
            other => panic!("expected insufficient stock, got {:?}", other),
        }

        let item = store.get(&id).unwrap();
        assert_eq!(item.quantity(), 5);
        assert_eq!(item.stock_value(), 10.0);
        assert_eq!(store.backend().save_count(), saves);
    }

    #[test]
    fn amount_must_be_positive() {
        let (mut store, id) = store_with_pen();
        assert!(matches!(
            run(&mut store, &id, 0),
            Err(StockpileError::Validation(_))
        ));
        assert!(matches!(
            run(&mut store, &id, -3),
            Err(StockpileError::Validation(_))
        ));
    }

    #[test]
    fn unknown_id_is_not_found() {
        let (mut store, _) = store_with_pen();
        assert!(matches!(
            run(&mut store, &Uuid::new_v4(), 1),
            Err(StockpileError::ItemNotFound(_))
        ));
    }
}
