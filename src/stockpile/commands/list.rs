use crate::commands::{CmdResult, StockSummary};
use crate::error::Result;
use crate::model::ItemRecord;
use crate::store::item_store::ItemStore;
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &ItemStore<S>) -> Result<CmdResult> {
    let mut listed: Vec<ItemRecord> = store
        .items()
        .iter()
        .map(|(id, item)| ItemRecord::new(*id, item.clone()))
        .collect();
    listed.sort_by(|a, b| {
        a.item
            .name()
            .to_lowercase()
            .cmp(&b.item.name().to_lowercase())
            .then_with(|| a.id.cmp(&b.id))
    });

    let summary = summarize(&listed);
    Ok(CmdResult::default()
        .with_listed_items(listed)
        .with_summary(summary))
}

pub fn summarize(records: &[ItemRecord]) -> StockSummary {
    records.iter().fold(
        StockSummary {
            item_count: records.len(),
            ..StockSummary::default()
        },
        |mut acc, record| {
            acc.total_quantity = acc.total_quantity.saturating_add(record.item.quantity());
            acc.total_value += record.item.stock_value();
            acc
        },
    )
}
