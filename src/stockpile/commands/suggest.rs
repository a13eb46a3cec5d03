use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::normalize_name;
use crate::store::item_store::ItemStore;
use crate::store::DataStore;

/// Item names starting with `prefix` (ignoring case), sorted. An empty prefix
/// returns every name.
pub fn run<S: DataStore>(store: &ItemStore<S>, prefix: &str) -> Result<CmdResult> {
    let prefix = normalize_name(prefix);
    let mut names: Vec<String> = store
        .items()
        .values()
        .map(|item| item.name().to_string())
        .filter(|name| name.to_lowercase().starts_with(&prefix))
        .collect();
    names.sort();
    Ok(CmdResult::default().with_names(names))
}
