use super::DataStore;
use crate::error::{Result, StockpileError};
use crate::model::{InventoryDocument, Item, ItemMap};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;
use uuid::Uuid;

/// The data file as read: entries stay raw until each one is checked.
#[derive(Deserialize)]
struct StoredDocument {
    #[serde(default)]
    items: BTreeMap<String, serde_json::Value>,
}

/// Stores the item table as one JSON document.
pub struct FileStore {
    data_file: PathBuf,
}

impl FileStore {
    pub fn new(data_file: impl Into<PathBuf>) -> Self {
        Self {
            data_file: data_file.into(),
        }
    }

    pub fn data_file(&self) -> &Path {
        &self.data_file
    }

    fn ensure_parent(&self) -> Result<()> {
        if let Some(parent) = self.data_file.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(StockpileError::Io)?;
            }
        }
        Ok(())
    }

    fn tmp_file(&self) -> PathBuf {
        let name = format!(".inventory-{}.tmp", Uuid::new_v4());
        match self.data_file.parent() {
            Some(parent) => parent.join(name),
            None => PathBuf::from(name),
        }
    }

    /// Convert stored entries one by one. An entry with a malformed id or
    /// record is dropped and logged; the rest still load.
    fn decode_items(&self, raw: BTreeMap<String, serde_json::Value>) -> ItemMap {
        let mut items = ItemMap::new();
        for (key, value) in raw {
            let id = match Uuid::parse_str(&key) {
                Ok(id) => id,
                Err(e) => {
                    warn!(path = %self.data_file.display(), key = %key, error = %e, "skipping inventory entry with invalid id");
                    continue;
                }
            };
            match serde_json::from_value::<Item>(value) {
                Ok(item) => {
                    items.insert(id, item);
                }
                Err(e) => {
                    warn!(path = %self.data_file.display(), key = %key, error = %e, "skipping malformed inventory entry");
                }
            }
        }
        items
    }
}

impl DataStore for FileStore {
    fn load_items(&self) -> Result<Option<ItemMap>> {
        if !self.data_file.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&self.data_file).map_err(StockpileError::Io)?;
        let doc: StoredDocument =
            serde_json::from_str(&content).map_err(StockpileError::Serialization)?;
        Ok(Some(self.decode_items(doc.items)))
    }

    fn save_items(&mut self, items: &ItemMap) -> Result<()> {
        self.ensure_parent()?;

        let doc = InventoryDocument {
            items: items.clone(),
        };
        let content = serde_json::to_string_pretty(&doc).map_err(StockpileError::Serialization)?;

        replace_file(&self.tmp_file(), &self.data_file, &content)
    }

    fn location(&self) -> PathBuf {
        self.data_file.clone()
    }
}

/// Write `content` to `tmp_file` beside `target`, then rename it over
/// `target`. The temp file never outlives a failure.
fn replace_file(tmp_file: &Path, target: &Path, content: &str) -> Result<()> {
    let outcome = fs::write(tmp_file, content).and_then(|()| fs::rename(tmp_file, target));
    if let Err(e) = outcome {
        let _ = fs::remove_file(tmp_file);
        return Err(StockpileError::Io(e));
    }
    Ok(())
}
