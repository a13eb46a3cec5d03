use super::DataStore;
use crate::error::StoreWarning;
use crate::model::{normalize_name, Item, ItemMap};
use tracing::{debug, info, warn};
use uuid::Uuid;

/// Owns the in-memory item table and mirrors it to a [`DataStore`].
///
/// Commands mutate the table through this type and call [`ItemStore::persist`]
/// afterwards. A failed save leaves the in-memory table as it is and comes
/// back as a [`StoreWarning`], so memory and disk may differ until the next
/// successful save.
pub struct ItemStore<S: DataStore> {
    backend: S,
    items: ItemMap,
    load_warning: Option<StoreWarning>,
}

impl<S: DataStore> ItemStore<S> {
    /// Load the table from `backend`. Never fails: unreadable data yields an
    /// empty table plus a [`StoreWarning::LoadCorruption`].
    pub fn open(backend: S) -> Self {
        let location = backend.location();
        let (items, load_warning) = match backend.load_items() {
            Ok(Some(mut items)) => {
                for item in items.values_mut() {
                    item.recompute();
                }
                info!(count = items.len(), path = %location.display(), "loaded inventory");
                (items, None)
            }
            Ok(None) => {
                info!(path = %location.display(), "no inventory file yet, starting empty");
                (ItemMap::new(), None)
            }
            Err(e) => {
                warn!(path = %location.display(), error = %e, "inventory file unreadable, starting empty");
                let warning = StoreWarning::LoadCorruption {
                    path: location,
                    reason: e.to_string(),
                };
                (ItemMap::new(), Some(warning))
            }
        };

        Self {
            backend,
            items,
            load_warning,
        }
    }

    pub fn load_warning(&self) -> Option<&StoreWarning> {
        self.load_warning.as_ref()
    }

    pub fn items(&self) -> &ItemMap {
        &self.items
    }

    /// An owned copy of the table, detached from later mutations.
    pub fn snapshot(&self) -> ItemMap {
        self.items.clone()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: &Uuid) -> Option<&Item> {
        self.items.get(id)
    }

    pub(crate) fn get_mut(&mut self, id: &Uuid) -> Option<&mut Item> {
        self.items.get_mut(id)
    }

    /// Linear scan for a case-insensitive, trimmed name match. The first
    /// match in id order wins.
    pub fn find_by_name(&self, name: &str) -> Option<(Uuid, &Item)> {
        let normalized = normalize_name(name);
        self.items
            .iter()
            .find(|(_, item)| item.matches_name(&normalized))
            .map(|(id, item)| (*id, item))
    }

    pub(crate) fn insert(&mut self, id: Uuid, item: Item) {
        self.items.insert(id, item);
    }

    pub(crate) fn remove(&mut self, id: &Uuid) -> Option<Item> {
        self.items.remove(id)
    }

    /// Write the whole table to the backend.
    pub fn persist(&mut self) -> Option<StoreWarning> {
        let location = self.backend.location();
        match self.backend.save_items(&self.items) {
            Ok(()) => {
                debug!(count = self.items.len(), path = %location.display(), "inventory saved");
                None
            }
            Err(e) => {
                warn!(path = %location.display(), error = %e, "failed to save inventory");
                Some(StoreWarning::Persistence {
                    path: location,
                    reason: e.to_string(),
                })
            }
        }
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut S {
        &mut self.backend
    }
}
