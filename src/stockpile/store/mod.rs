//! # Storage Layer
//!
//! The [`DataStore`] trait moves the whole item table to and from a backing
//! medium. It knows nothing about validation or merging; that lives in
//! [`item_store::ItemStore`], which owns the in-memory table and calls
//! `save_items` after every mutation.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production storage, a single JSON document on disk.
//! - [`memory::InMemoryStore`]: no persistence, used by the command tests.
//!
//! ## Storage Format
//!
//! ```text
//! inventory.json
//! {
//!   "items": {
//!     "<uuid>": { "name": "Pen", "quantity": 8, "price": 2.5, "stock_value": 20.0 }
//!   }
//! }
//! ```
//!
//! The document is always rewritten whole. There is no write-ahead log and no
//! locking: a second process writing the same file wins.

use crate::error::Result;
use crate::model::ItemMap;
use std::path::PathBuf;

pub mod fs;
pub mod item_store;
pub mod memory;

/// Abstract interface for item table storage.
pub trait DataStore {
    /// Load the stored table.
    ///
    /// Returns `Ok(None)` when nothing has been stored yet, and `Err` when
    /// stored data exists but cannot be read or parsed.
    fn load_items(&self) -> Result<Option<ItemMap>>;

    /// Replace the stored table with `items`.
    fn save_items(&mut self, items: &ItemMap) -> Result<()>;

    /// Where the data lives, for messages and warnings.
    fn location(&self) -> PathBuf;
}
