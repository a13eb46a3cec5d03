use std::fmt;
use std::path::PathBuf;
use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum StockpileError {
    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Item not found: {0}")]
    ItemNotFound(Uuid),

    #[error("No item named '{0}'")]
    NameNotFound(String),

    #[error("Not enough '{name}' in stock. Available: {available}, tried to spend: {requested}")]
    InsufficientStock {
        name: String,
        available: u64,
        requested: u64,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, StockpileError>;

/// Non-fatal conditions raised by the store.
///
/// A warning never undoes or blocks an operation: the in-memory state is
/// authoritative and the caller decides how loudly to report it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreWarning {
    /// Writing the data file failed after a mutation was applied in memory.
    Persistence { path: PathBuf, reason: String },
    /// The data file existed but could not be read or parsed; the store started empty.
    LoadCorruption { path: PathBuf, reason: String },
}

impl fmt::Display for StoreWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreWarning::Persistence { path, reason } => write!(
                f,
                "Could not save inventory to '{}': {}. Changes are kept in memory only.",
                path.display(),
                reason
            ),
            StoreWarning::LoadCorruption { path, reason } => write!(
                f,
                "Could not read '{}' ({}). Starting with an empty inventory.",
                path.display(),
                reason
            ),
        }
    }
}
