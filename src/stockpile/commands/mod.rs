use crate::config::StockpileConfig;
use crate::error::StoreWarning;
use crate::model::ItemRecord;
use std::path::PathBuf;

pub mod add;
pub mod config;
pub mod delete;
pub mod get;
pub mod helpers;
pub mod list;
pub mod spend;
pub mod suggest;
pub mod update;

#[derive(Debug, Clone)]
pub struct StockpilePaths {
    pub config_dir: PathBuf,
}

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// Whether a command changed anything.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Outcome {
    #[default]
    Applied,
    /// Nothing to change; the store was not written.
    Unchanged,
}

/// Totals over the listed items.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StockSummary {
    pub item_count: usize,
    pub total_quantity: u64,
    pub total_value: f64,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub outcome: Outcome,
    pub affected_items: Vec<ItemRecord>,
    pub listed_items: Vec<ItemRecord>,
    pub names: Vec<String>,
    pub summary: Option<StockSummary>,
    pub config: Option<StockpileConfig>,
    pub warnings: Vec<StoreWarning>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn unchanged() -> Self {
        Self {
            outcome: Outcome::Unchanged,
            ..Self::default()
        }
    }

    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn add_warning(&mut self, warning: StoreWarning) {
        self.messages.push(CmdMessage::warning(warning.to_string()));
        self.warnings.push(warning);
    }

    pub fn with_affected_items(mut self, items: Vec<ItemRecord>) -> Self {
        self.affected_items = items;
        self
    }

    pub fn with_listed_items(mut self, items: Vec<ItemRecord>) -> Self {
        self.listed_items = items;
        self
    }

    pub fn with_names(mut self, names: Vec<String>) -> Self {
        self.names = names;
        self
    }

    pub fn with_summary(mut self, summary: StockSummary) -> Self {
        self.summary = Some(summary);
        self
    }

    pub fn with_config(mut self, config: StockpileConfig) -> Self {
        self.config = Some(config);
        self
    }
}
