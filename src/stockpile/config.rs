use crate::error::{Result, StockpileError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_DATA_FILE: &str = "inventory.json";
const DEFAULT_CURRENCY: &str = "₹";

/// Configuration for stockpile, stored in `<config dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StockpileConfig {
    /// Inventory data file. Relative paths resolve against the config directory.
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,

    /// Currency symbol used when displaying prices and values
    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_data_file() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_FILE)
}

fn default_currency() -> String {
    DEFAULT_CURRENCY.to_string()
}

impl Default for StockpileConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            currency: default_currency(),
        }
    }
}

impl StockpileConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(StockpileError::Io)?;
        let config: StockpileConfig =
            serde_json::from_str(&content).map_err(StockpileError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(StockpileError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(StockpileError::Serialization)?;
        fs::write(config_path, content).map_err(StockpileError::Io)?;
        Ok(())
    }

    /// The data file path, resolved against `config_dir` when relative.
    pub fn data_path<P: AsRef<Path>>(&self, config_dir: P) -> PathBuf {
        if self.data_file.is_absolute() {
            self.data_file.clone()
        } else {
            config_dir.as_ref().join(&self.data_file)
        }
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "data-file" => Some(self.data_file.display().to_string()),
            "currency" => Some(self.currency.clone()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        let value = value.trim();
        match key {
            "data-file" => {
                if value.is_empty() {
                    return Err("data-file cannot be empty".to_string());
                }
                self.data_file = PathBuf::from(value);
                Ok(())
            }
            "currency" => {
                self.currency = value.to_string();
                Ok(())
            }
            _ => Err(format!("Unknown config key: {}", key)),
        }
    }

    pub fn keys() -> &'static [&'static str] {
        &["data-file", "currency"]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = StockpileConfig::default();
        assert_eq!(config.data_file, PathBuf::from("inventory.json"));
        assert_eq!(config.currency, "₹");
    }

    #[test]
    fn test_load_missing_config() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config = StockpileConfig::load(temp_dir.path()).unwrap();
        assert_eq!(config, StockpileConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = tempfile::tempdir().unwrap();

        let mut config = StockpileConfig::default();
        config.set("currency", "$").unwrap();
        config.save(temp_dir.path()).unwrap();

        let loaded = StockpileConfig::load(temp_dir.path()).unwrap();
        assert_eq!(loaded.currency, "$");
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::write(temp_dir.path().join(CONFIG_FILENAME), r#"{"currency": "€"}"#).unwrap();

        let loaded = StockpileConfig::load(temp_dir.path()).unwrap();
        assert_eq!(loaded.currency, "€");
        assert_eq!(loaded.data_file, PathBuf::from("inventory.json"));
    }

    #[test]
    fn test_data_path_resolution() {
        let mut config = StockpileConfig::default();
        assert_eq!(
            config.data_path("/home/op/.stockpile"),
            PathBuf::from("/home/op/.stockpile/inventory.json")
        );

        config.set("data-file", "/srv/shop.json").unwrap();
        assert_eq!(
            config.data_path("/home/op/.stockpile"),
            PathBuf::from("/srv/shop.json")
        );
    }

    #[test]
    fn test_unknown_key() {
        let mut config = StockpileConfig::default();
        assert!(config.get("colour").is_none());
        assert!(config.set("colour", "red").is_err());
        assert!(config.set("data-file", "  ").is_err());
    }
}
