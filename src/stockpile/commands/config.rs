use crate::commands::{CmdMessage, CmdResult, StockpilePaths};
use crate::config::StockpileConfig;
use crate::error::Result;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

/// Every action reads the current config first; only a successful `Set`
/// writes it back. The returned result always carries the config as it
/// stands afterwards.
pub fn run(paths: &StockpilePaths, action: ConfigAction) -> Result<CmdResult> {
    let mut config = StockpileConfig::load(&paths.config_dir)?;

    let result = match action {
        ConfigAction::ShowAll => CmdResult::default(),
        ConfigAction::ShowKey(key) => {
            let mut result = CmdResult::default();
            result.add_message(match config.get(&key) {
                Some(val) => CmdMessage::info(val),
                None => CmdMessage::error(format!("Unknown config key: {}", key)),
            });
            result
        }
        ConfigAction::Set(key, value) => match config.set(&key, &value) {
            Ok(()) => {
                config.save(&paths.config_dir)?;
                let shown = config.get(&key).unwrap_or(value);
                let mut result = CmdResult::default();
                result.add_message(CmdMessage::success(format!("{} set to {}", key, shown)));
                result
            }
            Err(reason) => {
                let mut result = CmdResult::unchanged();
                result.add_message(CmdMessage::error(reason));
                result
            }
        },
    };

    Ok(result.with_config(config))
}
