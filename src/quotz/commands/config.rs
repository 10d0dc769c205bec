use crate::commands::{CmdMessage, CmdResult};
use crate::config::QuotzConfig;
use crate::error::Result;
use std::path::Path;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub fn run(config_dir: &Path, action: ConfigAction) -> Result<CmdResult> {
    match action {
        ConfigAction::ShowAll => {
            let config = QuotzConfig::load(config_dir)?;
            Ok(CmdResult::default().with_config(config))
        }
        ConfigAction::ShowKey(key) => {
            let config = QuotzConfig::load(config_dir)?;
            let mut result = CmdResult::default();
            match config.get(&key) {
                Some(val) => {
                    result.add_message(CmdMessage::info(val));
                    Ok(result)
                }
                None => {
                    result.add_message(CmdMessage::error(format!("Unknown config key: {}", key)));
                    Ok(result)
                }
            }
        }
        ConfigAction::Set(key, value) => {
            let mut config = QuotzConfig::load(config_dir)?;
            if let Err(e) = config.set(&key, &value) {
                let mut res = CmdResult::default();
                res.add_message(CmdMessage::error(e));
                return Ok(res);
            }
            config.save(config_dir)?;
            let display_val = config.get(&key).unwrap_or_else(|| value.clone());
            let mut result = CmdResult::default().with_config(config);
            result.add_message(CmdMessage::success(format!(
                "{} set to {}",
                key, display_val
            )));
            Ok(result)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn show_all_returns_the_config() {
        let dir = tempfile::tempdir().unwrap();
        let result = run(dir.path(), ConfigAction::ShowAll).unwrap();
        assert_eq!(result.config, Some(QuotzConfig::default()));
    }

    #[test]
    fn set_then_show_key_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        run(
            dir.path(),
            ConfigAction::Set("sync-interval".to_string(), "300".to_string()),
        )
        .unwrap();

        let result = run(
            dir.path(),
            ConfigAction::ShowKey("sync-interval".to_string()),
        )
        .unwrap();
        assert_eq!(result.messages[0].content, "300");
    }

    #[test]
    fn unknown_key_reports_an_error_message() {
        let dir = tempfile::tempdir().unwrap();
        let result = run(dir.path(), ConfigAction::ShowKey("bogus".to_string())).unwrap();
        assert!(result.messages[0].content.contains("Unknown config key"));
    }

    #[test]
    fn bad_value_is_rejected_without_saving() {
        let dir = tempfile::tempdir().unwrap();
        let result = run(
            dir.path(),
            ConfigAction::Set("sync-interval".to_string(), "0".to_string()),
        )
        .unwrap();
        assert!(result.config.is_none());

        let loaded = QuotzConfig::load(dir.path()).unwrap();
        assert_eq!(loaded, QuotzConfig::default());
    }
}
