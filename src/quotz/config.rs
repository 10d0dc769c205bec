use crate::error::{QuotzError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;
use tracing::warn;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_FEED_URL: &str = "https://jsonplaceholder.typicode.com/posts";
const DEFAULT_SYNC_INTERVAL_SECS: u64 = 60;
const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 15;

/// Configuration for quotz, stored in the data directory as config.json
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct QuotzConfig {
    /// Remote feed polled by sync
    #[serde(default = "default_feed_url")]
    pub feed_url: String,

    /// Seconds between sync cycles in watch mode
    #[serde(default = "default_sync_interval")]
    pub sync_interval_secs: u64,

    /// Request timeout for a single feed fetch, in seconds
    #[serde(default = "default_fetch_timeout")]
    pub fetch_timeout_secs: u64,
}

fn default_feed_url() -> String {
    DEFAULT_FEED_URL.to_string()
}

fn default_sync_interval() -> u64 {
    DEFAULT_SYNC_INTERVAL_SECS
}

fn default_fetch_timeout() -> u64 {
    DEFAULT_FETCH_TIMEOUT_SECS
}

impl Default for QuotzConfig {
    fn default() -> Self {
        Self {
            feed_url: default_feed_url(),
            sync_interval_secs: DEFAULT_SYNC_INTERVAL_SECS,
            fetch_timeout_secs: DEFAULT_FETCH_TIMEOUT_SECS,
        }
    }
}

impl QuotzConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(QuotzError::Io)?;
        let mut config: QuotzConfig =
            serde_json::from_str(&content).map_err(QuotzError::Serialization)?;

        // Hand-edited files can carry values `config set` would refuse.
        if config.sync_interval_secs == 0 {
            warn!("sync_interval_secs 0 is invalid, using {DEFAULT_SYNC_INTERVAL_SECS}");
            config.sync_interval_secs = DEFAULT_SYNC_INTERVAL_SECS;
        }
        if config.fetch_timeout_secs == 0 {
            warn!("fetch_timeout_secs 0 is invalid, using {DEFAULT_FETCH_TIMEOUT_SECS}");
            config.fetch_timeout_secs = DEFAULT_FETCH_TIMEOUT_SECS;
        }
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(QuotzError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(QuotzError::Serialization)?;
        fs::write(config_path, content).map_err(QuotzError::Io)?;
        Ok(())
    }

    pub fn sync_interval(&self) -> Duration {
        Duration::from_secs(self.sync_interval_secs)
    }

    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_secs)
    }

    /// Read a config value by its CLI key name.
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "feed-url" => Some(self.feed_url.clone()),
            "sync-interval" => Some(self.sync_interval_secs.to_string()),
            "fetch-timeout" => Some(self.fetch_timeout_secs.to_string()),
            _ => None,
        }
    }

    /// Set a config value by its CLI key name. The message in `Err` is meant
    /// for the user as-is.
    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        match key {
            "feed-url" => {
                if !(value.starts_with("http://") || value.starts_with("https://")) {
                    return Err(format!("feed-url must be an http(s) URL, got {}", value));
                }
                self.feed_url = value.to_string();
                Ok(())
            }
            "sync-interval" => {
                let secs: u64 = value
                    .parse()
                    .map_err(|_| format!("sync-interval must be a number of seconds, got {}", value))?;
                if secs == 0 {
                    return Err("sync-interval must be at least 1 second".to_string());
                }
                self.sync_interval_secs = secs;
                Ok(())
            }
            "fetch-timeout" => {
                let secs: u64 = value
                    .parse()
                    .map_err(|_| format!("fetch-timeout must be a number of seconds, got {}", value))?;
                if secs == 0 {
                    return Err("fetch-timeout must be at least 1 second".to_string());
                }
                self.fetch_timeout_secs = secs;
                Ok(())
            }
            _ => Err(format!("Unknown config key: {}", key)),
        }
    }
}
