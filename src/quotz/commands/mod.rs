use crate::config::QuotzConfig;
use crate::model::Quote;
use chrono::{DateTime, Utc};
use std::path::PathBuf;

pub mod add;
pub mod categories;
pub mod config;
pub mod export;
pub mod filter;
pub mod import;
pub mod init;
pub mod list;
pub mod show;
pub mod status;
pub mod sync;

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

/// Snapshot of the store for the `status` command; formatting happens in the
/// binary.
#[derive(Debug, Clone)]
pub struct StatusSnapshot {
    pub data_dir: PathBuf,
    pub quote_count: usize,
    pub category_count: usize,
    pub filter: String,
    pub feed_url: String,
    pub last_synced_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_quotes: Vec<Quote>,
    pub listed_quotes: Vec<Quote>,
    pub categories: Vec<String>,
    pub config: Option<QuotzConfig>,
    pub status: Option<StatusSnapshot>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_quotes(mut self, quotes: Vec<Quote>) -> Self {
        self.affected_quotes = quotes;
        self
    }

    pub fn with_listed_quotes(mut self, quotes: Vec<Quote>) -> Self {
        self.listed_quotes = quotes;
        self
    }

    pub fn with_categories(mut self, categories: Vec<String>) -> Self {
        self.categories = categories;
        self
    }

    pub fn with_config(mut self, config: QuotzConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn with_status(mut self, status: StatusSnapshot) -> Self {
        self.status = Some(status);
        self
    }
}
