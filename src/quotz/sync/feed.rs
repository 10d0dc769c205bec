use crate::error::{QuotzError, Result};
use crate::model::{Quote, SERVER_CATEGORY};
use serde::Deserialize;
use std::fs;
use std::io::Read;
use std::time::Duration;

/// Env var pointing at a local JSON file served as the feed instead of the
/// network. Lets tests run a full sync cycle hermetically.
pub const FEED_FILE_ENV: &str = "QUOTZ_FEED_JSON";

/// One item of the remote feed. Only the title matters; every other field is
/// ignored.
#[derive(Debug, Deserialize)]
struct FeedItem {
    title: String,
}

pub struct FeedClient {
    url: String,
    timeout: Duration,
}

impl FeedClient {
    pub fn new(url: String, timeout: Duration) -> Self {
        Self { url, timeout }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Fetch the feed and map it into quote records tagged with the server
    /// category.
    pub fn fetch_quotes(&self) -> Result<Vec<Quote>> {
        let body = self.fetch_body()?;
        map_feed(&body)
    }

    fn fetch_body(&self) -> Result<String> {
        if let Ok(path) = std::env::var(FEED_FILE_ENV) {
            return fs::read_to_string(&path)
                .map_err(|e| QuotzError::Fetch(format!("failed to read feed file {path}: {e}")));
        }

        let agent = ureq::AgentBuilder::new().timeout(self.timeout).build();
        let resp = agent
            .get(&self.url)
            .set("User-Agent", "quotz-sync")
            .call()
            .map_err(|e| QuotzError::Fetch(format!("failed to fetch quote feed: {e}")))?;
        let mut body = String::new();
        resp.into_reader()
            .read_to_string(&mut body)
            .map_err(|e| QuotzError::Fetch(format!("failed to read feed body: {e}")))?;
        Ok(body)
    }
}

/// Map the raw payload into quote records: each item's `title` becomes the
/// text, the category is always [`SERVER_CATEGORY`]. A payload that is not an
/// array of titled items, or that carries a blank title, is rejected whole.
pub fn map_feed(body: &str) -> Result<Vec<Quote>> {
    let items: Vec<FeedItem> = serde_json::from_str(body)
        .map_err(|e| QuotzError::Parse(format!("feed payload is not a quote array: {e}")))?;

    items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            Quote::new(&item.title, SERVER_CATEGORY)
                .map_err(|e| QuotzError::Parse(format!("feed item {}: {}", i + 1, e)))
        })
        .collect()
}
