//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It serves as the
//! single entry point for all quotz operations, regardless of the UI being
//! used.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Owns the book** for the lifetime of the process
//! - **Dispatches** to the appropriate command function
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! ## What the API Does NOT Do
//!
//! - **Business logic**: That belongs in `commands/*.rs`
//! - **I/O operations**: No stdout, stderr, or terminal formatting
//! - **Presentation concerns**: Returns data structures, not strings
//!
//! ## Generic Over StateStore
//!
//! `QuotzApi<S: StateStore>` is generic over the storage backend:
//! - Production: `QuotzApi<FileStore>`
//! - Testing: `QuotzApi<InMemoryStore>`
//!
//! This enables testing the API layer without touching the filesystem.

use crate::book::QuoteBook;
use crate::commands;
use crate::config::QuotzConfig;
use crate::error::Result;
use crate::store::StateStore;
use rand::Rng;
use std::path::{Path, PathBuf};

/// The main API facade for quotz operations.
///
/// Generic over `StateStore` to allow different storage backends.
/// All UI clients (CLI, web, etc.) should interact through this API.
pub struct QuotzApi<S: StateStore> {
    book: QuoteBook<S>,
    config: QuotzConfig,
    data_dir: PathBuf,
}

impl<S: StateStore> QuotzApi<S> {
    /// Open the book on `store` and hold on to the loaded config.
    pub fn open(store: S, config: QuotzConfig, data_dir: PathBuf) -> Result<Self> {
        Ok(Self {
            book: QuoteBook::open(store)?,
            config,
            data_dir,
        })
    }

    pub fn add_quote(&mut self, text: &str, category: &str) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.book, text, category)
    }

    pub fn show_quote(&mut self, category: Option<&str>) -> Result<commands::CmdResult> {
        self.show_quote_with_rng(&mut rand::thread_rng(), category)
    }

    /// `show_quote` with an injected RNG, for deterministic callers.
    pub fn show_quote_with_rng<R: Rng>(
        &mut self,
        rng: &mut R,
        category: Option<&str>,
    ) -> Result<commands::CmdResult> {
        commands::show::run(&mut self.book, rng, category)
    }

    pub fn list_quotes(&self, category: Option<&str>) -> Result<commands::CmdResult> {
        commands::list::run(&self.book, category)
    }

    pub fn categories(&self) -> Result<commands::CmdResult> {
        commands::categories::run(&self.book)
    }

    pub fn filter(&mut self, value: Option<&str>) -> Result<commands::CmdResult> {
        commands::filter::run(&mut self.book, value)
    }

    pub fn import_quotes(&mut self, path: &Path) -> Result<commands::CmdResult> {
        commands::import::run(&mut self.book, path)
    }

    pub fn export_quotes(&self, path: Option<&Path>) -> Result<commands::CmdResult> {
        commands::export::run(&self.book, path)
    }

    pub fn sync(&mut self) -> Result<commands::CmdResult> {
        commands::sync::run(&mut self.book, &self.config)
    }

    pub fn status(&self) -> Result<commands::CmdResult> {
        commands::status::run(&self.book, &self.config, &self.data_dir)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.data_dir, action)
    }

    pub fn init(&self) -> Result<commands::CmdResult> {
        commands::init::run(&self.book, &self.data_dir)
    }

    pub fn config_snapshot(&self) -> &QuotzConfig {
        &self.config
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, MessageLevel, StatusSnapshot};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn api() -> QuotzApi<InMemoryStore> {
        QuotzApi::open(
            InMemoryStore::new(),
            QuotzConfig::default(),
            PathBuf::from("/tmp/quotz-api-tests"),
        )
        .unwrap()
    }

    #[test]
    fn open_seeds_and_dispatch_reaches_the_book() {
        let mut api = api();
        let listed = api.list_quotes(None).unwrap();
        assert_eq!(listed.listed_quotes.len(), 3);

        api.add_quote("dispatch check", "Misc").unwrap();
        let listed = api.list_quotes(Some("Misc")).unwrap();
        assert_eq!(listed.listed_quotes.len(), 1);
    }

    #[test]
    fn show_with_injected_rng_is_deterministic() {
        let mut api = api();
        let mut a = StdRng::seed_from_u64(11);
        let mut b = StdRng::seed_from_u64(11);
        let first = api.show_quote_with_rng(&mut a, None).unwrap();
        let second = api.show_quote_with_rng(&mut b, None).unwrap();
        assert_eq!(
            first.affected_quotes[0].text,
            second.affected_quotes[0].text
        );
    }

    #[test]
    fn filter_round_trips_through_the_facade() {
        let mut api = api();
        api.filter(Some("Life")).unwrap();
        let shown = api.filter(None).unwrap();
        assert!(shown.messages[0].content.contains("Life"));
    }
}
