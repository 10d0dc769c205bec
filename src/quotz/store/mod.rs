//! # Storage Layer
//!
//! This module defines the storage abstraction for quotz. The [`StateStore`]
//! trait allows the application to work with different storage backends.
//!
//! ## Design Rationale
//!
//! Storage is abstracted behind a trait to:
//! - Enable **testing** with `InMemoryStore` (no filesystem needed)
//! - Allow **future backends** (database, cloud, etc.) without changing core logic
//! - Keep business logic **decoupled** from persistence details
//!
//! The interface is a deliberately small key-value surface: the quote list and
//! the selected filter live under independent keys, updated independently.
//! There is **no cross-key transaction**; callers must not assume atomicity
//! across keys.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production file-based storage, one file per key under
//!   the data directory
//! - [`memory::InMemoryStore`]: In-memory storage for testing, no persistence
//!
//! ## Storage Format
//!
//! For `FileStore`:
//! ```text
//! ~/.local/share/quotz/
//! ├── quotes                  # JSON array of {text, category}, pretty-printed
//! ├── lastSelectedCategory    # plain category name, or "all"
//! ├── lastSyncedAt            # RFC 3339 time of the last successful sync
//! └── config.json             # feed URL and sync settings
//! ```
//!
//! Values are stored raw; the store neither parses nor validates them. Shaping
//! and validation happen in [`crate::book`].

use crate::error::Result;

pub mod fs;
pub mod memory;

/// Key holding the serialized quote list (a JSON array).
pub const QUOTES_KEY: &str = "quotes";

/// Key holding the selected category filter (plain string, `"all"` for none).
pub const FILTER_KEY: &str = "lastSelectedCategory";

/// Key holding the RFC 3339 timestamp of the last successful feed sync.
pub const LAST_SYNC_KEY: &str = "lastSyncedAt";

/// Abstract key-value interface for quotz state.
///
/// Implementations must treat keys as independent values with last-write-wins
/// semantics and surface storage failures as errors rather than dropping them.
pub trait StateStore {
    /// Read the value under `key`, or `None` if it was never written.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}
