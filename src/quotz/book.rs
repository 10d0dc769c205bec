//! # Quote Repository
//!
//! [`QuoteBook`] owns the in-memory quote list and writes it through to the
//! [`StateStore`](crate::store::StateStore) on every mutation. It is the sole
//! source of truth for everything above it: commands read and mutate the book,
//! never the store directly.
//!
//! Two rules govern the book:
//!
//! - **Write-through**: `add`, `import_records`, `apply_merge` and
//!   `set_filter` persist before returning. A book that returned `Ok` has its
//!   state on disk.
//! - **Fail open on load**: unreadable stored quotes are treated as absent and
//!   replaced by the built-in starter set. Losing a corrupt file beats
//!   refusing to start.

use crate::error::{QuotzError, Result};
use crate::model::{default_quotes, distinct_categories, CategoryFilter, Quote};
use crate::store::{StateStore, FILTER_KEY, LAST_SYNC_KEY, QUOTES_KEY};
use crate::sync::merge::{merge, MergeReport};
use chrono::{DateTime, Utc};
use tracing::warn;

pub struct QuoteBook<S: StateStore> {
    store: S,
    quotes: Vec<Quote>,
    filter: CategoryFilter,
    // Session-only: text of the last quote shown, never persisted.
    last_shown: Option<String>,
}

impl<S: StateStore> QuoteBook<S> {
    /// Load the book from the store, seeding the starter set if the store is
    /// empty or its quotes key does not parse.
    pub fn open(store: S) -> Result<Self> {
        let mut book = Self {
            store,
            quotes: Vec::new(),
            filter: CategoryFilter::All,
            last_shown: None,
        };

        let seeded = match book.store.get(QUOTES_KEY)? {
            Some(raw) => match serde_json::from_str::<Vec<Quote>>(&raw) {
                Ok(quotes) => {
                    book.quotes = quotes;
                    false
                }
                Err(e) => {
                    warn!("stored quotes are unreadable, starting over from defaults: {e}");
                    book.quotes = default_quotes();
                    true
                }
            },
            None => {
                book.quotes = default_quotes();
                true
            }
        };
        if seeded {
            book.persist_quotes()?;
        }

        if let Some(raw) = book.store.get(FILTER_KEY)? {
            book.filter = CategoryFilter::from_stored(&raw);
        }

        Ok(book)
    }

    /// Validate, append and persist one quote. Returns the stored record.
    pub fn add(&mut self, text: &str, category: &str) -> Result<Quote> {
        let quote = Quote::new(text, category)?;
        self.quotes.push(quote.clone());
        self.persist_quotes()?;
        Ok(quote)
    }

    /// Append a batch of already-shaped records. The whole batch is validated
    /// up front; one bad record rejects all of them and the book is untouched.
    /// No dedup is performed against existing texts.
    pub fn import_records(&mut self, records: Vec<Quote>) -> Result<usize> {
        for (i, record) in records.iter().enumerate() {
            record.validate().map_err(|e| {
                QuotzError::Validation(format!("record {}: {}", i + 1, e))
            })?;
        }
        let count = records.len();
        self.quotes.extend(records);
        self.persist_quotes()?;
        Ok(count)
    }

    /// The current quote list, pretty-printed as a JSON array. No side effect.
    pub fn export_snapshot(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.quotes)?)
    }

    pub fn all(&self) -> &[Quote] {
        &self.quotes
    }

    pub fn filtered(&self, filter: &CategoryFilter) -> Vec<&Quote> {
        self.quotes.iter().filter(|q| filter.matches(q)).collect()
    }

    pub fn categories(&self) -> Vec<String> {
        distinct_categories(&self.quotes)
    }

    pub fn selected_filter(&self) -> &CategoryFilter {
        &self.filter
    }

    pub fn set_filter(&mut self, filter: CategoryFilter) -> Result<()> {
        self.store.set(FILTER_KEY, filter.as_stored())?;
        self.filter = filter;
        Ok(())
    }

    /// Merge remote records in (server wins on shared text keys), persist the
    /// result, and report what changed. The merged list is written to the
    /// store before it replaces the in-memory list, so a storage failure
    /// leaves both views on the pre-merge state.
    pub fn apply_merge(&mut self, remote: Vec<Quote>) -> Result<MergeReport> {
        let (merged, report) = merge(&self.quotes, remote);
        let raw = serde_json::to_string_pretty(&merged)?;
        self.store.set(QUOTES_KEY, &raw)?;
        self.quotes = merged;
        Ok(report)
    }

    pub fn record_shown(&mut self, text: &str) {
        self.last_shown = Some(text.to_string());
    }

    pub fn last_shown(&self) -> Option<&str> {
        self.last_shown.as_deref()
    }

    pub fn mark_synced(&mut self, when: DateTime<Utc>) -> Result<()> {
        self.store.set(LAST_SYNC_KEY, &when.to_rfc3339())
    }

    /// Time of the last successful sync, if one is recorded and parseable.
    pub fn last_synced_at(&self) -> Option<DateTime<Utc>> {
        let raw = self.store.get(LAST_SYNC_KEY).ok()??;
        DateTime::parse_from_rfc3339(raw.trim())
            .ok()
            .map(|dt| dt.with_timezone(&Utc))
    }

    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }

    /// Give the store back, e.g. to reopen the book on the same data.
    pub fn into_store(self) -> S {
        self.store
    }

    fn persist_quotes(&mut self) -> Result<()> {
        let raw = serde_json::to_string_pretty(&self.quotes)?;
        self.store.set(QUOTES_KEY, &raw)
    }
}
