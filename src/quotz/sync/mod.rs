//! # Remote Sync
//!
//! Reconciles the local book against the remote quote feed. One cycle is
//! fetch → map → merge → persist; the watch loop in the binary drives cycles
//! off a [`SyncSchedule`], which keeps at most one cycle in flight and skips
//! ticks that come due mid-cycle.
//!
//! Per cycle the state machine is `Idle → Fetching → {Merging → Idle | Failed
//! → Idle}`. There is no terminal state: a failed cycle logs, leaves the book
//! untouched, and the next tick retries with no backoff.

pub mod feed;
pub mod merge;
pub mod schedule;

use crate::book::QuoteBook;
use crate::error::Result;
use crate::store::StateStore;
use chrono::Utc;
use tracing::{debug, info, warn};

pub use feed::{FeedClient, FEED_FILE_ENV};
pub use merge::MergeReport;
pub use schedule::SyncSchedule;

/// Outcome of one successful sync cycle.
#[derive(Debug, Clone)]
pub struct SyncReport {
    /// Records the feed returned.
    pub fetched: usize,
    pub merge: MergeReport,
}

/// Run one fetch → merge → persist cycle against the book.
///
/// A failure before the merge is persisted (transport, payload, storage)
/// surfaces as an error with the book's quote list unchanged on disk; the
/// caller decides whether to retry. The `lastSyncedAt` stamp lives under its
/// own key and is best-effort: a failed stamp write is logged, not fatal.
pub fn run_cycle<S: StateStore>(
    book: &mut QuoteBook<S>,
    client: &FeedClient,
) -> Result<SyncReport> {
    debug!(url = client.url(), "fetching quote feed");
    let remote = client.fetch_quotes()?;
    let fetched = remote.len();

    let merge = book.apply_merge(remote)?;
    if let Err(e) = book.mark_synced(Utc::now()) {
        warn!("could not record the sync time: {e}");
    }
    info!(
        fetched,
        added = merge.added,
        updated = merge.updated,
        "quote feed merged"
    );
    Ok(SyncReport { fetched, merge })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::store_with_quotes;
    use std::time::Duration;

    // Network-free: a client pointed at an unroutable address, no env
    // override, so the fetch itself fails fast.
    fn dead_client() -> FeedClient {
        FeedClient::new(
            "http://127.0.0.1:1/unreachable".to_string(),
            Duration::from_millis(200),
        )
    }

    #[test]
    fn failed_fetch_leaves_the_book_identical() {
        let mut book = QuoteBook::open(store_with_quotes(&[("a", "Life"), ("b", "Misc")])).unwrap();
        let before: Vec<_> = book.all().to_vec();

        let err = run_cycle(&mut book, &dead_client());
        assert!(err.is_err());
        assert_eq!(book.all(), before.as_slice());
        assert!(book.last_synced_at().is_none());
    }
}
