use crate::book::QuoteBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::config::QuotzConfig;
use crate::error::Result;
use crate::store::StateStore;
use crate::sync::{run_cycle, FeedClient};

/// Run one fetch → merge → persist cycle and report it. The watch loop in the
/// binary calls this once per schedule tick.
pub fn run<S: StateStore>(book: &mut QuoteBook<S>, config: &QuotzConfig) -> Result<CmdResult> {
    let client = FeedClient::new(config.feed_url.clone(), config.fetch_timeout());
    let report = run_cycle(book, &client)?;

    let mut result = CmdResult::default();
    if report.merge.changed() {
        result.add_message(CmdMessage::success(
            "Quotes have been updated with the latest server data.",
        ));
    } else {
        result.add_message(CmdMessage::info("Already up to date with the server feed."));
    }
    result.add_message(CmdMessage::info(format!(
        "Fetched {} quotes from the feed: {} new, {} updated, {} total.",
        report.fetched, report.merge.added, report.merge.updated, report.merge.total
    )));
    Ok(result)
}
