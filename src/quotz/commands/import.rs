use crate::book::QuoteBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{QuotzError, Result};
use crate::model::Quote;
use crate::store::StateStore;
use std::fs;
use std::path::Path;

/// Import a JSON array of quote records from a file. The batch is appended
/// as-is (no dedup against existing texts); a payload that does not parse, or
/// carries an invalid record, is rejected whole.
pub fn run<S: StateStore>(book: &mut QuoteBook<S>, path: &Path) -> Result<CmdResult> {
    let raw = fs::read_to_string(path).map_err(QuotzError::Io)?;
    let records: Vec<Quote> = serde_json::from_str(&raw).map_err(|e| {
        QuotzError::Parse(format!("{} is not a quote array: {}", path.display(), e))
    })?;

    let count = book.import_records(records)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Imported {} quotes from {}.",
        count,
        path.display()
    )));
    Ok(result)
}
