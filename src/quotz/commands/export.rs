use crate::book::QuoteBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{QuotzError, Result};
use crate::store::StateStore;
use std::fs;
use std::path::Path;

pub const DEFAULT_EXPORT_FILENAME: &str = "quotes.json";

/// Write every quote to a JSON file, pretty-printed. The target defaults to
/// `quotes.json` in the current directory.
pub fn run<S: StateStore>(book: &QuoteBook<S>, path: Option<&Path>) -> Result<CmdResult> {
    let target = path.unwrap_or_else(|| Path::new(DEFAULT_EXPORT_FILENAME));
    let snapshot = book.export_snapshot()?;
    fs::write(target, snapshot).map_err(QuotzError::Io)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Exported {} quotes to {}.",
        book.len(),
        target.display()
    )));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Quote;
    use crate::store::memory::fixtures::store_with_quotes;

    #[test]
    fn exports_every_quote_as_pretty_json() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("out.json");

        let book = QuoteBook::open(store_with_quotes(&[("a", "Life"), ("b", "Misc")])).unwrap();
        run(&book, Some(&target)).unwrap();

        let raw = fs::read_to_string(&target).unwrap();
        assert!(raw.contains('\n'), "export should be pretty-printed");
        let records: Vec<Quote> = serde_json::from_str(&raw).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records.as_slice(), book.all());
    }

    #[test]
    fn export_has_no_side_effect_on_the_book() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("out.json");

        let book = QuoteBook::open(store_with_quotes(&[("a", "Life")])).unwrap();
        let before: Vec<_> = book.all().to_vec();
        run(&book, Some(&target)).unwrap();
        assert_eq!(book.all(), before.as_slice());
    }
}
