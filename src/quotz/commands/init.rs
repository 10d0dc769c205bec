use crate::book::QuoteBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::StateStore;
use std::fs;
use std::path::Path;

/// Materialize the store directory. Opening the book already seeded the
/// starter set if the store was empty, so this mostly confirms where the data
/// lives.
pub fn run<S: StateStore>(book: &QuoteBook<S>, data_dir: &Path) -> Result<CmdResult> {
    fs::create_dir_all(data_dir)?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Initialized quotz store at {}",
        data_dir.display()
    )));
    result.add_message(CmdMessage::info(format!("{} quotes on hand.", book.len())));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn creates_the_directory_and_reports_the_seed() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("store");

        let book = QuoteBook::open(InMemoryStore::new()).unwrap();
        let result = run(&book, &target).unwrap();

        assert!(target.exists());
        assert!(result.messages[0].content.contains("Initialized"));
        assert!(result.messages[1].content.contains("3 quotes"));
    }
}
