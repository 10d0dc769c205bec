use crate::book::QuoteBook;
use crate::commands::{CmdResult, StatusSnapshot};
use crate::config::QuotzConfig;
use crate::error::Result;
use crate::store::StateStore;
use std::path::Path;

pub fn run<S: StateStore>(
    book: &QuoteBook<S>,
    config: &QuotzConfig,
    data_dir: &Path,
) -> Result<CmdResult> {
    let snapshot = StatusSnapshot {
        data_dir: data_dir.to_path_buf(),
        quote_count: book.len(),
        category_count: book.categories().len(),
        filter: book.selected_filter().to_string(),
        feed_url: config.feed_url.clone(),
        last_synced_at: book.last_synced_at(),
    };
    Ok(CmdResult::default().with_status(snapshot))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CategoryFilter;
    use crate::store::memory::fixtures::store_with_quotes;

    #[test]
    fn snapshot_reflects_the_book() {
        let mut book = QuoteBook::open(store_with_quotes(&[
            ("a", "Life"),
            ("b", "Misc"),
            ("c", "Life"),
        ]))
        .unwrap();
        book.set_filter(CategoryFilter::Category("Life".to_string()))
            .unwrap();

        let config = QuotzConfig::default();
        let result = run(&book, &config, Path::new("/tmp/somewhere")).unwrap();
        let status = result.status.unwrap();

        assert_eq!(status.quote_count, 3);
        assert_eq!(status.category_count, 2);
        assert_eq!(status.filter, "Life");
        assert_eq!(status.feed_url, config.feed_url);
        assert!(status.last_synced_at.is_none());
    }
}
