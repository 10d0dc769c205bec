use crate::book::QuoteBook;
use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::CategoryFilter;
use crate::store::StateStore;

pub fn run<S: StateStore>(book: &QuoteBook<S>, category: Option<&str>) -> Result<CmdResult> {
    let filter = match category {
        Some(value) => CategoryFilter::from_stored(value),
        None => book.selected_filter().clone(),
    };

    let listed: Vec<_> = book.filtered(&filter).into_iter().cloned().collect();
    Ok(CmdResult::default().with_listed_quotes(listed))
}
