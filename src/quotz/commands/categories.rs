use crate::book::QuoteBook;
use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::StateStore;

pub fn run<S: StateStore>(book: &QuoteBook<S>) -> Result<CmdResult> {
    Ok(CmdResult::default().with_categories(book.categories()))
}
