use crate::book::QuoteBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::StateStore;

pub fn run<S: StateStore>(
    book: &mut QuoteBook<S>,
    text: &str,
    category: &str,
) -> Result<CmdResult> {
    let quote = book.add(text, category)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Quote added to \"{}\".",
        quote.category
    )));
    Ok(result.with_affected_quotes(vec![quote]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::QuotzError;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn adds_a_quote_and_reports_it() {
        let mut book = QuoteBook::open(InMemoryStore::new()).unwrap();
        let before = book.len();

        let result = run(&mut book, "new words", "Misc").unwrap();
        assert_eq!(book.len(), before + 1);
        assert_eq!(result.affected_quotes.len(), 1);
        assert_eq!(result.affected_quotes[0].text, "new words");
    }

    #[test]
    fn rejects_blank_text() {
        let mut book = QuoteBook::open(InMemoryStore::new()).unwrap();
        let before = book.len();

        let err = run(&mut book, "   ", "Misc").unwrap_err();
        assert!(matches!(err, QuotzError::Validation(_)));
        assert_eq!(book.len(), before);
    }

    #[test]
    fn rejects_blank_category() {
        let mut book = QuoteBook::open(InMemoryStore::new()).unwrap();
        let err = run(&mut book, "words", " ").unwrap_err();
        assert!(matches!(err, QuotzError::Validation(_)));
    }
}
