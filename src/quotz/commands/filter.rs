use crate::book::QuoteBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::CategoryFilter;
use crate::store::StateStore;

/// Show or set the saved category filter. `"all"` clears it. Setting a
/// category no quote carries yet is allowed (categories are free text), with
/// a heads-up.
pub fn run<S: StateStore>(book: &mut QuoteBook<S>, value: Option<&str>) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    let Some(value) = value else {
        result.add_message(CmdMessage::info(format!(
            "Filter: {}",
            book.selected_filter()
        )));
        return Ok(result);
    };

    let filter = CategoryFilter::from_stored(value);
    if let CategoryFilter::Category(name) = &filter {
        if !book.categories().iter().any(|c| c == name) {
            result.add_message(CmdMessage::warning(format!(
                "No quotes in \"{}\" yet.",
                name
            )));
        }
    }
    book.set_filter(filter)?;
    result.add_message(CmdMessage::success(format!(
        "Filter set to {}.",
        book.selected_filter()
    )));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::store_with_quotes;

    #[test]
    fn shows_the_current_filter() {
        let mut book = QuoteBook::open(store_with_quotes(&[("a", "Life")])).unwrap();
        let result = run(&mut book, None).unwrap();
        assert_eq!(result.messages.len(), 1);
        assert!(result.messages[0].content.contains("all"));
    }

    #[test]
    fn sets_and_persists_a_category_filter() {
        let mut book = QuoteBook::open(store_with_quotes(&[("a", "Life")])).unwrap();
        run(&mut book, Some("Life")).unwrap();
        assert_eq!(
            book.selected_filter(),
            &CategoryFilter::Category("Life".to_string())
        );

        let reopened = QuoteBook::open(book.into_store()).unwrap();
        assert_eq!(
            reopened.selected_filter(),
            &CategoryFilter::Category("Life".to_string())
        );
    }

    #[test]
    fn all_clears_the_filter() {
        let mut book = QuoteBook::open(store_with_quotes(&[("a", "Life")])).unwrap();
        run(&mut book, Some("Life")).unwrap();
        run(&mut book, Some("all")).unwrap();
        assert_eq!(book.selected_filter(), &CategoryFilter::All);
    }

    #[test]
    fn warns_when_the_category_has_no_quotes() {
        let mut book = QuoteBook::open(store_with_quotes(&[("a", "Life")])).unwrap();
        let result = run(&mut book, Some("Obscure")).unwrap();
        assert!(result
            .messages
            .iter()
            .any(|m| m.content.contains("No quotes in")));
        // Still set: categories are free text
        assert_eq!(
            book.selected_filter(),
            &CategoryFilter::Category("Obscure".to_string())
        );
    }
}
