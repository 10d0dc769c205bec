use crate::book::QuoteBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::CategoryFilter;
use crate::store::StateStore;
use rand::Rng;

/// Pick one random quote from the saved filter (or the one-off override) and
/// record it as the session's last shown quote.
pub fn run<S: StateStore, R: Rng>(
    book: &mut QuoteBook<S>,
    rng: &mut R,
    category: Option<&str>,
) -> Result<CmdResult> {
    let filter = match category {
        Some(value) => CategoryFilter::from_stored(value),
        None => book.selected_filter().clone(),
    };

    let candidates = book.filtered(&filter);
    if candidates.is_empty() {
        let mut result = CmdResult::default();
        result.add_message(CmdMessage::info("No quotes available in this category."));
        return Ok(result);
    }

    let pick = rng.gen_range(0..candidates.len());
    let quote = candidates[pick].clone();
    book.record_shown(&quote.text);
    Ok(CmdResult::default().with_affected_quotes(vec![quote]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::store_with_quotes;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn picks_one_quote_and_records_it() {
        let mut book = QuoteBook::open(store_with_quotes(&[("a", "Life"), ("b", "Misc")])).unwrap();
        let mut rng = StdRng::seed_from_u64(7);

        let result = run(&mut book, &mut rng, None).unwrap();
        assert_eq!(result.affected_quotes.len(), 1);
        assert_eq!(
            book.last_shown(),
            Some(result.affected_quotes[0].text.as_str())
        );
    }

    #[test]
    fn override_keeps_picks_inside_the_category() {
        let mut book = QuoteBook::open(store_with_quotes(&[
            ("a", "Life"),
            ("b", "Misc"),
            ("c", "Life"),
        ]))
        .unwrap();
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..20 {
            let result = run(&mut book, &mut rng, Some("Life")).unwrap();
            assert_eq!(result.affected_quotes[0].category, "Life");
        }
    }

    #[test]
    fn saved_filter_drives_the_pick_when_no_override() {
        let mut book = QuoteBook::open(store_with_quotes(&[("a", "Life"), ("b", "Misc")])).unwrap();
        book.set_filter(CategoryFilter::Category("Misc".to_string()))
            .unwrap();
        let mut rng = StdRng::seed_from_u64(1);

        let result = run(&mut book, &mut rng, None).unwrap();
        assert_eq!(result.affected_quotes[0].text, "b");
    }

    #[test]
    fn empty_category_reports_instead_of_picking() {
        let mut book = QuoteBook::open(store_with_quotes(&[("a", "Life")])).unwrap();
        let mut rng = StdRng::seed_from_u64(1);

        let result = run(&mut book, &mut rng, Some("NoSuchCategory")).unwrap();
        assert!(result.affected_quotes.is_empty());
        assert_eq!(result.messages.len(), 1);
        assert!(book.last_shown().is_none());
    }

    #[test]
    fn explicit_all_override_widens_a_saved_filter() {
        let mut book = QuoteBook::open(store_with_quotes(&[("a", "Life"), ("b", "Misc")])).unwrap();
        book.set_filter(CategoryFilter::Category("Life".to_string()))
            .unwrap();
        let mut rng = StdRng::seed_from_u64(3);

        let mut saw_misc = false;
        for _ in 0..50 {
            let result = run(&mut book, &mut rng, Some("all")).unwrap();
            if result.affected_quotes[0].category == "Misc" {
                saw_misc = true;
            }
        }
        assert!(saw_misc);
    }
}
