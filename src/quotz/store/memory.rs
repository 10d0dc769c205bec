use super::StateStore;
use crate::error::Result;
use std::collections::HashMap;

/// In-memory store for tests. Same contract as `FileStore`, no persistence.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    values: HashMap<String, String>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StateStore for InMemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::Quote;
    use crate::store::QUOTES_KEY;

    /// A store preloaded with quote records, bypassing the book so tests can
    /// shape the stored JSON exactly.
    pub fn store_with_quotes(records: &[(&str, &str)]) -> InMemoryStore {
        let quotes: Vec<Quote> = records
            .iter()
            .map(|(text, category)| Quote {
                text: text.to_string(),
                category: category.to_string(),
            })
            .collect();
        let mut store = InMemoryStore::new();
        store
            .set(QUOTES_KEY, &serde_json::to_string_pretty(&quotes).unwrap())
            .unwrap();
        store
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::store_with_quotes;
    use super::*;
    use crate::store::{FILTER_KEY, QUOTES_KEY};

    #[test]
    fn get_returns_none_until_set() {
        let mut store = InMemoryStore::new();
        assert_eq!(store.get(FILTER_KEY).unwrap(), None);
        store.set(FILTER_KEY, "Motivation").unwrap();
        assert_eq!(
            store.get(FILTER_KEY).unwrap().as_deref(),
            Some("Motivation")
        );
    }

    #[test]
    fn set_overwrites_previous_value() {
        let mut store = InMemoryStore::new();
        store.set(FILTER_KEY, "a").unwrap();
        store.set(FILTER_KEY, "b").unwrap();
        assert_eq!(store.get(FILTER_KEY).unwrap().as_deref(), Some("b"));
    }

    #[test]
    fn fixture_seeds_parseable_quotes() {
        let store = store_with_quotes(&[("a", "Life"), ("b", "Misc")]);
        let raw = store.get(QUOTES_KEY).unwrap().unwrap();
        let parsed: Vec<crate::model::Quote> = serde_json::from_str(&raw).unwrap();
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[0].text, "a");
    }
}
