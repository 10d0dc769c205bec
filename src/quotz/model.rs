use crate::error::{QuotzError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Category stamped on records that originate from the remote feed.
pub const SERVER_CATEGORY: &str = "Server";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    pub text: String,
    pub category: String,
}

impl Quote {
    /// Build a quote from raw input: trims both fields, rejects empties.
    pub fn new(text: &str, category: &str) -> Result<Self> {
        let text = text.trim();
        let category = category.trim();
        if text.is_empty() {
            return Err(QuotzError::Validation("quote text cannot be empty".into()));
        }
        if category.is_empty() {
            return Err(QuotzError::Validation("category cannot be empty".into()));
        }
        Ok(Self {
            text: text.to_string(),
            category: category.to_string(),
        })
    }

    /// Re-check a record that arrived already shaped (import, stored data).
    /// The record itself is kept verbatim; only emptiness is rejected.
    pub fn validate(&self) -> Result<()> {
        if self.text.trim().is_empty() {
            return Err(QuotzError::Validation("quote text cannot be empty".into()));
        }
        if self.category.trim().is_empty() {
            return Err(QuotzError::Validation("category cannot be empty".into()));
        }
        Ok(())
    }
}

/// The category filter: everything, or one exact (case-sensitive) label.
///
/// Stored as the plain string `"all"` or the label itself, so the persisted
/// form stays readable in the data file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryFilter {
    All,
    Category(String),
}

const ALL_SENTINEL: &str = "all";

impl CategoryFilter {
    /// Parse the persisted form. Absent or blank values fall back to `All`.
    pub fn from_stored(value: &str) -> Self {
        let value = value.trim();
        if value.is_empty() || value == ALL_SENTINEL {
            CategoryFilter::All
        } else {
            CategoryFilter::Category(value.to_string())
        }
    }

    pub fn as_stored(&self) -> &str {
        match self {
            CategoryFilter::All => ALL_SENTINEL,
            CategoryFilter::Category(name) => name,
        }
    }

    pub fn matches(&self, quote: &Quote) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Category(name) => quote.category == *name,
        }
    }
}

impl std::fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_stored())
    }
}

/// Distinct category labels across `quotes`, in first-seen order.
pub fn distinct_categories(quotes: &[Quote]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut categories = Vec::new();
    for quote in quotes {
        if seen.insert(quote.category.as_str()) {
            categories.push(quote.category.clone());
        }
    }
    categories
}

/// Starter set used when the store holds no quotes yet.
pub fn default_quotes() -> Vec<Quote> {
    vec![
        Quote {
            text: "Life is what happens when you're busy making other plans.".to_string(),
            category: "Life".to_string(),
        },
        Quote {
            text: "The way to get started is to quit talking and begin doing.".to_string(),
            category: "Motivation".to_string(),
        },
        Quote {
            text: "Don't let yesterday take up too much of today.".to_string(),
            category: "Inspirational".to_string(),
        },
    ]
}
