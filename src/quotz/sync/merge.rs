//! Last-writer-wins reconciliation of local quotes against the remote feed.
//!
//! Quotes are keyed by their `text`; the feed record wins whenever both sides
//! carry the same key. Result order is the explicit contract: local-only
//! records first, in their original relative order, then every remote record
//! in feed order. Duplicate texts inside one input collapse to the last
//! occurrence (keeping the first slot), so the result always holds exactly one
//! record per distinct text.

use crate::model::Quote;
use std::collections::{HashMap, HashSet};

/// What a merge did, for user notifications and logs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergeReport {
    /// Records in the merged list.
    pub total: usize,
    /// Remote records whose text was not present locally.
    pub added: usize,
    /// Remote records that replaced a differing local record.
    pub updated: usize,
}

impl MergeReport {
    pub fn changed(&self) -> bool {
        self.added > 0 || self.updated > 0
    }
}

pub fn merge(local: &[Quote], remote: Vec<Quote>) -> (Vec<Quote>, MergeReport) {
    let local = dedupe_last_wins(local.iter().cloned());
    let remote = dedupe_last_wins(remote);

    let mut report = MergeReport::default();
    {
        let local_by_text: HashMap<&str, &Quote> =
            local.iter().map(|q| (q.text.as_str(), q)).collect();
        for record in &remote {
            match local_by_text.get(record.text.as_str()) {
                None => report.added += 1,
                Some(existing) if **existing != *record => report.updated += 1,
                Some(_) => {}
            }
        }
    }

    let remote_texts: HashSet<&str> = remote.iter().map(|q| q.text.as_str()).collect();
    let mut merged: Vec<Quote> = local
        .iter()
        .filter(|q| !remote_texts.contains(q.text.as_str()))
        .cloned()
        .collect();
    merged.extend(remote);

    report.total = merged.len();
    (merged, report)
}

fn dedupe_last_wins<I: IntoIterator<Item = Quote>>(input: I) -> Vec<Quote> {
    let mut slots: HashMap<String, usize> = HashMap::new();
    let mut out: Vec<Quote> = Vec::new();
    for quote in input {
        match slots.get(&quote.text) {
            Some(&i) => out[i] = quote,
            None => {
                slots.insert(quote.text.clone(), out.len());
                out.push(quote);
            }
        }
    }
    out
}
