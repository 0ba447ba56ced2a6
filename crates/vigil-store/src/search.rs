//! Token-prefix full-text index.
//!
//! Backs the `adverseEvent` search path. Documents are tokenized into
//! lowercase alphanumeric runs; a query matches a document when *every*
//! query token prefix-matches at least one document token. Prefix matching
//! is a range scan over a sorted posting map, so "head" finds "headache".
//!
//! The index is insert-only: the indexed field is immutable after creation
//! and rows are never deleted, so postings never need removal.

use std::collections::{BTreeMap, BTreeSet};

/// Posting map from token to the slots of documents containing it.
#[derive(Debug, Default)]
pub struct SearchIndex {
    postings: BTreeMap<String, BTreeSet<usize>>,
}

/// Lowercase alphanumeric tokens of `text`, in document order.
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(str::to_owned)
        .collect()
}

impl SearchIndex {
    /// New empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Index `text` for the document at `slot`.
    pub fn index(&mut self, slot: usize, text: &str) {
        for token in tokenize(text) {
            self.postings.entry(token).or_default().insert(slot);
        }
    }

    /// Slots whose documents match `term` (every query token must
    /// prefix-match some document token). A term with no tokens matches
    /// nothing.
    pub fn matching_slots(&self, term: &str) -> BTreeSet<usize> {
        let tokens = tokenize(term);
        if tokens.is_empty() {
            return BTreeSet::new();
        }

        let mut result: Option<BTreeSet<usize>> = None;
        for token in tokens {
            let mut slots = BTreeSet::new();
            for (_, posting) in self
                .postings
                .range(token.clone()..)
                .take_while(|(key, _)| key.starts_with(&token))
            {
                slots.extend(posting.iter().copied());
            }

            result = Some(match result {
                None => slots,
                Some(acc) => acc.intersection(&slots).copied().collect(),
            });
            if result.as_ref().is_some_and(BTreeSet::is_empty) {
                break;
            }
        }

        result.unwrap_or_default()
    }
}
