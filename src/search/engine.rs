use std::collections::HashSet;

use crate::inverted_index::{MasterIndex, Occurrence};

/// Number of documents returned by [`SearchEngine::top5`].
pub const DEFAULT_LIMIT: usize = 5;

/// Answers two-keyword queries against a finished index.
pub struct SearchEngine {
    index: MasterIndex,
}

impl SearchEngine {
    pub const fn new(index: MasterIndex) -> Self {
        Self { index }
    }

    pub const fn index(&self) -> &MasterIndex {
        &self.index
    }

    pub fn top5(&self, kw1: &str, kw2: &str) -> Vec<&str> {
        self.top_matches(kw1, kw2, DEFAULT_LIMIT)
    }

    /// Documents containing `kw1` or `kw2`, most frequent first, at most
    /// `limit` of them. Equal frequencies favour `kw1`, and a document found
    /// under both keywords is listed once.
    pub fn top_matches(&self, kw1: &str, kw2: &str, limit: usize) -> Vec<&str> {
        let first = self.index.get(&kw1.to_lowercase());
        let second = self.index.get(&kw2.to_lowercase());

        match (first, second) {
            (None, None) => Vec::new(),
            (Some(only), None) | (None, Some(only)) => only
                .iter()
                .take(limit)
                .map(|occurrence| occurrence.document.as_str())
                .collect(),
            (Some(first), Some(second)) => ranked_merge(first, second, limit),
        }
    }
}

fn ranked_merge<'a>(first: &'a [Occurrence], second: &'a [Occurrence], limit: usize) -> Vec<&'a str> {
    let mut result = Vec::with_capacity(limit.min(first.len() + second.len()));
    let mut seen = HashSet::new();
    let (mut i, mut j) = (0, 0);

    while (i < first.len() || j < second.len()) && result.len() < limit {
        let occurrence = if i == first.len() {
            j += 1;
            &second[j - 1]
        } else if j == second.len() || first[i].frequency >= second[j].frequency {
            i += 1;
            &first[i - 1]
        } else {
            j += 1;
            &second[j - 1]
        };

        let document = occurrence.document.as_str();
        if seen.insert(document) {
            result.push(document);
        }
    }

    result
}
