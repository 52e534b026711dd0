use std::{
    cmp::Ordering,
    collections::{hash_map::Entry, HashMap},
};

use super::doc_map::{DocKeywords, Occurrence};

/// Occurrences of one keyword across the corpus, by descending frequency.
pub type KeywordEntry = Vec<Occurrence>;

/// Keyword to occurrence list mapping for a whole corpus.
///
/// Filled through [`MasterIndex::merge`] one document at a time, then only
/// read. Every entry is kept sorted by descending frequency and holds at most
/// one occurrence per document, provided no document is merged twice.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MasterIndex {
    keywords: HashMap<String, KeywordEntry>,
}

impl MasterIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds the keywords of one document into the index.
    pub fn merge(&mut self, doc: DocKeywords) {
        for (keyword, occurrence) in doc {
            match self.keywords.entry(keyword) {
                Entry::Vacant(vacant) => {
                    vacant.insert(vec![occurrence]);
                }
                Entry::Occupied(mut occupied) => {
                    let entry = occupied.get_mut();
                    entry.push(occurrence);
                    let probes = insert_last_occurrence(entry);

                    tracing::trace!(
                        keyword = %occupied.key(),
                        ?probes,
                        "repositioned occurrence"
                    );
                }
            }
        }
    }

    pub fn get(&self, keyword: &str) -> Option<&[Occurrence]> {
        self.keywords.get(keyword).map(Vec::as_slice)
    }

    pub fn contains(&self, keyword: &str) -> bool {
        self.keywords.contains_key(keyword)
    }

    pub fn keywords(&self) -> impl Iterator<Item = &str> {
        self.keywords.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.keywords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }
}

/// Moves the last occurrence of `entry` to its place in descending frequency
/// order. All other elements must already be sorted.
///
/// Binary searches `0..=n-2`, stopping at the first probe whose frequency
/// equals the new one; the occurrence then goes right before that probe.
/// Returns the probed midpoints in order, empty when there was nothing to
/// search.
pub fn insert_last_occurrence(entry: &mut KeywordEntry) -> Vec<usize> {
    let mut probes = Vec::new();

    let last = match entry.len().checked_sub(1) {
        Some(last) if last > 0 => last,
        _ => return probes,
    };

    let target = entry[last].frequency;
    let mut min = 0;
    let mut max = last - 1;

    while min <= max {
        let mid = (min + max) / 2;
        probes.push(mid);

        match entry[mid].frequency.cmp(&target) {
            Ordering::Less => match mid.checked_sub(1) {
                Some(below) => max = below,
                None => break,
            },
            Ordering::Greater => min = mid + 1,
            Ordering::Equal => {
                min = mid;
                break;
            }
        }
    }

    let occurrence = entry.remove(last);
    entry.insert(min, occurrence);

    probes
}
