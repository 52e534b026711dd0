pub mod doc_map;
pub mod master_index;

use std::collections::HashSet;

pub use doc_map::{scan_document, DocId, DocKeywords, Frequency, Occurrence};
pub use master_index::{insert_last_occurrence, KeywordEntry, MasterIndex};

use crate::normalizer::KeywordNormalizer;

/// Scans and merges every document into a fresh index.
///
/// A document id that was already indexed is skipped, so each document
/// contributes at most one occurrence per keyword.
pub fn build_index<D, I, T, S, N, W>(documents: D, noise_words: N) -> MasterIndex
where
    D: IntoIterator<Item = (I, T)>,
    I: Into<DocId>,
    T: IntoIterator<Item = S>,
    S: AsRef<str>,
    N: IntoIterator<Item = W>,
    W: AsRef<str>,
{
    let normalizer = KeywordNormalizer::new(noise_words);
    let mut index = MasterIndex::new();
    let mut seen: HashSet<DocId> = HashSet::new();

    for (document, tokens) in documents {
        let document: DocId = document.into();

        if seen.contains(&document) {
            tracing::warn!(%document, "document already indexed, skipping");
            continue;
        }

        let keywords = scan_document(&normalizer, tokens, &document);
        tracing::debug!(%document, keywords = keywords.len(), "merging document");

        index.merge(keywords);
        seen.insert(document);
    }

    index
}
