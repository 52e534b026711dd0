use std::collections::HashMap;

use crate::normalizer::KeywordNormalizer;

pub type DocId = String;
pub type Frequency = u32;

/// Number of times one keyword occurs in one document.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Occurrence {
    pub document: DocId,
    pub frequency: Frequency,
}

impl Occurrence {
    pub fn new(document: impl Into<DocId>, frequency: Frequency) -> Self {
        Self {
            document: document.into(),
            frequency,
        }
    }
}

/// Keywords of a single document, each with its in-document occurrence.
pub type DocKeywords = HashMap<String, Occurrence>;

/// Counts the keywords among `tokens`, attributing them to `document`.
pub fn scan_document<I, S>(normalizer: &KeywordNormalizer, tokens: I, document: &str) -> DocKeywords
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut keywords = DocKeywords::new();

    for keyword in tokens
        .into_iter()
        .filter_map(|token| normalizer.normalize(token.as_ref()))
    {
        keywords
            .entry(keyword)
            .and_modify(|occurrence| occurrence.frequency += 1)
            .or_insert_with(|| Occurrence::new(document, 1));
    }

    keywords
}
