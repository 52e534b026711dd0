use serde::Serialize;

/// Outcome of one two-keyword query, as reported by the CLI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchResult<'a> {
    pub keywords: [&'a str; 2],
    pub documents: Vec<&'a str>,
}

impl<'a> SearchResult<'a> {
    pub const fn new(kw1: &'a str, kw2: &'a str, documents: Vec<&'a str>) -> Self {
        Self {
            keywords: [kw1, kw2],
            documents,
        }
    }
}
