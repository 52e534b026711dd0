pub mod engine;
pub mod search_result;

pub use engine::{SearchEngine, DEFAULT_LIMIT};
pub use search_result::SearchResult;
