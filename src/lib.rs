pub mod error;
pub mod inverted_index;
pub mod loader;
pub mod normalizer;
pub mod search;
