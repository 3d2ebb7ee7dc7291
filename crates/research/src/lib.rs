//! # artscope-research
//!
//! Gathers short web excerpts about an artwork: one search, one fetch per
//! result, markup stripped, text cut to a fixed budget.

pub mod collector;
pub mod extract;
pub mod search;

pub use collector::ResearchCollector;
pub use extract::{extract_text, truncate_chars};
pub use search::DuckDuckGoSearch;
