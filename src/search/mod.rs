//! Ranked product search with synonym expansion
//!
//! This module provides the storefront's fuzzy search through:
//! - Turkish-aware text normalization
//! - Query tokenization with synonym-table expansion
//! - Weighted substring scoring with a stable ranking

mod normalize;
mod ranker;
mod synonyms;

pub use normalize::normalize;
pub use ranker::ProductRanker;
pub use synonyms::{expand_query, SearchToken, SynonymTable, JEWELRY_SYNONYMS};
