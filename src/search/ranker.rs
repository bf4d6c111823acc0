//! Ranked fuzzy product search
//!
//! Scores every product by weighted substring matches across its searchable
//! fields and returns the matches ordered by descending relevance.

use rayon::prelude::*;

use crate::types::Product;

use super::normalize::normalize;
use super::synonyms::{expand_query, SearchToken, SynonymTable};

/// Queries shorter than this after trimming return no results, so a single
/// character never matches half the catalog
const MIN_QUERY_CHARS: usize = 2;

/// Catalog size above which scoring runs in parallel
const PARALLEL_SCORE_THRESHOLD: usize = 1000;

/// Bonus for the full query appearing in the product name
const PHRASE_NAME_BONUS: u32 = 20;
/// Bonus for the full query appearing in the category
const PHRASE_CATEGORY_BONUS: u32 = 15;
/// Per-token bonuses by field
const TOKEN_NAME_BONUS: u32 = 5;
const TOKEN_CATEGORY_BONUS: u32 = 4;
const TOKEN_COLOR_BONUS: u32 = 3;
const TOKEN_MATERIAL_BONUS: u32 = 3;
/// Weight applied to a token that came from the synonym table, rounded up
const SYNONYM_WEIGHT: f64 = 0.7;

/// Ranker over an in-memory product list
///
/// Holds the synonym table it expands queries with; substitute an alternate
/// table through [`ProductRanker::new`].
#[derive(Debug, Clone, Default)]
pub struct ProductRanker {
    synonyms: SynonymTable,
}

impl ProductRanker {
    /// Create a ranker with the given synonym table
    pub fn new(synonyms: SynonymTable) -> Self {
        Self { synonyms }
    }

    /// Rank `products` against `query`, best match first
    ///
    /// Non-matching products are dropped. The sort is stable: products with
    /// equal scores keep their order from the input list. Scores are
    /// internal and never exposed to the caller.
    pub fn rank(&self, query: &str, products: Vec<Product>) -> Vec<Product> {
        let trimmed = query.trim();
        if trimmed.chars().count() < MIN_QUERY_CHARS {
            return Vec::new();
        }

        let normalized_query = normalize(trimmed);
        let tokens = expand_query(&normalized_query, &self.synonyms);

        // Indexed parallel collect preserves input order, so the stable
        // tie-break below holds either way
        let mut scored: Vec<(u32, Product)> = if products.len() > PARALLEL_SCORE_THRESHOLD {
            products
                .into_par_iter()
                .map(|p| (score_product(&p, &normalized_query, &tokens), p))
                .collect()
        } else {
            products
                .into_iter()
                .map(|p| (score_product(&p, &normalized_query, &tokens), p))
                .collect()
        };

        scored.retain(|(score, _)| *score > 0);
        scored.sort_by(|a, b| b.0.cmp(&a.0));
        scored.into_iter().map(|(_, product)| product).collect()
    }
}

/// Score one product against the expanded query
fn score_product(product: &Product, normalized_query: &str, tokens: &[SearchToken]) -> u32 {
    let name = normalize(&product.name);
    let category = normalize(&product.category);
    let color = normalize(product.color.as_deref().unwrap_or(""));
    let material = normalize(product.material.as_deref().unwrap_or(""));

    let mut score = 0;

    if name.contains(normalized_query) {
        score += PHRASE_NAME_BONUS;
    }
    if category.contains(normalized_query) {
        score += PHRASE_CATEGORY_BONUS;
    }

    for token in tokens {
        let mut token_score = 0;
        if name.contains(&token.text) {
            token_score += TOKEN_NAME_BONUS;
        }
        if category.contains(&token.text) {
            token_score += TOKEN_CATEGORY_BONUS;
        }
        if color.contains(&token.text) {
            token_score += TOKEN_COLOR_BONUS;
        }
        if material.contains(&token.text) {
            token_score += TOKEN_MATERIAL_BONUS;
        }

        if token.synonym_derived {
            token_score = (f64::from(token_score) * SYNONYM_WEIGHT).ceil() as u32;
        }

        score += token_score;
    }

    score
}
