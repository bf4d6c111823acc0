//! Query operations for the product catalog

use crate::search::normalize;
use crate::types::{Product, StoreResult};
use crate::utils::time::current_timestamp;

use super::ProductStore;

/// Products added within this window count as new arrivals (~3 months)
const NEW_ARRIVAL_WINDOW_SECS: u64 = 90 * 24 * 60 * 60;

/// Get a single product by id
pub fn get_product(store: &ProductStore, id: &str) -> StoreResult<Option<Product>> {
    let catalog = store.load_catalog()?;
    Ok(catalog.products.into_iter().find(|p| p.id == id))
}

/// List products with optional pagination
pub fn list_products(
    store: &ProductStore,
    limit: Option<usize>,
    offset: Option<usize>,
) -> StoreResult<Vec<Product>> {
    let catalog = store.load_catalog()?;
    let offset = offset.unwrap_or(0);

    let products: Vec<Product> = if let Some(lim) = limit {
        catalog.products.into_iter().skip(offset).take(lim).collect()
    } else {
        catalog.products.into_iter().skip(offset).collect()
    };

    Ok(products)
}

/// Products in a category, compared diacritic-insensitively
///
/// "kupe" and "Küpe" address the same category.
pub fn products_by_category(store: &ProductStore, category: &str) -> StoreResult<Vec<Product>> {
    let wanted = normalize(category);
    let catalog = store.load_catalog()?;

    Ok(catalog
        .products
        .into_iter()
        .filter(|p| normalize(&p.category) == wanted)
        .collect())
}

/// Products created within the new-arrival window
///
/// Products without a creation timestamp are legacy seed entries and stay
/// included.
pub fn new_arrivals(store: &ProductStore) -> StoreResult<Vec<Product>> {
    let cutoff = current_timestamp().saturating_sub(NEW_ARRIVAL_WINDOW_SECS);
    let catalog = store.load_catalog()?;

    Ok(catalog
        .products
        .into_iter()
        .filter(|p| p.created_at == 0 || p.created_at >= cutoff)
        .collect())
}

/// Ranked fuzzy search over the catalog
///
/// Fetches a fresh catalog snapshot per call and hands it to the ranker; a
/// failing catalog read propagates to the caller unmodified.
pub fn search_products(store: &ProductStore, query_text: &str) -> StoreResult<Vec<Product>> {
    let catalog = store.load_catalog()?;
    Ok(store.ranker.rank(query_text, catalog.products))
}
