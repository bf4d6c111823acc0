//! Product catalog - core data engine
//!
//! This module contains the file-backed product store with thread-safe
//! CRUD operations, catalog queries, and the ranked search entry point.

mod crud;
mod query;
mod seed;

use std::env;
use std::fs;
use std::path::Path;
use std::sync::Mutex;

use crate::search::ProductRanker;
use crate::types::{Catalog, NewProduct, Product, StoreResult};

pub use seed::seed_products;

/// Product store with an in-memory catalog for thread-safe operations
pub struct ProductStore {
    pub(crate) file_path: String,
    pub(crate) catalog: Mutex<Catalog>,
    pub(crate) ranker: ProductRanker,
}

impl ProductStore {
    /// Create a new product store instance
    ///
    /// The catalog file path comes from `STORE_PRODUCTS_PATH`, defaulting
    /// to `products.jsonl` in the working directory.
    pub fn new() -> Self {
        let current_dir = env::current_dir().unwrap_or_else(|_| std::path::PathBuf::from("."));
        let default_path = current_dir.join("products.jsonl");

        let file_path = match env::var("STORE_PRODUCTS_PATH") {
            Ok(path) => {
                if Path::new(&path).is_absolute() {
                    path
                } else {
                    current_dir.join(path).to_string_lossy().to_string()
                }
            }
            Err(_) => default_path.to_string_lossy().to_string(),
        };

        Self::with_file_path(file_path)
    }

    /// Create a product store with a custom file path
    pub fn with_file_path(file_path: String) -> Self {
        Self::with_seed(file_path, seed_products(), ProductRanker::default())
    }

    /// Create a product store with explicit seed products and ranker
    ///
    /// The seed list is merged with whatever the catalog file holds; the
    /// ranker carries the synonym table used by [`ProductStore::search_products`].
    pub fn with_seed(file_path: String, seed: Vec<Product>, ranker: ProductRanker) -> Self {
        let stored = Self::load_products_from_file(&file_path).unwrap_or_default();
        let catalog = Catalog {
            products: merge_with_seed(seed, stored),
        };

        Self {
            file_path,
            catalog: Mutex::new(catalog),
            ranker,
        }
    }

    /// Load persisted products from file (static helper for initialization)
    fn load_products_from_file(file_path: &str) -> StoreResult<Vec<Product>> {
        if !Path::new(file_path).exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(file_path)?;
        let mut products = Vec::new();

        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            if let Ok(product) = serde_json::from_str::<Product>(line) {
                if !product.id.is_empty() && !product.name.is_empty() {
                    products.push(product);
                }
            }
        }

        Ok(products)
    }

    /// Get a clone of the current catalog (thread-safe read)
    pub(crate) fn load_catalog(&self) -> StoreResult<Catalog> {
        Ok(self.catalog.lock().unwrap().clone())
    }

    /// Persist the catalog to file (internal helper, expects caller to hold lock)
    pub(crate) fn persist_to_file(&self, catalog: &Catalog) -> StoreResult<()> {
        if let Some(parent) = Path::new(&self.file_path).parent() {
            fs::create_dir_all(parent)?;
        }

        let mut content = String::new();
        for product in &catalog.products {
            content.push_str(&serde_json::to_string(product)?);
            content.push('\n');
        }

        fs::write(&self.file_path, content)?;
        Ok(())
    }

    /// Get the catalog file path
    pub fn file_path(&self) -> &str {
        &self.file_path
    }

    /// Number of products currently served
    pub fn product_count(&self) -> usize {
        self.catalog.lock().unwrap().product_count()
    }
}

impl Default for ProductStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Merge seed products with the persisted catalog
///
/// Persisted products win on id collisions and keep their file order
/// (newest-first, the order the store persists in); seed-only items are
/// appended after them. A second load of the same file reproduces the same
/// order.
fn merge_with_seed(seed: Vec<Product>, stored: Vec<Product>) -> Vec<Product> {
    let mut merged = stored;

    for product in seed {
        if !merged.iter().any(|p| p.id == product.id) {
            merged.push(product);
        }
    }

    merged
}

// Re-export methods from submodules by implementing them here
impl ProductStore {
    // CRUD operations (from crud.rs)
    pub fn add_product(&self, new: NewProduct) -> StoreResult<Product> {
        crud::add_product(self, new)
    }

    pub fn update_product(&self, product: Product) -> StoreResult<Product> {
        crud::update_product(self, product)
    }

    pub fn delete_product(&self, id: &str) -> StoreResult<bool> {
        crud::delete_product(self, id)
    }

    // Query operations (from query.rs)
    pub fn get_product(&self, id: &str) -> StoreResult<Option<Product>> {
        query::get_product(self, id)
    }

    pub fn list_products(
        &self,
        limit: Option<usize>,
        offset: Option<usize>,
    ) -> StoreResult<Vec<Product>> {
        query::list_products(self, limit, offset)
    }

    pub fn products_by_category(&self, category: &str) -> StoreResult<Vec<Product>> {
        query::products_by_category(self, category)
    }

    pub fn new_arrivals(&self) -> StoreResult<Vec<Product>> {
        query::new_arrivals(self)
    }

    // Search (from query.rs, backed by crate::search)
    pub fn search_products(&self, query_text: &str) -> StoreResult<Vec<Product>> {
        query::search_products(self, query_text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seed_item(id: &str, name: &str) -> Product {
        Product::new(
            id.to_string(),
            name.to_string(),
            100.0,
            "Kolye".to_string(),
            String::new(),
        )
    }

    #[test]
    fn test_merge_persisted_wins_on_collision() {
        let seed = vec![seed_item("1", "Eski Kolye"), seed_item("2", "Bileklik")];
        let mut updated = seed_item("1", "Yeni Kolye");
        updated.price = 999.0;

        let merged = merge_with_seed(seed, vec![updated]);
        let kolye = merged.iter().find(|p| p.id == "1").unwrap();
        assert_eq!(kolye.name, "Yeni Kolye");
        assert_eq!(merged.len(), 2);
    }

    #[test]
    fn test_merge_keeps_file_order_then_seed() {
        let seed = vec![seed_item("1", "Kolye")];
        // File order is newest-first, the order the store persists in
        let stored = vec![seed_item("3", "Yüzük"), seed_item("2", "Bileklik")];

        let merged = merge_with_seed(seed, stored);
        let ids: Vec<&str> = merged.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["3", "2", "1"]);
    }
}
