//! CRUD operations for the product catalog

use crate::types::{NewProduct, Product, StoreResult};
use crate::utils::id::generate_id;
use crate::utils::time::current_timestamp;

use super::ProductStore;

/// Add a new product (thread-safe: holds write lock during entire operation)
pub fn add_product(store: &ProductStore, new: NewProduct) -> StoreResult<Product> {
    let mut catalog = store.catalog.lock().unwrap();

    let product = Product {
        id: generate_id("p"),
        name: new.name,
        price: new.price,
        category: new.category,
        image: new.image,
        images: new.images,
        description: new.description,
        color: new.color,
        material: new.material,
        stock: new.stock,
        cost_price: new.cost_price,
        created_at: current_timestamp(),
    };

    // Catalog is served newest-first
    catalog.products.insert(0, product.clone());

    store.persist_to_file(&catalog)?;
    Ok(product)
}

/// Replace an existing product, keeping its original creation time
pub fn update_product(store: &ProductStore, mut product: Product) -> StoreResult<Product> {
    let mut catalog = store.catalog.lock().unwrap();

    let existing = catalog
        .products
        .iter_mut()
        .find(|p| p.id == product.id)
        .ok_or_else(|| format!("Product '{}' not found", product.id))?;

    if product.created_at == 0 {
        product.created_at = existing.created_at;
    }
    *existing = product.clone();

    store.persist_to_file(&catalog)?;
    Ok(product)
}

/// Delete a product by id; returns whether anything was removed
pub fn delete_product(store: &ProductStore, id: &str) -> StoreResult<bool> {
    let mut catalog = store.catalog.lock().unwrap();

    let before = catalog.products.len();
    catalog.products.retain(|p| p.id != id);
    let removed = catalog.products.len() != before;

    if removed {
        store.persist_to_file(&catalog)?;
    }
    Ok(removed)
}
