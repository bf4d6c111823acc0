//! Shared application state

use std::sync::Arc;

use crate::auth::StoreAuth;
use crate::cart::CartStore;
use crate::catalog::ProductStore;
use crate::orders::OrderStore;

/// Shared state behind every API handler
pub struct AppState {
    /// The product catalog
    pub products: Arc<ProductStore>,

    /// Orders and return requests
    pub orders: Arc<OrderStore>,

    /// In-memory session carts
    pub carts: CartStore,

    /// Admin authentication
    pub auth: Arc<StoreAuth>,
}

impl AppState {
    /// Create a new AppState over the given stores
    pub fn new(products: Arc<ProductStore>, orders: Arc<OrderStore>, auth: Arc<StoreAuth>) -> Self {
        Self {
            products,
            orders,
            carts: CartStore::new(),
            auth,
        }
    }
}
