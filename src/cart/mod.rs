//! Session cart store
//!
//! Carts are keyed by an opaque session token and held in memory only,
//! standing in for the browser-local cart of the storefront UI. Nothing is
//! persisted; an abandoned session simply ages out with the process.

use std::collections::HashMap;

use parking_lot::RwLock;

use crate::types::Cart;

/// Thread-safe map of session token to cart
#[derive(Default)]
pub struct CartStore {
    carts: RwLock<HashMap<String, Cart>>,
}

impl CartStore {
    /// Create an empty cart store
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of a session's cart (a new session gets an empty cart)
    pub fn get(&self, session: &str) -> Cart {
        self.carts.read().get(session).cloned().unwrap_or_default()
    }

    /// Add one unit of a product to the session's cart
    pub fn add_item(&self, session: &str, id: &str, name: &str, price: f64, image: &str) -> Cart {
        let mut carts = self.carts.write();
        let cart = carts.entry(session.to_string()).or_default();
        cart.add_item(id, name, price, image);
        cart.clone()
    }

    /// Remove a line from the session's cart
    pub fn remove_item(&self, session: &str, id: &str) -> Cart {
        let mut carts = self.carts.write();
        let cart = carts.entry(session.to_string()).or_default();
        cart.remove_item(id);
        cart.clone()
    }

    /// Set a line's quantity in the session's cart
    pub fn update_quantity(&self, session: &str, id: &str, quantity: u32) -> Cart {
        let mut carts = self.carts.write();
        let cart = carts.entry(session.to_string()).or_default();
        cart.update_quantity(id, quantity);
        cart.clone()
    }

    /// Drop a session's cart entirely (checkout completed)
    pub fn clear(&self, session: &str) {
        self.carts.write().remove(session);
    }

    /// Number of live sessions
    pub fn session_count(&self) -> usize {
        self.carts.read().len()
    }
}
