//! Data types for the Tini Store backend
//!
//! This module contains all the core data structures used throughout the application.

mod cart;
mod order;
mod product;

pub use cart::{Cart, CartItem};
pub use order::{NewOrder, Order, OrderItem, OrderStatus, ReturnRequest, ShippingAddress};
pub use product::{Catalog, NewProduct, Product};

/// Result type for store operations
pub type StoreResult<T> = Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Check if value is zero (for skip_serializing_if)
pub fn is_zero(val: &u64) -> bool {
    *val == 0
}
