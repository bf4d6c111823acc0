//! Tini Store backend
//!
//! The backend service for a direct-to-consumer jewelry storefront,
//! using pure Rust with a small, focused dependency set.
//!
//! # Features
//!
//! - **Ranked Search**: Fuzzy product search with Turkish diacritic
//!   folding, synonym expansion, and weighted substring scoring
//! - **Catalog**: File-backed product store with seed merge and CRUD
//! - **Orders**: Status lifecycle from checkout to delivery or return
//! - **Carts**: In-memory session carts
//! - **Admin**: JWT-gated back office for products and orders
//!
//! # Modules
//!
//! - `types`: Core data structures (Product, Order, Cart)
//! - `search`: Normalization, synonym expansion, and the ranker
//! - `catalog`: Product store engine
//! - `orders`: Order store engine
//! - `cart`: Session cart store
//! - `auth`: JWT authentication for the admin surface
//! - `validation`: Soft taxonomy validation
//! - `api`: Axum REST surface
//! - `utils`: Utility functions (timestamps, ids)
//!
//! # Example
//!
//! ```no_run
//! use tini_store::catalog::ProductStore;
//!
//! fn main() {
//!     let store = ProductStore::new();
//!     let hits = store.search_products("altin kolye").unwrap();
//!     for product in hits {
//!         println!("{} - {}", product.name, product.price);
//!     }
//! }
//! ```

pub mod api;
pub mod auth;
pub mod cart;
pub mod catalog;
pub mod orders;
pub mod search;
pub mod types;
pub mod utils;
pub mod validation;

// Re-export commonly used items at crate root
pub use auth::{Claims, StoreAuth, TokenPair};
pub use cart::CartStore;
pub use catalog::ProductStore;
pub use orders::OrderStore;
pub use search::{ProductRanker, SynonymTable};
pub use types::{
    Cart, CartItem, Catalog, NewOrder, NewProduct, Order, OrderItem, OrderStatus, Product,
    ReturnRequest, ShippingAddress, StoreResult,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
