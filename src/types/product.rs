//! Product types for the storefront catalog

use serde::{Deserialize, Serialize};

use super::is_zero;

/// A product in the catalog
///
/// Only `id` and `name` are guaranteed present; optional fields are treated
/// as empty strings by the search ranker.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub image: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub material: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stock: Option<u32>,
    #[serde(
        rename = "costPrice",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub cost_price: Option<f64>,
    #[serde(rename = "createdAt", default, skip_serializing_if = "is_zero")]
    pub created_at: u64,
}

impl Product {
    /// Create a new product with default values for the optional fields
    pub fn new(id: String, name: String, price: f64, category: String, image: String) -> Self {
        Self {
            id,
            name,
            price,
            category,
            image,
            images: Vec::new(),
            description: None,
            color: None,
            material: None,
            stock: None,
            cost_price: None,
            created_at: 0,
        }
    }
}

/// Payload for creating a product; id and creation time are assigned by the store
#[derive(Debug, Clone, Deserialize)]
pub struct NewProduct {
    pub name: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub material: Option<String>,
    #[serde(default)]
    pub stock: Option<u32>,
    #[serde(rename = "costPrice", default)]
    pub cost_price: Option<f64>,
}

/// Catalog container holding every product the store serves
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Catalog {
    #[serde(default)]
    pub products: Vec<Product>,
}

impl Catalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Get the number of products
    pub fn product_count(&self) -> usize {
        self.products.len()
    }
}
