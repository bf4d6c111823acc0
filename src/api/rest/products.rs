//! Product endpoints

use std::cmp::Ordering;
use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use super::{require_admin, ApiError, ApiResponse};
use crate::api::state::AppState;
use crate::search::normalize;
use crate::types::{NewProduct, Product};
use crate::validation::{validate_category, validate_material};

/// Query parameters for listing products
#[derive(Debug, Deserialize)]
pub struct ListProductsParams {
    /// Maximum number of products to return
    #[serde(default = "default_limit")]
    pub limit: usize,
    /// Number of products to skip
    #[serde(default)]
    pub offset: usize,
    /// Filter by category (diacritic-insensitive)
    pub category: Option<String>,
    /// Sort by field (createdAt, name, price)
    #[serde(default = "default_sort")]
    pub sort: String,
    /// Sort order (asc, desc)
    #[serde(default = "default_order")]
    pub order: String,
}

fn default_limit() -> usize {
    100
}

fn default_sort() -> String {
    "createdAt".to_string()
}

fn default_order() -> String {
    "desc".to_string()
}

/// GET /api/products - List products with pagination
pub async fn list_products(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListProductsParams>,
) -> impl IntoResponse {
    let all = match state.products.list_products(None, None) {
        Ok(products) => products,
        Err(e) => {
            let error = ApiError::internal(e.to_string());
            return (StatusCode::INTERNAL_SERVER_ERROR, Json(error)).into_response();
        }
    };

    // Filter by category if specified
    let mut products: Vec<Product> = if let Some(ref category) = params.category {
        let wanted = normalize(category);
        all.into_iter()
            .filter(|p| normalize(&p.category) == wanted)
            .collect()
    } else {
        all
    };

    let total = products.len();

    // Sort
    match params.sort.as_str() {
        "name" => {
            if params.order == "desc" {
                products.sort_by(|a, b| b.name.cmp(&a.name));
            } else {
                products.sort_by(|a, b| a.name.cmp(&b.name));
            }
        }
        "price" => {
            if params.order == "desc" {
                products.sort_by(|a, b| b.price.partial_cmp(&a.price).unwrap_or(Ordering::Equal));
            } else {
                products.sort_by(|a, b| a.price.partial_cmp(&b.price).unwrap_or(Ordering::Equal));
            }
        }
        _ => {
            // Default: sort by creation time
            if params.order == "asc" {
                products.sort_by(|a, b| a.created_at.cmp(&b.created_at));
            } else {
                products.sort_by(|a, b| b.created_at.cmp(&a.created_at));
            }
        }
    }

    // Pagination
    let limit = params.limit.min(1000);
    let products: Vec<Product> = products.into_iter().skip(params.offset).take(limit).collect();

    Json(ApiResponse::with_total(products, total)).into_response()
}

/// GET /api/new-arrivals - Products added in the last three months
pub async fn new_arrivals(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    match state.products.new_arrivals() {
        Ok(products) => {
            let total = products.len();
            Json(ApiResponse::with_total(products, total)).into_response()
        }
        Err(e) => {
            let error = ApiError::internal(e.to_string());
            (StatusCode::INTERNAL_SERVER_ERROR, Json(error)).into_response()
        }
    }
}

/// GET /api/products/:id - Get single product
pub async fn get_product(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    // URL decode the id (handles ids pasted with encoded chars)
    let decoded_id = urlencoding::decode(&id)
        .unwrap_or_else(|_| id.clone().into())
        .into_owned();

    match state.products.get_product(&decoded_id) {
        Ok(Some(product)) => (StatusCode::OK, Json(ApiResponse::new(product))).into_response(),
        Ok(None) => {
            let error = ApiError::not_found(format!("Product '{}' not found", decoded_id));
            (StatusCode::NOT_FOUND, Json(error)).into_response()
        }
        Err(e) => {
            let error = ApiError::internal(e.to_string());
            (StatusCode::INTERNAL_SERVER_ERROR, Json(error)).into_response()
        }
    }
}

/// Log taxonomy warnings for a product payload
fn warn_on_taxonomy(category: &str, material: Option<&str>) {
    if let Some(warning) = validate_category(category) {
        eprintln!("[Catalog] {}", warning);
    }
    if let Some(warning) = material.and_then(validate_material) {
        eprintln!("[Catalog] {}", warning);
    }
}

/// POST /api/admin/products - Create a product (admin)
pub async fn create_product(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(new): Json<NewProduct>,
) -> impl IntoResponse {
    if let Err(rejection) = require_admin(&state, &headers) {
        return rejection.into_response();
    }

    if new.name.trim().is_empty() {
        let error = ApiError::bad_request("Product name is required");
        return (StatusCode::BAD_REQUEST, Json(error)).into_response();
    }

    warn_on_taxonomy(&new.category, new.material.as_deref());

    match state.products.add_product(new) {
        Ok(product) => (StatusCode::CREATED, Json(ApiResponse::new(product))).into_response(),
        Err(e) => {
            let error = ApiError::internal(e.to_string());
            (StatusCode::INTERNAL_SERVER_ERROR, Json(error)).into_response()
        }
    }
}

/// PUT /api/admin/products/:id - Update a product (admin)
pub async fn update_product(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    headers: HeaderMap,
    Json(mut product): Json<Product>,
) -> impl IntoResponse {
    if let Err(rejection) = require_admin(&state, &headers) {
        return rejection.into_response();
    }

    // The path id is authoritative
    product.id = id;

    warn_on_taxonomy(&product.category, product.material.as_deref());

    match state.products.update_product(product) {
        Ok(updated) => (StatusCode::OK, Json(ApiResponse::new(updated))).into_response(),
        Err(e) => {
            let error = ApiError::not_found(e.to_string());
            (StatusCode::NOT_FOUND, Json(error)).into_response()
        }
    }
}

/// DELETE /api/admin/products/:id - Delete a product (admin)
pub async fn delete_product(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> impl IntoResponse {
    if let Err(rejection) = require_admin(&state, &headers) {
        return rejection.into_response();
    }

    match state.products.delete_product(&id) {
        Ok(true) => StatusCode::NO_CONTENT.into_response(),
        Ok(false) => {
            let error = ApiError::not_found(format!("Product '{}' not found", id));
            (StatusCode::NOT_FOUND, Json(error)).into_response()
        }
        Err(e) => {
            let error = ApiError::internal(e.to_string());
            (StatusCode::INTERNAL_SERVER_ERROR, Json(error)).into_response()
        }
    }
}
