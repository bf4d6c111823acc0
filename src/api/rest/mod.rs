//! REST API module for HTTP endpoints
//!
//! Provides the storefront and back-office endpoints:
//! - `GET /api/products` - List products with pagination
//! - `GET /api/products/:id` - Get single product
//! - `GET /api/new-arrivals` - Recently added products
//! - `GET /api/search` - Ranked fuzzy product search
//! - `POST /api/orders`, `GET /api/orders` - Checkout and order history
//! - `GET/POST/PUT/DELETE /api/cart...` - Session cart
//! - `/api/admin/...` - Token-gated product and order management
//! - `POST /auth/login`, `POST /auth/refresh` - Admin tokens

pub mod auth;
pub mod cart;
pub mod orders;
pub mod products;
pub mod search;

use axum::http::{header, HeaderMap, StatusCode};
use axum::Json;
use serde::Serialize;

use crate::auth::Claims;

use super::state::AppState;

/// Standard API response wrapper
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    /// Response data
    pub data: T,
    /// Total count (for paginated responses)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<usize>,
}

impl<T> ApiResponse<T> {
    pub fn new(data: T) -> Self {
        Self { data, total: None }
    }

    pub fn with_total(data: T, total: usize) -> Self {
        Self {
            data,
            total: Some(total),
        }
    }
}

/// API error response
#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: String,
    pub code: String,
}

impl ApiError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
            code: "NOT_FOUND".to_string(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
            code: "BAD_REQUEST".to_string(),
        }
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
            code: "UNAUTHORIZED".to_string(),
        }
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
            code: "FORBIDDEN".to_string(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
            code: "INTERNAL_ERROR".to_string(),
        }
    }
}

/// Rejection type shared by the request guards
pub(crate) type Rejection = (StatusCode, Json<ApiError>);

/// Validate the bearer token and require the admin role
pub(crate) fn require_admin(state: &AppState, headers: &HeaderMap) -> Result<Claims, Rejection> {
    let auth_header = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| {
            (
                StatusCode::UNAUTHORIZED,
                Json(ApiError::unauthorized("Missing Authorization header")),
            )
        })?;

    let claims = state
        .auth
        .validate_authorization(auth_header)
        .map_err(|e| {
            (
                StatusCode::UNAUTHORIZED,
                Json(ApiError::unauthorized(e.to_string())),
            )
        })?;

    if !claims.is_admin() {
        return Err((
            StatusCode::FORBIDDEN,
            Json(ApiError::forbidden("Admin role required")),
        ));
    }

    Ok(claims)
}

/// Header carrying the cart session token
pub(crate) const SESSION_HEADER: &str = "x-session-id";

/// Extract the cart session token from request headers
pub(crate) fn session_id(headers: &HeaderMap) -> Result<String, Rejection> {
    headers
        .get(SESSION_HEADER)
        .and_then(|v| v.to_str().ok())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .ok_or_else(|| {
            (
                StatusCode::BAD_REQUEST,
                Json(ApiError::bad_request("Missing x-session-id header")),
            )
        })
}
