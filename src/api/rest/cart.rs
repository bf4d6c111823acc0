//! Session cart endpoints
//!
//! Every cart call carries an opaque session token in the `x-session-id`
//! header; the storefront client generates it once and keeps it in local
//! storage.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};

use super::{session_id, ApiResponse};
use crate::api::state::AppState;
use crate::types::{Cart, CartItem};

/// Cart snapshot with derived totals
#[derive(Debug, Serialize)]
pub struct CartView {
    pub items: Vec<CartItem>,
    #[serde(rename = "totalItems")]
    pub total_items: u32,
    #[serde(rename = "totalPrice")]
    pub total_price: f64,
}

impl From<Cart> for CartView {
    fn from(cart: Cart) -> Self {
        Self {
            total_items: cart.total_items(),
            total_price: cart.total_price(),
            items: cart.items,
        }
    }
}

/// GET /api/cart - Current cart for the session
pub async fn get_cart(State(state): State<Arc<AppState>>, headers: HeaderMap) -> impl IntoResponse {
    let session = match session_id(&headers) {
        Ok(session) => session,
        Err(rejection) => return rejection.into_response(),
    };

    let view = CartView::from(state.carts.get(&session));
    Json(ApiResponse::new(view)).into_response()
}

/// Body for adding a product to the cart
#[derive(Debug, Deserialize)]
pub struct AddItemBody {
    pub id: String,
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub image: String,
}

/// POST /api/cart/items - Add one unit of a product
pub async fn add_item(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(body): Json<AddItemBody>,
) -> impl IntoResponse {
    let session = match session_id(&headers) {
        Ok(session) => session,
        Err(rejection) => return rejection.into_response(),
    };

    let cart = state
        .carts
        .add_item(&session, &body.id, &body.name, body.price, &body.image);
    Json(ApiResponse::new(CartView::from(cart))).into_response()
}

/// Body for setting a line's quantity
#[derive(Debug, Deserialize)]
pub struct QuantityBody {
    pub quantity: u32,
}

/// PUT /api/cart/items/:id - Set a line's quantity (0 removes it)
pub async fn update_quantity(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    headers: HeaderMap,
    Json(body): Json<QuantityBody>,
) -> impl IntoResponse {
    let session = match session_id(&headers) {
        Ok(session) => session,
        Err(rejection) => return rejection.into_response(),
    };

    let cart = state.carts.update_quantity(&session, &id, body.quantity);
    Json(ApiResponse::new(CartView::from(cart))).into_response()
}

/// DELETE /api/cart/items/:id - Remove a line
pub async fn remove_item(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> impl IntoResponse {
    let session = match session_id(&headers) {
        Ok(session) => session,
        Err(rejection) => return rejection.into_response(),
    };

    let cart = state.carts.remove_item(&session, &id);
    Json(ApiResponse::new(CartView::from(cart))).into_response()
}

/// DELETE /api/cart - Drop the whole cart (checkout completed)
pub async fn clear_cart(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> impl IntoResponse {
    let session = match session_id(&headers) {
        Ok(session) => session,
        Err(rejection) => return rejection.into_response(),
    };

    state.carts.clear(&session);
    StatusCode::NO_CONTENT.into_response()
}
