//! Order endpoints

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
use crate::types::{NewOrder, OrderStatus};

/// POST /api/orders - Create an order from a completed checkout
pub async fn create_order(
    State(state): State<Arc<AppState>>,
    Json(new): Json<NewOrder>,
) -> impl IntoResponse {
    if new.user_id.trim().is_empty() {
        let error = ApiError::bad_request("userId is required");
        return (StatusCode::BAD_REQUEST, Json(error)).into_response();
    }
    if new.items.is_empty() {
        let error = ApiError::bad_request("Order has no items");
        return (StatusCode::BAD_REQUEST, Json(error)).into_response();
    }

    match state.orders.create_order(new) {
        Ok(order) => (StatusCode::CREATED, Json(ApiResponse::new(order))).into_response(),
        Err(e) => {
            let error = ApiError::internal(e.to_string());
            (StatusCode::INTERNAL_SERVER_ERROR, Json(error)).into_response()
        }
    }
}

/// Query parameters for listing a user's orders
#[derive(Debug, Deserialize)]
pub struct UserOrdersParams {
    #[serde(rename = "userId", default)]
    pub user_id: String,
}

/// GET /api/orders - Order history for a user, newest first
pub async fn user_orders(
    State(state): State<Arc<AppState>>,
    Query(params): Query<UserOrdersParams>,
) -> impl IntoResponse {
    if params.user_id.trim().is_empty() {
        let error = ApiError::bad_request("Query parameter 'userId' is required");
        return (StatusCode::BAD_REQUEST, Json(error)).into_response();
    }

    match state.orders.user_orders(&params.user_id) {
        Ok(orders) => {
            let total = orders.len();
            (StatusCode::OK, Json(ApiResponse::with_total(orders, total))).into_response()
        }
        Err(e) => {
            let error = ApiError::internal(e.to_string());
            (StatusCode::INTERNAL_SERVER_ERROR, Json(error)).into_response()
        }
    }
}

/// Body for a return request
#[derive(Debug, Deserialize)]
pub struct ReturnRequestBody {
    #[serde(rename = "userId")]
    pub user_id: String,
    pub reason: String,
    #[serde(default)]
    pub details: String,
}

/// POST /api/orders/:id/return - File a return request
///
/// The order must exist and belong to the requesting user; anything else
/// reads as not found, so ownership is not probeable.
pub async fn create_return(
    State(state): State<Arc<AppState>>,
    Path(order_id): Path<String>,
    Json(body): Json<ReturnRequestBody>,
) -> impl IntoResponse {
    let owned = match state.orders.verify_order_owner(&order_id, &body.user_id) {
        Ok(owned) => owned,
        Err(e) => {
            let error = ApiError::internal(e.to_string());
            return (StatusCode::INTERNAL_SERVER_ERROR, Json(error)).into_response();
        }
    };

    if !owned {
        let error = ApiError::not_found(format!("Order '{}' not found", order_id));
        return (StatusCode::NOT_FOUND, Json(error)).into_response();
    }

    match state
        .orders
        .create_return_request(&order_id, &body.user_id, &body.reason, &body.details)
    {
        Ok(request) => (StatusCode::OK, Json(ApiResponse::new(request))).into_response(),
        Err(e) => {
            let error = ApiError::internal(e.to_string());
            (StatusCode::INTERNAL_SERVER_ERROR, Json(error)).into_response()
        }
    }
}

/// GET /api/admin/orders - Every order, newest first (admin)
pub async fn list_all_orders(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> impl IntoResponse {
    if let Err(rejection) = require_admin(&state, &headers) {
        return rejection.into_response();
    }

    match state.orders.all_orders() {
        Ok(orders) => {
            let total = orders.len();
            (StatusCode::OK, Json(ApiResponse::with_total(orders, total))).into_response()
        }
        Err(e) => {
            let error = ApiError::internal(e.to_string());
            (StatusCode::INTERNAL_SERVER_ERROR, Json(error)).into_response()
        }
    }
}

/// GET /api/admin/returns - Every recorded return request (admin)
pub async fn list_return_requests(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> impl IntoResponse {
    if let Err(rejection) = require_admin(&state, &headers) {
        return rejection.into_response();
    }

    match state.orders.return_requests() {
        Ok(requests) => {
            let total = requests.len();
            (
                StatusCode::OK,
                Json(ApiResponse::with_total(requests, total)),
            )
                .into_response()
        }
        Err(e) => {
            let error = ApiError::internal(e.to_string());
            (StatusCode::INTERNAL_SERVER_ERROR, Json(error)).into_response()
        }
    }
}

/// Body for attaching a shipping code
#[derive(Debug, Deserialize)]
pub struct ShippingBody {
    #[serde(rename = "shippingCode")]
    pub shipping_code: String,
}

/// PUT /api/admin/orders/:id/shipping - Attach shipping code, mark Shipped (admin)
pub async fn update_shipping(
    State(state): State<Arc<AppState>>,
    Path(order_id): Path<String>,
    headers: HeaderMap,
    Json(body): Json<ShippingBody>,
) -> impl IntoResponse {
    if let Err(rejection) = require_admin(&state, &headers) {
        return rejection.into_response();
    }

    match state
        .orders
        .update_shipping_code(&order_id, &body.shipping_code)
    {
        Ok(true) => StatusCode::NO_CONTENT.into_response(),
        Ok(false) => {
            let error = ApiError::not_found(format!("Order '{}' not found", order_id));
            (StatusCode::NOT_FOUND, Json(error)).into_response()
        }
        Err(e) => {
            let error = ApiError::internal(e.to_string());
            (StatusCode::INTERNAL_SERVER_ERROR, Json(error)).into_response()
        }
    }
}

/// Body for setting an order status
#[derive(Debug, Deserialize)]
pub struct StatusBody {
    pub status: OrderStatus,
}

/// PUT /api/admin/orders/:id/status - Set order status directly (admin)
pub async fn update_status(
    State(state): State<Arc<AppState>>,
    Path(order_id): Path<String>,
    headers: HeaderMap,
    Json(body): Json<StatusBody>,
) -> impl IntoResponse {
    if let Err(rejection) = require_admin(&state, &headers) {
        return rejection.into_response();
    }

    match state.orders.update_status(&order_id, body.status) {
        Ok(true) => StatusCode::NO_CONTENT.into_response(),
        Ok(false) => {
            let error = ApiError::not_found(format!("Order '{}' not found", order_id));
            (StatusCode::NOT_FOUND, Json(error)).into_response()
        }
        Err(e) => {
            let error = ApiError::internal(e.to_string());
            (StatusCode::INTERNAL_SERVER_ERROR, Json(error)).into_response()
        }
    }
}
