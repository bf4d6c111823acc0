//! Search endpoint

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use super::{ApiError, ApiResponse};
use crate::api::state::AppState;

/// Query parameters for search
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    /// Search query string
    #[serde(default)]
    pub q: String,
    /// Maximum number of results (0 = unlimited)
    #[serde(default)]
    pub limit: usize,
}

/// GET /api/search - Ranked fuzzy product search
///
/// Runs the synonym-aware ranker over the catalog. A missing or too-short
/// query is not an error; it yields an empty result set by design.
pub async fn search_products(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> impl IntoResponse {
    match state.products.search_products(&params.q) {
        Ok(mut results) => {
            if params.limit > 0 {
                results.truncate(params.limit.min(1000));
            }
            let total = results.len();
            (
                StatusCode::OK,
                Json(ApiResponse::with_total(results, total)),
            )
                .into_response()
        }
        Err(e) => {
            let error = ApiError::internal(e.to_string());
            (StatusCode::INTERNAL_SERVER_ERROR, Json(error)).into_response()
        }
    }
}
