//! Authentication endpoints

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::Deserialize;

use super::ApiError;
use crate::api::state::AppState;

/// Body for a login request
#[derive(Debug, Deserialize)]
pub struct LoginBody {
    pub username: String,
    pub password: String,
}

/// POST /auth/login - Exchange credentials for a token pair
pub async fn login(
    State(state): State<Arc<AppState>>,
    Json(body): Json<LoginBody>,
) -> impl IntoResponse {
    let user = match state.auth.authenticate(&body.username, &body.password) {
        Ok(user) => user,
        Err(_) => {
            let error = ApiError::unauthorized("Invalid username or password");
            return (StatusCode::UNAUTHORIZED, Json(error)).into_response();
        }
    };

    match state.auth.generate_tokens(user) {
        Ok(tokens) => (StatusCode::OK, Json(tokens)).into_response(),
        Err(e) => {
            let error = ApiError::internal(e.to_string());
            (StatusCode::INTERNAL_SERVER_ERROR, Json(error)).into_response()
        }
    }
}

/// Body for a refresh request
#[derive(Debug, Deserialize)]
pub struct RefreshBody {
    #[serde(rename = "refreshToken")]
    pub refresh_token: String,
}

/// POST /auth/refresh - Trade a refresh token for a fresh pair
pub async fn refresh(
    State(state): State<Arc<AppState>>,
    Json(body): Json<RefreshBody>,
) -> impl IntoResponse {
    match state.auth.refresh_access_token(&body.refresh_token) {
        Ok(tokens) => (StatusCode::OK, Json(tokens)).into_response(),
        Err(e) => {
            let error = ApiError::unauthorized(e.to_string());
            (StatusCode::UNAUTHORIZED, Json(error)).into_response()
        }
    }
}
