//! HTTP server setup with Axum

use std::sync::Arc;

use axum::{
    routing::{get, post, put},
    Router,
};
use tower_http::cors::{Any, CorsLayer};

use super::rest::{auth, cart, orders, products, search};
use super::state::AppState;

/// Create the Axum router with all endpoints
pub fn create_router(state: Arc<AppState>) -> Router {
    // CORS configuration - the storefront client runs on its own origin
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health check
        .route("/health", get(health_check))
        // Authentication
        .route("/auth/login", post(auth::login))
        .route("/auth/refresh", post(auth::refresh))
        // Storefront
        // New arrivals live beside /api/products, not under it: the
        // router cannot hold a static segment and :id at the same node
        .route("/api/products", get(products::list_products))
        .route("/api/new-arrivals", get(products::new_arrivals))
        .route("/api/products/:id", get(products::get_product))
        .route("/api/search", get(search::search_products))
        // Orders
        .route(
            "/api/orders",
            post(orders::create_order).get(orders::user_orders),
        )
        .route("/api/orders/:id/return", post(orders::create_return))
        // Session cart
        .route("/api/cart", get(cart::get_cart).delete(cart::clear_cart))
        .route("/api/cart/items", post(cart::add_item))
        .route(
            "/api/cart/items/:id",
            put(cart::update_quantity).delete(cart::remove_item),
        )
        // Admin back office
        .route("/api/admin/products", post(products::create_product))
        .route(
            "/api/admin/products/:id",
            put(products::update_product).delete(products::delete_product),
        )
        .route("/api/admin/orders", get(orders::list_all_orders))
        .route("/api/admin/returns", get(orders::list_return_requests))
        .route("/api/admin/orders/:id/shipping", put(orders::update_shipping))
        .route("/api/admin/orders/:id/status", put(orders::update_status))
        .layer(cors)
        .with_state(state)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::StoreAuth;
    use crate::catalog::{seed_products, ProductStore};
    use crate::orders::OrderStore;
    use crate::search::ProductRanker;
    use axum::body::Body;
    use axum::http::Request;
    use tower::util::ServiceExt;

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn test_state(dir: &tempfile::TempDir) -> Arc<AppState> {
        let products_path = dir
            .path()
            .join("products.jsonl")
            .to_string_lossy()
            .to_string();
        let orders_path = dir.path().join("orders.jsonl").to_string_lossy().to_string();

        let products = Arc::new(ProductStore::with_seed(
            products_path,
            seed_products(),
            ProductRanker::default(),
        ));
        let orders = Arc::new(OrderStore::with_file_path(orders_path));
        let auth = Arc::new(StoreAuth::new(
            "test-secret-key-that-is-at-least-32-characters-long",
        ));

        Arc::new(AppState::new(products, orders, auth))
    }

    #[tokio::test]
    async fn test_health_check() {
        let dir = tempfile::tempdir().unwrap();
        let app = create_router(test_state(&dir));

        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), 200);
    }

    #[tokio::test]
    async fn test_search_finds_seed_products() {
        let dir = tempfile::tempdir().unwrap();
        let app = create_router(test_state(&dir));

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/search?q=kolye")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), 200);

        let json = body_json(response).await;
        assert!(json["total"].as_u64().unwrap() > 0);
    }

    #[tokio::test]
    async fn test_short_query_is_empty_not_error() {
        let dir = tempfile::tempdir().unwrap();
        let app = create_router(test_state(&dir));

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/search?q=a")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), 200);

        let json = body_json(response).await;
        assert_eq!(json["total"].as_u64(), Some(0));
    }

    #[tokio::test]
    async fn test_admin_requires_token() {
        let dir = tempfile::tempdir().unwrap();
        let app = create_router(test_state(&dir));

        let response = app
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri("/api/admin/products/seed-1")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), 401);
    }

    #[tokio::test]
    async fn test_cart_requires_session_header() {
        let dir = tempfile::tempdir().unwrap();
        let app = create_router(test_state(&dir));

        let response = app
            .oneshot(Request::builder().uri("/api/cart").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), 400);
    }

    #[tokio::test]
    async fn test_new_arrivals_route() {
        let dir = tempfile::tempdir().unwrap();
        let app = create_router(test_state(&dir));

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/new-arrivals")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), 200);

        // Seed products carry no timestamp and count as legacy arrivals
        let json = body_json(response).await;
        assert_eq!(
            json["total"].as_u64(),
            Some(seed_products().len() as u64)
        );
    }

    #[tokio::test]
    async fn test_list_products_sorted_by_price() {
        let dir = tempfile::tempdir().unwrap();
        let app = create_router(test_state(&dir));

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/products?sort=price&order=asc")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), 200);

        let json = body_json(response).await;
        let prices: Vec<f64> = json["data"]
            .as_array()
            .unwrap()
            .iter()
            .map(|p| p["price"].as_f64().unwrap())
            .collect();

        assert_eq!(prices.len(), seed_products().len());
        assert!(prices.windows(2).all(|w| w[0] <= w[1]));
    }

    #[tokio::test]
    async fn test_list_products_sorted_by_name_desc() {
        let dir = tempfile::tempdir().unwrap();
        let app = create_router(test_state(&dir));

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/products?sort=name&order=desc")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), 200);

        let json = body_json(response).await;
        let names: Vec<String> = json["data"]
            .as_array()
            .unwrap()
            .iter()
            .map(|p| p["name"].as_str().unwrap().to_string())
            .collect();

        assert_eq!(names.len(), seed_products().len());
        assert!(names.windows(2).all(|w| w[0] >= w[1]));
    }
}
