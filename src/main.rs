//! Tini Store - Binary Entry Point
//!
//! This is the main entry point for the store-server binary.

use std::sync::Arc;

use tini_store::api::http::create_router;
use tini_store::api::state::AppState;
use tini_store::auth::StoreAuth;
use tini_store::catalog::ProductStore;
use tini_store::orders::OrderStore;
use tini_store::types::StoreResult;

#[tokio::main]
async fn main() -> StoreResult<()> {
    let products = Arc::new(ProductStore::new());
    let orders = Arc::new(OrderStore::new());
    let auth = Arc::new(StoreAuth::from_env()?);

    eprintln!(
        "[Server] Serving {} products from {}",
        products.product_count(),
        products.file_path()
    );

    let state = Arc::new(AppState::new(products, orders, auth));
    let app = create_router(state);

    let addr = std::env::var("STORE_BIND").unwrap_or_else(|_| "0.0.0.0:3030".to_string());
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    eprintln!("[Server] Listening on {}", addr);

    // Ctrl+C / SIGTERM stops the accept loop; in-flight requests finish
    let (shutdown_tx, mut shutdown_rx) = tokio::sync::mpsc::channel::<()>(1);
    ctrlc::set_handler(move || {
        let _ = shutdown_tx.try_send(());
    })?;

    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            let _ = shutdown_rx.recv().await;
            eprintln!("[Server] Shutting down");
        })
        .await?;

    Ok(())
}
