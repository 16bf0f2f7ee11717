//! HTTP server setup with Axum

use std::sync::Arc;

use axum::{routing::get, Router};
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};

use super::rest::{deals, participants, search, stats};
use super::state::AppState;

/// Create the Axum router with all endpoints
pub fn create_router(state: Arc<AppState>) -> Router {
    // Read-only data, any origin may fetch it
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health check
        .route("/health", get(health_check))
        // REST API endpoints
        .route("/api/deals", get(deals::list_deals))
        .route("/api/deals/recent", get(deals::recent_deals))
        .route("/api/deals/type/:type", get(deals::deals_by_type))
        .route("/api/deals/:id", get(deals::get_deal))
        .route("/api/search", get(search::search_deals))
        .route("/api/participants", get(participants::list_participants))
        .route(
            "/api/participants/:identifier/deals",
            get(participants::participant_deals),
        )
        .route("/api/stats", get(stats::get_stats))
        .layer(cors)
        .with_state(state)
}

/// Bind a listener on a host name or IP address
pub async fn bind(host: &str, port: u16) -> std::io::Result<TcpListener> {
    let listener = TcpListener::bind((host, port)).await?;
    log::info!("Listening on http://{}", listener.local_addr()?);
    Ok(listener)
}

/// Serve on the bound listener until Ctrl+C
pub async fn serve(state: Arc<AppState>, listener: TcpListener) -> std::io::Result<()> {
    let app = create_router(state);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("Failed to listen for shutdown signal: {}", e);
        return;
    }
    log::info!("Shutdown signal received, stopping server");
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
