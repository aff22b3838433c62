//! Router setup with all API routes and middleware.
//!
//! Configures the axum Router with CORS, tracing, compression and a body
//! size limit in front of the endpoint handlers.

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use guardian_core::{GuardianError, Result};

use crate::handlers;
use crate::state::AppState;

/// Maximum accepted request body.
pub const BODY_LIMIT_BYTES: usize = 64 * 1024;

/// Create the axum Router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    // The API is open to any origin, method and header.
    let cors = CorsLayer::permissive();

    let api_routes = Router::new()
        .route("/query", post(handlers::query))
        .route("/history", get(handlers::history))
        .route("/health", get(handlers::health))
        .route("/datasets", get(handlers::datasets));

    Router::new()
        .route("/", get(handlers::index))
        .nest("/api", api_routes)
        .layer(DefaultBodyLimit::max(BODY_LIMIT_BYTES))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Bind to the configured host and port and serve until shutdown.
pub async fn start_server(state: AppState) -> Result<()> {
    let addr = format!("{}:{}", state.config.general.host, state.config.general.port);
    let router = create_router(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| GuardianError::Api(format!("Failed to bind {}: {}", addr, e)))?;

    tracing::info!(%addr, "ClimateGuardian API listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| GuardianError::Api(format!("Server error: {}", e)))?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
