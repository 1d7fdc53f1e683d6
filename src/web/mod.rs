//! Web UI for newsbrief
//!
//! A single-page form backed by one JSON endpoint.

use anyhow::{Context, Result};
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;

mod handlers;
mod state;

pub use state::AppState;

pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/summarize", post(handlers::summarize))
        .layer(CorsLayer::permissive())
        .with_state(Arc::new(state))
}

/// Bind and serve the web UI until the process is stopped.
pub async fn serve(state: AppState, host: &str, port: u16) -> Result<()> {
    let app = create_app(state);

    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    tracing::info!("Serving newsbrief UI on http://{}", addr);

    axum::serve(listener, app)
        .await
        .context("Web server terminated unexpectedly")?;

    Ok(())
}
