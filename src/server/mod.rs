//! HTTP query service
//!
//! # Routes
//! - `GET /words/{letters}`: JSON array of matching words, highest score first
//! - `GET /words`, `GET /words/`: an empty array (no letters, no words)
//! - `GET /health`: engine name and vocabulary size
//!
//! Handlers only read the frozen index behind [`SharedFinder`], so any number
//! of requests can be served concurrently.

use crate::finder::{SharedFinder, WordFinder};
use axum::{
    Json, Router,
    extract::{Path, State},
    routing::get,
};
use serde::Serialize;
use std::sync::Arc;
use tokio::net::TcpListener;

/// Application state injected into handlers
#[derive(Clone)]
pub struct AppState {
    pub finder: Arc<SharedFinder>,
}

impl AppState {
    #[must_use]
    pub fn new(finder: SharedFinder) -> Self {
        Self {
            finder: Arc::new(finder),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub engine: &'static str,
    pub words: usize,
}

/// Build the router with every route
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/words/{letters}", get(find_words))
        .route("/words", get(no_letters))
        .route("/words/", get(no_letters))
        .route("/health", get(health))
        .with_state(state)
}

/// Serve on `listener` until Ctrl+C
///
/// # Errors
///
/// Returns an error if the listener address cannot be read or the server fails.
pub async fn run(listener: TcpListener, state: AppState) -> Result<(), std::io::Error> {
    let addr = listener.local_addr()?;
    let stats = state.finder.stats();
    tracing::info!(
        address = %addr,
        engine = state.finder.snapshot().name(),
        words = stats.words_added,
        "HTTP server starting"
    );

    axum::serve(listener, build_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("HTTP server stopped");
    Ok(())
}

async fn find_words(
    State(state): State<AppState>,
    Path(letters): Path<String>,
) -> Json<Vec<String>> {
    let matches = state.finder.find_matches(&letters);
    tracing::debug!(letters = %letters, found = matches.len(), "served query");
    Json(matches)
}

async fn no_letters() -> Json<Vec<String>> {
    Json(Vec::new())
}

async fn health(State(state): State<AppState>) -> Json<HealthStatus> {
    let finder = state.finder.snapshot();
    Json(HealthStatus {
        status: "ok",
        engine: finder.name(),
        words: finder.stats().words_added,
    })
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        // Without a signal handler the server runs until the process is killed
        tracing::error!(error = %err, "failed to install Ctrl+C handler");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
