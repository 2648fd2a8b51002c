//! Semsearch HTTP server
//!
//! A single `POST /search` endpoint over a startup-initialized, read-only
//! search pipeline, plus a liveness probe. The pipeline state is shared by
//! reference; nothing mutates it after startup.

pub mod error;

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use semsearch_core::{SearchError, SemanticSearch, DEFAULT_K};

use crate::error::ApiError;

/// Read-only state shared by all requests
pub struct AppState {
    /// The assembled encode → lookup → resolve pipeline
    pub search: SemanticSearch,
}

/// Search request body
#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    /// Free-text query
    pub text: String,
}

/// Search response body
///
/// `distances` and `indices` stay nested one level deep, matching the
/// (1, k)-shaped arrays the original wire format carried.
#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub distances: Vec<Vec<f32>>,
    pub indices: Vec<Vec<usize>>,
    pub results: Vec<String>,
}

/// Build the router; separate from serving so tests can drive it in-process
pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/search", post(search))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health() -> impl IntoResponse {
    (StatusCode::OK, Json(serde_json::json!({ "status": "ok" })))
}

async fn search(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<SearchRequest>, JsonRejection>,
) -> Result<Json<SearchResponse>, ApiError> {
    let Json(request) = payload.map_err(|e| SearchError::bad_request(e.body_text()))?;

    tracing::debug!(query_len = request.text.len(), "search request");

    // Encoding plus index lookup is synchronous CPU work; keep it off the
    // async workers.
    let hits = tokio::task::spawn_blocking(move || state.search.search(&request.text, DEFAULT_K))
        .await
        .map_err(|e| SearchError::lookup(format!("search task failed: {e}")))??;

    Ok(Json(SearchResponse {
        distances: vec![hits.distances],
        indices: vec![hits.indices],
        results: hits.texts,
    }))
}
