//! Contract analysis over HTTP
//!
//! - `GET /health`
//! - `POST /api/analyze` analyzes extracted text
//! - `POST /api/documents` decodes and analyzes a base64 upload

pub mod error;
pub mod handlers;
pub mod models;
pub mod state;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub use error::ApiError;
pub use state::AppState;

/// Uploads are JSON with base64 content
const MAX_BODY_BYTES: usize = 32 * 1024 * 1024;

pub fn app(state: Arc<AppState>) -> Router {
    // CORS configuration for web clients
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(handlers::health))
        .route("/api/analyze", post(handlers::analyze_text))
        .route("/api/documents", post(handlers::analyze_document))
        .layer(axum::extract::DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
