// src/api/http/mod.rs

pub mod calculate;
pub mod pages;

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the full application router.
pub fn router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Browser-facing pages
        .route("/", get(calculate::index))
        .route("/calculate", post(calculate::calculate_form))
        // JSON API
        .route("/api/calculate", post(calculate::calculate_json))
        .route("/api/history", get(calculate::history))
        .route("/api/history/clear", post(calculate::clear_history))
        .route("/health", get(calculate::health))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
