//! Axum router — maps all URL paths to handlers.

use axum::{
    Router,
    routing::get,
};
use tower_http::trace::TraceLayer;
use std::sync::Arc;
use crate::state::{AppState, SharedState};
use crate::handlers::{
    reputation::{get_reputation, post_repute},
    system::health,
};

/// Build and return the full Axum router.
pub fn build_router(state: AppState) -> Router {
    let shared: SharedState = Arc::new(state);

    Router::new()
        .route("/reptor", get(get_reputation).post(post_repute))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(shared)
}
