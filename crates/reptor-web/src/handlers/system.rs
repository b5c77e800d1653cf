//! Liveness and store counts.

use axum::{extract::State, Json};
use serde::Serialize;
use crate::state::SharedState;

#[derive(Debug, Serialize)]
pub struct Health {
    pub status: &'static str,
    pub reputees: usize,
    pub observations: usize,
}

/// GET /health
pub async fn health(State(state): State<SharedState>) -> Json<Health> {
    let stats = state.service.stats();
    Json(Health {
        status: "ok",
        reputees: stats.reputees,
        observations: stats.observations,
    })
}
