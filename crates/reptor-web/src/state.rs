//! Shared application state for the web server.

use std::sync::Arc;
use reptor_db::MemoryStore;
use reptor_ranker::{ReputationService, ScoringProfile};

/// Shared state injected into every Axum handler.
pub struct AppState {
    pub service: ReputationService<MemoryStore>,
}

impl AppState {
    pub fn new(profile: ScoringProfile) -> Self {
        Self {
            service: ReputationService::new(MemoryStore::new(), profile),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(ScoringProfile::default())
    }
}

pub type SharedState = Arc<AppState>;
