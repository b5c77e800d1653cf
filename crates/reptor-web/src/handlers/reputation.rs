//! Repute submission and reputation query endpoints.

use axum::{
    body::Bytes,
    extract::{rejection::JsonRejection, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};
use crate::state::SharedState;
use reptor_common::{ApiError, ReputeRequest};
use reptor_ranker::ReputationReport;

#[derive(Debug, Default, Deserialize)]
pub struct ReputeeQuery {
    pub reputee: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct Accepted {
    pub status: &'static str,
}

/// POST /reptor — record one repute
pub async fn post_repute(
    State(state): State<SharedState>,
    payload: Result<Json<ReputeRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(request) = payload.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    state.service.update(request)?;
    Ok((StatusCode::ACCEPTED, Json(Accepted { status: "accepted" })))
}

/// GET /reptor — current report for a reputee
///
/// The reputee comes from `?reputee=` or, failing that, a JSON body
/// `{"reputee": "..."}`.
pub async fn get_reputation(
    State(state): State<SharedState>,
    Query(query): Query<ReputeeQuery>,
    body: Bytes,
) -> Result<Json<ReputationReport>, ApiError> {
    let reputee = match query.reputee {
        Some(name) => name,
        None => reputee_from_body(&body)?,
    };
    let report = state.service.calc_scores(&reputee)?;
    Ok(Json(report))
}

fn reputee_from_body(body: &[u8]) -> Result<String, ApiError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(ApiError::BadRequest("missing reputee".to_string()));
    }
    let parsed: ReputeeQuery = serde_json::from_slice(body)
        .map_err(|e| ApiError::BadRequest(format!("invalid request body: {e}")))?;
    parsed
        .reputee
        .ok_or_else(|| ApiError::BadRequest("missing reputee".to_string()))
}
