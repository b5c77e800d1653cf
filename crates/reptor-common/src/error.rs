use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::entities::Feature;

#[derive(Debug, Error)]
pub enum ReptorError {
    #[error("Duplicate observation: rid {rid} already recorded for {reputee}/{feature}")]
    DuplicateObservation {
        reputee: String,
        feature: Feature,
        rid: String,
    },

    #[error("Reputee not found: {0}")]
    ReputeeNotFound(String),

    #[error("Invalid observation: {0}")]
    InvalidObservation(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, ReptorError>;

/// Error surfaced by HTTP handlers. Every variant renders as `{"error": "..."}`.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Unprocessable(String),

    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_)    => StatusCode::BAD_REQUEST,
            ApiError::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Internal(_)      => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ReptorError> for ApiError {
    fn from(err: ReptorError) -> Self {
        match err {
            ReptorError::DuplicateObservation { .. } => {
                ApiError::Unprocessable("Rejected due to duplicate identifier".to_string())
            }
            ReptorError::ReputeeNotFound(_) => {
                ApiError::Unprocessable("Reputee not found".to_string())
            }
            ReptorError::InvalidObservation(msg) => ApiError::BadRequest(msg),
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
