use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

use jcmp_core::CompareError;
use jcmp_store::StoreError;

/// Body message for comparisons that fail outright.
pub const PROCESSING_FAILED: &str = "Sorry, error happened during processing :( ";

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Either Left or Right Object is not set properly!")]
    MissingDocument { id: String },

    #[error("unknown document side: {0}")]
    UnknownSide(String),

    #[error("no documents stored for {id}")]
    UnknownId { id: String },

    #[error("{0}")]
    Store(#[from] StoreError),

    #[error("comparison failed: {0}")]
    Compare(#[from] CompareError),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("internal error: {0}")]
    Internal(String),
}

impl ServerError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::MissingDocument { .. } => StatusCode::BAD_REQUEST,
            Self::UnknownSide(_) | Self::UnknownId { .. } => StatusCode::NOT_FOUND,
            Self::Store(err) if err.is_invalid_document() => StatusCode::BAD_REQUEST,
            Self::Store(StoreError::EmptyId) => StatusCode::BAD_REQUEST,
            Self::Compare(_) => StatusCode::UNPROCESSABLE_ENTITY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::debug!(error = %self, %status, "request rejected");
        }

        let body = match &self {
            Self::Compare(err) => json!({
                "message": PROCESSING_FAILED,
                "error": err.to_string(),
            }),
            other => json!(other.to_string()),
        };
        (status, Json(body)).into_response()
    }
}

pub type ServerResult<T> = Result<T, ServerError>;
