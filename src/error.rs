use axum::{
    extract::rejection::{FormRejection, JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Why a translation request was rejected. Any of these aborts the whole batch.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum TranslateError {
    #[error("Could not parse color “{0}”.")]
    Parse(String),

    #[error("Limit {limit} colors per request.")]
    BatchTooLarge { limit: usize },

    #[error("At least one valid color is required.")]
    EmptyBatch,

    #[error("Unknown translation direction: “{0}”.")]
    InvalidDirection(String),

    #[error("Translator returned {actual} colors for a batch of {expected}")]
    TransformMismatch { expected: usize, actual: usize },
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Translate(#[from] TranslateError),

    #[error("Invalid {field}: “{value}”")]
    InvalidFactor { field: &'static str, value: String },

    /// Request body the extractor could not decode
    #[error("{message}")]
    Rejected { status: StatusCode, message: String },

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<FormRejection> for ApiError {
    fn from(rejection: FormRejection) -> Self {
        ApiError::Rejected {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Rejected {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Translate(e) => match e {
                TranslateError::Parse(_)
                | TranslateError::EmptyBatch
                | TranslateError::InvalidDirection(_) => StatusCode::BAD_REQUEST,
                TranslateError::BatchTooLarge { .. } => StatusCode::TOO_MANY_REQUESTS,
                TranslateError::TransformMismatch { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            },
            ApiError::InvalidFactor { .. } => StatusCode::BAD_REQUEST,
            ApiError::Rejected { status, .. } => *status,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "Translation request failed");
        } else {
            tracing::debug!(error = %self, "Translation request rejected");
        }

        let body = Json(json!({
            "status": status.as_u16(),
            "error": self.to_string(),
        }));

        (status, body).into_response()
    }
}
