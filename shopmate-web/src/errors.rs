//! Error types for the web layer.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use shopmate_chat::ChatError;
use shopmate_search::ProductSearchError;
use thiserror::Error;

/// Errors returned by API handlers, rendered as `{"detail": ...}`.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Client sent an unusable request.
    #[error("{reason}")]
    BadRequest {
        /// What was wrong with the request
        reason: String,
    },

    /// Request body was missing, not JSON, or the wrong shape.
    #[error("{reason}")]
    InvalidBody {
        /// Status chosen by the JSON extractor (400, 415 or 422)
        status: StatusCode,
        /// Extractor message
        reason: String,
    },

    /// An upstream provider failed.
    #[error("{reason}")]
    Upstream {
        /// Provider failure description
        reason: String,
    },
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            ApiError::InvalidBody { status, .. } => *status,
            ApiError::Upstream { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ProductSearchError> for ApiError {
    fn from(error: ProductSearchError) -> Self {
        match error {
            ProductSearchError::EmptyQuery => ApiError::BadRequest {
                reason: error.to_string(),
            },
            other => ApiError::Upstream {
                reason: other.to_string(),
            },
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::InvalidBody {
            status: rejection.status(),
            reason: rejection.body_text(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        (status, Json(json!({ "detail": self.to_string() }))).into_response()
    }
}

/// Errors that stop the server from starting or serving.
#[derive(Debug, Error)]
pub enum ServerError {
    /// Search service could not be created.
    #[error("Search setup failed: {0}")]
    Search(#[from] ProductSearchError),

    /// Chat service could not be created.
    #[error("Chat setup failed: {0}")]
    Chat(#[from] ChatError),

    /// Listener or socket failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
