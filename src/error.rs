//! Error types for the mapping service
//!
//! Provides unified error handling using thiserror. Every handler failure
//! is one of these variants; the `IntoResponse` impl fixes the wire shape
//! of each.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use tracing::error;

use crate::models::ErrorResponse;
use crate::store::StoreError;

// == Service Error Enum ==
/// Unified error type for the mapping service.
#[derive(Error, Debug)]
pub enum ServiceError {
    /// A required request field is missing or empty
    #[error("{0}")]
    Validation(String),

    /// No mapping exists for the requested token
    #[error("no mapping for short URL: {0}")]
    NotFound(String),

    /// Anything else: malformed payload, store failure, unexpected fault
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<StoreError> for ServiceError {
    fn from(err: StoreError) -> Self {
        Self::Internal(err.to_string())
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ServiceError::Validation(msg) => (StatusCode::BAD_REQUEST, ErrorResponse::new(msg)),
            ServiceError::NotFound(_) => {
                (StatusCode::NOT_FOUND, ErrorResponse::new("Short URL not found"))
            }
            ServiceError::Internal(detail) => {
                error!(error = %detail, "Request failed with internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::with_detail("Internal server error", detail),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the mapping service.
pub type Result<T> = std::result::Result<T, ServiceError>;
