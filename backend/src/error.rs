use crate::state::StoreCallError;
use crate::store::StoreError;
use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use jefferson_common::validation::ValidationError;
use log::error;
use serde_json::json;
use thiserror::Error;

/// Errors returned by request handlers. Rendered as `{"detail": "<message>"}`.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The client sent something that does not match the request schema.
    #[error("{0}")]
    InvalidPayload(String),

    /// A stored document no longer matches its entity schema.
    #[error("stored {collection} document is invalid: {reason}")]
    InvalidRecord { collection: String, reason: String },

    #[error("{0}")]
    Store(#[from] StoreError),

    #[error("{0}")]
    Internal(String),
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::InvalidPayload(err.to_string())
    }
}

impl From<StoreCallError> for ApiError {
    fn from(err: StoreCallError) -> Self {
        match err {
            StoreCallError::Store(e) => ApiError::Store(e),
            StoreCallError::Join(msg) => ApiError::Internal(msg),
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidPayload(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::InvalidRecord { .. } | ApiError::Store(_) | ApiError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if status.is_server_error() {
            error!("Request failed: {}", self);
        }
        HttpResponse::build(status).json(json!({ "detail": self.to_string() }))
    }
}
