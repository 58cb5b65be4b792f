//! Error types for the book list service
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Map, Value};
use thiserror::Error;

use crate::models::ErrorResponse;
use crate::validation::ValidationError;

/// Message used when the store rejects a write without saying why.
pub const GENERIC_STORAGE_MESSAGE: &str = "Failed to add the book into the database.";

// == Book List Error Enum ==
/// Unified error type for the book list service.
#[derive(Error, Debug)]
pub enum BookListError {
    /// Book fields failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A request argument violates the declared argument schema.
    ///
    /// `reason` is `empty` or `length` when a book field failed its bounds.
    #[error("Invalid parameter(s): {param}")]
    InvalidParam {
        param: String,
        message: String,
        reason: Option<&'static str>,
    },

    /// Required request arguments are absent
    #[error("Missing parameter(s): {}", .0.join(", "))]
    MissingParam(Vec<String>),

    /// Caller lacks the capability required for the operation
    #[error("{0}")]
    Forbidden(String),

    /// Anti-forgery token was never issued or was already used
    #[error("Invalid nonce.")]
    InvalidNonce,

    /// Persistence layer rejected a write
    #[error("{0}")]
    Storage(String),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl BookListError {
    /// Builds a storage error from an optional backend message.
    ///
    /// Falls back to [`GENERIC_STORAGE_MESSAGE`] when the backend gave no cause.
    pub fn storage(cause: Option<String>) -> Self {
        match cause {
            Some(cause) if !cause.is_empty() => BookListError::Storage(cause),
            _ => BookListError::Storage(GENERIC_STORAGE_MESSAGE.to_string()),
        }
    }

    /// HTTP status for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            BookListError::Validation(_)
            | BookListError::InvalidParam { .. }
            | BookListError::MissingParam(_) => StatusCode::BAD_REQUEST,
            BookListError::Forbidden(_) | BookListError::InvalidNonce => StatusCode::FORBIDDEN,
            BookListError::Storage(_) | BookListError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Machine-readable error code.
    pub fn code(&self) -> &'static str {
        match self {
            BookListError::Validation(err) => err.code(),
            BookListError::InvalidParam { .. } => "rest_invalid_param",
            BookListError::MissingParam(_) => "rest_missing_callback_param",
            BookListError::Forbidden(_) => "rest_forbidden",
            BookListError::InvalidNonce => "invalid_nonce",
            BookListError::Storage(_) => "db_insert_error",
            BookListError::Internal(_) => "internal_error",
        }
    }

    /// Human-readable message.
    pub fn message(&self) -> String {
        self.to_string()
    }

    fn data(&self) -> Value {
        let mut data = Map::new();
        data.insert("status".into(), json!(self.status().as_u16()));

        match self {
            BookListError::Validation(err) => {
                data.insert("field".into(), json!(err.field().as_str()));
                data.insert("reason".into(), json!(err.reason()));
            }
            BookListError::InvalidParam {
                param,
                message,
                reason,
            } => {
                let mut params = Map::new();
                params.insert(param.clone(), json!(message));
                data.insert("params".into(), Value::Object(params));
                if let Some(reason) = reason {
                    data.insert("field".into(), json!(param));
                    data.insert("reason".into(), json!(reason));
                }
            }
            BookListError::MissingParam(params) => {
                data.insert("params".into(), json!(params));
            }
            _ => {}
        }

        Value::Object(data)
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for BookListError {
    fn into_response(self) -> Response {
        let status = self.status();

        let body = ErrorResponse {
            code: self.code().to_string(),
            message: self.message(),
            data: self.data(),
        };

        (status, Json(body)).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the book list service.
pub type Result<T> = std::result::Result<T, BookListError>;
