//! API errors and their HTTP form
//!
//! Every failure leaves a handler as an `ApiError` and reaches the client as
//! a JSON body `{error, message, code}`. Missing records and malformed input
//! are client errors; a duplicate id is a conflict; any other store failure
//! is a 500 and the write it belonged to did not happen.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::db::DatabaseError;

/// JSON body of every error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    /// Variant name, e.g. `NotFound`
    pub error: String,
    pub message: String,
    /// Stable machine-readable code, e.g. `DB_CONSTRAINT_VIOLATION`
    pub code: String,
}

/// API result type
pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Error)]
pub enum ApiError {
    /// No record has the requested id
    #[error("Not found: {0}")]
    NotFound(String),

    /// Bad path id, mismatched body id or malformed date
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Database error: {0}")]
    DatabaseError(#[from] DatabaseError),

    /// Body is not JSON, or has missing, unknown or mistyped keys
    #[error("JSON error: {0}")]
    JsonError(String),
}

impl ApiError {
    /// Status, variant name and code, in that order
    fn classify(&self) -> (StatusCode, &'static str, &'static str) {
        match self {
            ApiError::NotFound(_) => (StatusCode::NOT_FOUND, "NotFound", "NOT_FOUND"),
            ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, "BadRequest", "BAD_REQUEST"),
            ApiError::JsonError(_) => (StatusCode::BAD_REQUEST, "JsonError", "JSON_ERROR"),
            ApiError::DatabaseError(db_err) if db_err.is_constraint_violation() => {
                (StatusCode::CONFLICT, "DatabaseError", "DB_CONSTRAINT_VIOLATION")
            }
            ApiError::DatabaseError(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "DatabaseError", "DB_ERROR")
            }
        }
    }

    pub fn status_code(&self) -> StatusCode {
        self.classify().0
    }

    pub fn error_type(&self) -> &'static str {
        self.classify().1
    }

    pub fn code(&self) -> &'static str {
        self.classify().2
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error, code) = self.classify();
        let body = ApiErrorResponse {
            error: error.to_string(),
            message: self.to_string(),
            code: code.to_string(),
        };

        if status.is_server_error() {
            tracing::error!(%status, code, "{}", body.message);
        } else {
            tracing::warn!(%status, code, "{}", body.message);
        }

        (status, Json(body)).into_response()
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::JsonError(err.to_string())
    }
}
