//! Maps domain `AppError` to HTTP responses.

use std::collections::BTreeMap;

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use validator::ValidationErrors;

use lettinghub_core::error::{AppError, ErrorKind};

/// Standard API error response body: a human-readable message plus a
/// numeric mirror of the HTTP status. Validation failures additionally
/// carry a per-field error map.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    /// Human-readable message.
    pub message: String,
    /// Numeric mirror of the HTTP status code.
    pub status: u16,
    /// Per-field validation messages.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<BTreeMap<String, String>>,
}

/// HTTP-facing wrapper around [`AppError`].
///
/// Axum's `IntoResponse` cannot be implemented for the core error type
/// directly, so handlers return this wrapper; `?` converts via `From`.
#[derive(Debug)]
pub struct ApiError {
    /// The underlying domain error.
    pub error: AppError,
    /// Per-field messages for validation failures.
    pub field_errors: Option<BTreeMap<String, String>>,
}

impl ApiError {
    /// Wraps a request-validation failure with its per-field messages.
    pub fn validation_failed(errors: &ValidationErrors) -> Self {
        Self {
            error: AppError::validation("Validation failed"),
            field_errors: Some(flatten_field_errors(errors)),
        }
    }
}

impl From<AppError> for ApiError {
    fn from(error: AppError) -> Self {
        Self {
            error,
            field_errors: None,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self.error.kind {
            ErrorKind::Validation => StatusCode::BAD_REQUEST,
            ErrorKind::Authentication => StatusCode::UNAUTHORIZED,
            ErrorKind::Authorization => StatusCode::FORBIDDEN,
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            ErrorKind::Conflict => StatusCode::CONFLICT,
            ErrorKind::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            ErrorKind::Internal
            | ErrorKind::Database
            | ErrorKind::Configuration
            | ErrorKind::Serialization => {
                tracing::error!(error = %self.error, "Internal server error");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = ApiErrorResponse {
            message: self.error.message.clone(),
            status: status.as_u16(),
            errors: self.field_errors,
        };

        (status, Json(body)).into_response()
    }
}

/// Flatten `validator`'s nested error structure into one message per field.
fn flatten_field_errors(errors: &ValidationErrors) -> BTreeMap<String, String> {
    errors
        .field_errors()
        .iter()
        .map(|(field, field_errors)| {
            let message = field_errors
                .first()
                .and_then(|e| e.message.as_ref())
                .map(|m| m.to_string())
                .unwrap_or_else(|| format!("Invalid value for field '{field}'"));
            (field.to_string(), message)
        })
        .collect()
}
