pub mod handlers;

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// Machine-readable error category carried in every error response.
///
/// Serialized in snake_case so clients can match on stable strings:
/// `validation`, `upstream_unavailable`, `upstream_bad_response`,
/// `not_found`, `internal`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Request failed schema or input validation
    Validation,
    /// An upstream dependency could not be reached
    UpstreamUnavailable,
    /// An upstream dependency answered with an error or an unexpected shape
    UpstreamBadResponse,
    /// Requested resource was not found
    NotFound,
    /// An unexpected internal error occurred
    Internal,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Validation => "validation",
            ErrorKind::UpstreamUnavailable => "upstream_unavailable",
            ErrorKind::UpstreamBadResponse => "upstream_bad_response",
            ErrorKind::NotFound => "not_found",
            ErrorKind::Internal => "internal",
        }
    }
}

/// Standard error response structure.
///
/// Returned for all error responses so callers can rely on one shape:
///
/// ```json
/// {
///   "kind": "upstream_unavailable",
///   "message": "Failed to store snippet: ...",
///   "details": null
/// }
/// ```
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Machine-readable error category
    pub kind: ErrorKind,
    /// Human-readable error message
    pub message: String,
    /// Optional structured error details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            details: None,
        }
    }

    /// Build a complete HTTP response with the given status code.
    pub fn respond(status: StatusCode, kind: ErrorKind, message: impl Into<String>) -> Response {
        (status, Json(Self::new(kind, message))).into_response()
    }
}

/// Application error type that converts to HTTP responses.
///
/// Domain error enums convert into this at the handler boundary; the
/// `IntoResponse` impl guarantees errors always render as JSON bodies,
/// never as raw text or stack traces.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppError {
    #[error("JSON extraction error: {0}")]
    JsonExtractorRejection(#[from] JsonRejection),

    #[error("Upstream unavailable: {0}")]
    UpstreamUnavailable(String),

    #[error("Internal Server Error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::JsonExtractorRejection(e) => {
                tracing::warn!("JSON extraction error: {:?}", e);
                ErrorResponse::respond(e.status(), ErrorKind::Validation, e.body_text())
            }
            AppError::UpstreamUnavailable(message) => {
                tracing::error!("Upstream unavailable: {}", message);
                ErrorResponse::respond(
                    StatusCode::BAD_GATEWAY,
                    ErrorKind::UpstreamUnavailable,
                    message,
                )
            }
            AppError::Internal(message) => {
                tracing::error!("Internal error: {}", message);
                ErrorResponse::respond(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorKind::Internal,
                    message,
                )
            }
        }
    }
}
