use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum_helpers::{ErrorKind, ErrorResponse};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnalysisError {
    /// Provider answered with a non-success HTTP status.
    #[error("HTTP error occurred: {status} - {body}")]
    UpstreamStatus { status: u16, body: String },

    /// Provider could not be reached at all.
    #[error("An error occurred while requesting '{url}': {message}")]
    Request { url: String, message: String },

    /// Provider answered 2xx but the payload was not usable.
    #[error("{0}")]
    BadResponse(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type AnalysisResult<T> = Result<T, AnalysisError>;

/// Upstream status codes are propagated verbatim; everything else is a 500.
/// Transport failures keep the `upstream_unavailable` kind so clients can
/// still tell "provider unreachable" from "provider misbehaved".
impl IntoResponse for AnalysisError {
    fn into_response(self) -> Response {
        match self {
            AnalysisError::UpstreamStatus { status, body } => {
                tracing::error!(status, "LLM provider returned an error: {}", body);
                let status_code =
                    StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY);
                ErrorResponse::respond(
                    status_code,
                    ErrorKind::UpstreamBadResponse,
                    format!("HTTP error occurred: {} - {}", status, body),
                )
            }
            AnalysisError::Request { url, message } => {
                tracing::error!(url = %url, "LLM provider unreachable: {}", message);
                ErrorResponse::respond(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorKind::UpstreamUnavailable,
                    format!("An error occurred while requesting '{}': {}", url, message),
                )
            }
            AnalysisError::BadResponse(message) => {
                tracing::error!("Unusable LLM response: {}", message);
                ErrorResponse::respond(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorKind::UpstreamBadResponse,
                    message,
                )
            }
            AnalysisError::Internal(message) => {
                tracing::error!("Internal analysis error: {}", message);
                ErrorResponse::respond(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorKind::Internal,
                    message,
                )
            }
        }
    }
}
