use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SnippetError {
    #[error("Embedding error: {0}")]
    Embedding(String),

    #[error("Vector store error: {0}")]
    Store(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type SnippetResult<T> = Result<T, SnippetError>;

impl SnippetError {
    /// Prefix the carried message, preserving the variant. Used by handlers
    /// to attach the operation that failed ("Failed to store snippet: ...").
    pub fn context(self, prefix: &str) -> Self {
        match self {
            SnippetError::Embedding(msg) => SnippetError::Embedding(format!("{prefix}: {msg}")),
            SnippetError::Store(msg) => SnippetError::Store(format!("{prefix}: {msg}")),
            SnippetError::Config(msg) => SnippetError::Config(format!("{prefix}: {msg}")),
            SnippetError::Internal(msg) => SnippetError::Internal(format!("{prefix}: {msg}")),
        }
    }
}

impl From<qdrant_client::QdrantError> for SnippetError {
    fn from(err: qdrant_client::QdrantError) -> Self {
        SnippetError::Store(err.to_string())
    }
}

impl From<reqwest::Error> for SnippetError {
    fn from(err: reqwest::Error) -> Self {
        SnippetError::Embedding(err.to_string())
    }
}

impl From<serde_json::Error> for SnippetError {
    fn from(err: serde_json::Error) -> Self {
        SnippetError::Internal(format!("JSON error: {}", err))
    }
}

/// Convert SnippetError to AppError for standardized HTTP error responses.
///
/// Embedding and store failures are upstream dependencies being unreachable
/// or misbehaving, so they surface as 502 rather than the swallowed-200
/// convention of early versions of this service.
impl From<SnippetError> for AppError {
    fn from(err: SnippetError) -> Self {
        match err {
            SnippetError::Embedding(msg) => AppError::UpstreamUnavailable(msg),
            SnippetError::Store(msg) => AppError::UpstreamUnavailable(msg),
            SnippetError::Config(msg) => AppError::Internal(format!("Config error: {}", msg)),
            SnippetError::Internal(msg) => AppError::Internal(msg),
        }
    }
}

impl IntoResponse for SnippetError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
