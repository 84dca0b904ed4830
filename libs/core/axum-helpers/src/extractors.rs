use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
};

use crate::errors::AppError;

/// JSON extractor whose rejection renders as a structured JSON error.
///
/// axum's default `Json` rejection produces a plain-text body; wrapping it
/// keeps the `{kind, message}` error contract for malformed request bodies
/// (422 on schema mismatch, 400 on syntax errors).
pub struct AppJson<T>(pub T);

impl<S, T> FromRequest<S> for AppJson<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        Ok(AppJson(value))
    }
}
