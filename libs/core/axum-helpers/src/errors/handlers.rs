use axum::{http::StatusCode, response::Response};

use super::{ErrorKind, ErrorResponse};

/// Handler for 404 Not Found errors.
///
/// Used as the fallback handler in the router.
pub async fn not_found() -> Response {
    ErrorResponse::respond(
        StatusCode::NOT_FOUND,
        ErrorKind::NotFound,
        "The requested resource was not found",
    )
}

/// Handler for 405 Method Not Allowed errors.
pub async fn method_not_allowed() -> Response {
    ErrorResponse::respond(
        StatusCode::METHOD_NOT_ALLOWED,
        ErrorKind::Validation,
        "The HTTP method is not allowed for this resource",
    )
}
