use axum::{Json, Router, routing::get};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct InfoResponse {
    pub message: String,
}

/// Liveness banner
#[utoipa::path(
    get,
    path = "/",
    tag = "info",
    responses(
        (status = 200, description = "Service banner", body = InfoResponse)
    )
)]
pub async fn root() -> Json<InfoResponse> {
    Json(InfoResponse {
        message: "AI Code Optimizer Backend".to_string(),
    })
}

pub fn router() -> Router {
    Router::new().route("/", get(root))
}
