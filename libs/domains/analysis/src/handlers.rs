//! REST handler for code analysis.

use axum::{Json, Router, extract::State, routing::post};
use axum_helpers::AppJson;
use std::sync::Arc;
use utoipa::OpenApi;

use crate::client::ChatCompletionClient;
use crate::error::AnalysisError;
use crate::models::{AnalyzeRequest, AnalyzeResponse};
use crate::service::AnalysisService;

/// OpenAPI documentation for the analysis API
#[derive(OpenApi)]
#[openapi(
    paths(analyze_code),
    components(schemas(AnalyzeRequest, AnalyzeResponse)),
    tags(
        (name = "analysis", description = "LLM-backed code analysis")
    )
)]
pub struct AnalysisApiDoc;

/// Analyze code for optimization, bugs, and security issues
#[utoipa::path(
    post,
    path = "/analyze-code",
    tag = "analysis",
    request_body = AnalyzeRequest,
    responses(
        (status = 200, description = "Analysis result; empty code yields guidance text", body = AnalyzeResponse),
        (status = 422, description = "Malformed request body"),
        (status = 500, description = "Provider unreachable or response unusable")
    )
)]
pub async fn analyze_code<C: ChatCompletionClient>(
    State(service): State<Arc<AnalysisService<C>>>,
    AppJson(request): AppJson<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, AnalysisError> {
    let response = service.analyze(&request.code).await?;
    Ok(Json(response))
}

/// Create the analysis router with state applied
pub fn router<C: ChatCompletionClient + 'static>(service: Arc<AnalysisService<C>>) -> Router {
    Router::new()
        .route("/analyze-code", post(analyze_code::<C>))
        .with_state(service)
}
