use axum::{Json, extract::State, http::StatusCode};
use axum_helpers::server::{HealthCheckFuture, run_health_checks};
use serde_json::Value;

use crate::state::AppState;

/// Readiness probe: verifies the vector store answers.
///
/// The LLM provider is deliberately not probed here; it is metered per
/// request and a probe would spend tokens.
pub async fn ready_handler(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<Value>), (StatusCode, Json<Value>)> {
    let checks: Vec<(&str, HealthCheckFuture)> = vec![(
        "vector_store",
        Box::pin(async { state.snippets.ping().await.map_err(|e| e.to_string()) }),
    )];

    run_health_checks(checks).await
}
