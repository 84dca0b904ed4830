//! REST handlers for snippet storage and search.

use axum::{Json, Router, extract::State, routing::post};
use axum_helpers::{AppError, AppJson};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::{OpenApi, ToSchema};

use crate::models::SnippetHit;
use crate::repository::SnippetRepository;
use crate::service::SnippetService;

// ===== Request/Response DTOs =====

/// Request to store a code snippet
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct StoreSnippetRequest {
    pub code: String,
    pub explanation: String,
}

/// Confirmation that a snippet was stored
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct StoreSnippetResponse {
    pub message: String,
}

/// Request to search snippets by semantic similarity
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SearchSnippetsRequest {
    pub query: String,
    #[serde(default = "default_limit")]
    pub limit: u64,
}

fn default_limit() -> u64 {
    5
}

/// OpenAPI documentation for the snippets API
#[derive(OpenApi)]
#[openapi(
    paths(store_snippet, search_snippets),
    components(schemas(StoreSnippetRequest, StoreSnippetResponse, SearchSnippetsRequest, SnippetHit)),
    tags(
        (name = "snippets", description = "Semantic code snippet storage and search")
    )
)]
pub struct SnippetsApiDoc;

// ===== Handlers =====

/// Store a code snippet with its explanation
#[utoipa::path(
    post,
    path = "/store-snippet",
    tag = "snippets",
    request_body = StoreSnippetRequest,
    responses(
        (status = 200, description = "Snippet stored", body = StoreSnippetResponse),
        (status = 422, description = "Malformed request body"),
        (status = 502, description = "Embedding provider or vector store unavailable")
    )
)]
pub async fn store_snippet<R: SnippetRepository>(
    State(service): State<Arc<SnippetService<R>>>,
    AppJson(request): AppJson<StoreSnippetRequest>,
) -> Result<Json<StoreSnippetResponse>, AppError> {
    service
        .store(&request.code, &request.explanation)
        .await
        .map_err(|e| e.context("Failed to store snippet"))?;

    Ok(Json(StoreSnippetResponse {
        message: "Snippet stored successfully".to_string(),
    }))
}

/// Search stored snippets by semantic similarity
#[utoipa::path(
    post,
    path = "/search-snippets",
    tag = "snippets",
    request_body = SearchSnippetsRequest,
    responses(
        (status = 200, description = "Hits in descending similarity order", body = Vec<SnippetHit>),
        (status = 422, description = "Malformed request body"),
        (status = 502, description = "Embedding provider or vector store unavailable")
    )
)]
pub async fn search_snippets<R: SnippetRepository>(
    State(service): State<Arc<SnippetService<R>>>,
    AppJson(request): AppJson<SearchSnippetsRequest>,
) -> Result<Json<Vec<SnippetHit>>, AppError> {
    let hits = service
        .search(&request.query, request.limit)
        .await
        .map_err(|e| e.context("Failed to search snippets"))?;

    Ok(Json(hits))
}

/// Create the snippets router with state applied
pub fn router<R: SnippetRepository + 'static>(service: Arc<SnippetService<R>>) -> Router {
    Router::new()
        .route("/store-snippet", post(store_snippet::<R>))
        .route("/search-snippets", post(search_snippets::<R>))
        .with_state(service)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::embedding::MockEmbeddingProvider;
    use crate::error::SnippetError;
    use crate::repository::MockSnippetRepository;
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use tower::ServiceExt;

    fn test_router(
        repo: MockSnippetRepository,
        mut embedding: MockEmbeddingProvider,
    ) -> Router {
        embedding.expect_dimension().return_const(3u64);
        let service = Arc::new(SnippetService::new(repo, Arc::new(embedding), "snippets"));
        router(service)
    }

    fn json_post(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_store_snippet_returns_confirmation() {
        let mut embedding = MockEmbeddingProvider::new();
        embedding
            .expect_embed()
            .returning(|_| Ok(vec![0.1, 0.2, 0.3]));

        let mut repo = MockSnippetRepository::new();
        repo.expect_upsert().returning(|_, point| Ok(point.id));

        let app = test_router(repo, embedding);
        let response = app
            .oneshot(json_post(
                "/store-snippet",
                r#"{"code": "fn f() {}", "explanation": "noop"}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["message"], "Snippet stored successfully");
    }

    #[tokio::test]
    async fn test_store_snippet_upstream_failure_is_structured_502() {
        let mut embedding = MockEmbeddingProvider::new();
        embedding
            .expect_embed()
            .returning(|_| Err(SnippetError::Embedding("connection refused".to_string())));

        let repo = MockSnippetRepository::new();

        let app = test_router(repo, embedding);
        let response = app
            .oneshot(json_post(
                "/store-snippet",
                r#"{"code": "x", "explanation": "y"}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        let body = body_json(response).await;
        assert_eq!(body["kind"], "upstream_unavailable");
        assert!(
            body["message"]
                .as_str()
                .unwrap()
                .starts_with("Failed to store snippet:")
        );
    }

    #[tokio::test]
    async fn test_store_snippet_missing_field_is_422() {
        let app = test_router(MockSnippetRepository::new(), MockEmbeddingProvider::new());
        let response = app
            .oneshot(json_post("/store-snippet", r#"{"code": "only code"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body = body_json(response).await;
        assert_eq!(body["kind"], "validation");
    }

    #[tokio::test]
    async fn test_search_snippets_defaults_limit_to_five() {
        let mut embedding = MockEmbeddingProvider::new();
        embedding.expect_embed().returning(|_| Ok(vec![1.0, 0.0, 0.0]));

        let mut repo = MockSnippetRepository::new();
        repo.expect_search()
            .withf(|_, _, limit| *limit == 5)
            .returning(|_, _, _| {
                Ok(vec![SnippetHit {
                    code: "a".to_string(),
                    explanation: "b".to_string(),
                    score: 0.9,
                }])
            });

        let app = test_router(repo, embedding);
        let response = app
            .oneshot(json_post("/search-snippets", r#"{"query": "sorting"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body.as_array().unwrap().len(), 1);
        assert_eq!(body[0]["code"], "a");
        assert_eq!(body[0]["score"], 0.9);
    }

    #[tokio::test]
    async fn test_search_snippets_limit_zero_is_empty_list() {
        // No expectations: limit 0 must not reach the providers.
        let app = test_router(MockSnippetRepository::new(), MockEmbeddingProvider::new());
        let response = app
            .oneshot(json_post(
                "/search-snippets",
                r#"{"query": "anything", "limit": 0}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body, serde_json::json!([]));
    }
}
