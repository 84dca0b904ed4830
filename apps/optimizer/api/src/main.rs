use std::sync::Arc;

use axum_helpers::server::{create_app, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use domain_analysis::{AnalysisService, HttpChatClient};
use domain_snippets::{OpenAiEmbeddingProvider, QdrantSnippetRepository, SnippetService};
use tracing::info;

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Install color-eyre first for colored error output (before any fallible operations)
    install_color_eyre();

    // Load configuration from environment variables
    let config = Config::from_env()?;

    // Initialize tracing with ErrorLayer for span trace capture
    init_tracing(&config.environment);

    info!("Connecting to Qdrant at {}", config.qdrant.url);
    let repository = QdrantSnippetRepository::new(config.qdrant.clone())?;
    let embedding = Arc::new(OpenAiEmbeddingProvider::new(config.embedding.clone()));

    let snippets = Arc::new(SnippetService::new(
        repository,
        embedding,
        config.collection_name.clone(),
    ));

    // Idempotent by default; COLLECTION_RECREATE=true drops stored snippets
    snippets.init_collection(config.collection_recreate).await?;

    let analysis = Arc::new(AnalysisService::new(HttpChatClient::new(config.llm.clone())));

    let state = AppState {
        config,
        snippets,
        analysis,
    };

    // Build router with API routes (pass reference, not ownership!)
    let api_routes = api::routes(&state);

    // create_router adds docs/middleware to our composed routes
    let router = axum_helpers::create_router::<openapi::ApiDoc>(api_routes).await?;

    // Merge health endpoints into the app
    // - /health: liveness check with app name/version
    // - /ready: readiness check probing the vector store
    let app = router
        .merge(health_router(state.config.app))
        .merge(api::ready_router(state.clone()));

    create_app(app, &state.config.server).await?;

    info!("Optimizer API shutdown complete");
    Ok(())
}
