//! Application state management.
//!
//! Shared state passed to request handlers: configuration plus the two
//! domain services behind Arc so cloning the state stays cheap.

use std::sync::Arc;

use domain_analysis::{AnalysisService, HttpChatClient};
use domain_snippets::{QdrantSnippetRepository, SnippetService};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration loaded from environment variables
    pub config: crate::config::Config,
    /// Snippet storage/search over Qdrant
    pub snippets: Arc<SnippetService<QdrantSnippetRepository>>,
    /// LLM-backed code analysis
    pub analysis: Arc<AnalysisService<HttpChatClient>>,
}
