//! Snippet Domain Library
//!
//! Domain implementation for storing and searching code snippets by semantic
//! similarity: snippets are embedded as fixed-dimension vectors and persisted
//! in a Qdrant collection with cosine distance.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │  SnippetService │  ← embed-then-upsert / embed-then-search operations
//! └────────┬────────┘
//!          │
//! ┌────────▼─────────┐     ┌──────────────────┐
//! │ SnippetRepository│     │ EmbeddingProvider│
//! │     (trait)      │     │     (trait)      │
//! └────────┬─────────┘     └────────┬─────────┘
//!          │                        │
//! ┌────────▼─────────┐     ┌────────▼─────────┐
//! │ QdrantSnippet-   │     │ OpenAiEmbedding- │
//! │ Repository       │     │ Provider         │
//! └──────────────────┘     └──────────────────┘
//! ```
//!
//! Both collaborators sit behind traits so the service and HTTP handlers are
//! testable with mocked dependencies.

pub mod embedding;
pub mod error;
pub mod handlers;
pub mod models;
pub mod qdrant;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use embedding::{EmbeddingConfig, EmbeddingProvider, OpenAiEmbeddingProvider};
pub use error::{SnippetError, SnippetResult};
pub use handlers::SnippetsApiDoc;
pub use models::{CollectionSpec, SnippetHit, SnippetPoint};
pub use qdrant::{QdrantConfig, QdrantSnippetRepository};
pub use repository::SnippetRepository;
pub use service::SnippetService;
