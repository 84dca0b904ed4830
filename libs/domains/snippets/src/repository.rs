use async_trait::async_trait;
use uuid::Uuid;

use crate::error::SnippetResult;
use crate::models::{CollectionSpec, SnippetHit, SnippetPoint};

/// Repository trait for snippet vector storage.
///
/// Abstracts the underlying vector database (Qdrant). Search results come
/// back in the store's native order: descending similarity.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SnippetRepository: Send + Sync {
    /// Check whether the collection already exists
    async fn collection_exists(&self, spec: &CollectionSpec) -> SnippetResult<bool>;

    /// Create the collection with cosine distance and the spec's dimension
    async fn create_collection(&self, spec: &CollectionSpec) -> SnippetResult<()>;

    /// Delete the collection, discarding all stored snippets
    async fn delete_collection(&self, spec: &CollectionSpec) -> SnippetResult<()>;

    /// Upsert a single snippet point
    async fn upsert(&self, collection: &str, point: SnippetPoint) -> SnippetResult<Uuid>;

    /// Nearest-neighbor search, at most `limit` hits
    async fn search(
        &self,
        collection: &str,
        vector: Vec<f32>,
        limit: u64,
    ) -> SnippetResult<Vec<SnippetHit>>;
}
