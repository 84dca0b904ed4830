use async_trait::async_trait;

use crate::error::SnippetResult;

/// Trait for embedding generation providers.
///
/// An implementation converts text to a fixed-length vector; `dimension`
/// must match the length of every vector `embed` returns, since the target
/// collection is created with that dimensionality.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmbeddingProvider: Send + Sync {
    /// Output vector length
    fn dimension(&self) -> u64;

    /// Generate an embedding for a single text
    async fn embed(&self, text: &str) -> SnippetResult<Vec<f32>>;
}
