use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use crate::embedding::EmbeddingProvider;
use crate::error::SnippetResult;
use crate::models::{CollectionSpec, SnippetHit, SnippetPoint, embedding_text};
use crate::repository::SnippetRepository;

/// Snippet service providing the embed-then-store and embed-then-search
/// operations over an injected repository and embedding provider.
pub struct SnippetService<R: SnippetRepository> {
    repository: R,
    embedding: Arc<dyn EmbeddingProvider>,
    collection: CollectionSpec,
}

impl<R: SnippetRepository> SnippetService<R> {
    /// The collection dimension is taken from the embedding provider so the
    /// stored-vector invariant cannot be misconfigured.
    pub fn new(
        repository: R,
        embedding: Arc<dyn EmbeddingProvider>,
        collection_name: impl Into<String>,
    ) -> Self {
        let collection = CollectionSpec::new(collection_name, embedding.dimension());
        Self {
            repository,
            embedding,
            collection,
        }
    }

    pub fn collection(&self) -> &CollectionSpec {
        &self.collection
    }

    /// Ensure the target collection exists.
    ///
    /// With `recreate = false` (the default) this is idempotent: the
    /// collection is created only if absent and existing snippets survive
    /// restarts. `recreate = true` drops and recreates it, discarding all
    /// stored snippets.
    pub async fn init_collection(&self, recreate: bool) -> SnippetResult<()> {
        let exists = self.repository.collection_exists(&self.collection).await?;

        if exists && !recreate {
            info!("Collection '{}' already exists", self.collection.name);
            return Ok(());
        }

        if exists {
            info!("Recreating collection '{}'", self.collection.name);
            self.repository.delete_collection(&self.collection).await?;
        } else {
            info!("Creating collection '{}'", self.collection.name);
        }

        self.repository.create_collection(&self.collection).await
    }

    /// Readiness probe: verifies the collection is reachable.
    pub async fn ping(&self) -> SnippetResult<()> {
        self.repository.collection_exists(&self.collection).await?;
        Ok(())
    }

    /// Embed `code` + `explanation` with the fixed template and upsert a
    /// fresh point. Every call stores a new point under a new random id; no
    /// deduplication and no syntax validation of `code`.
    pub async fn store(&self, code: &str, explanation: &str) -> SnippetResult<Uuid> {
        let vector = self.embedding.embed(&embedding_text(code, explanation)).await?;

        let point = SnippetPoint {
            id: Uuid::new_v4(),
            vector,
            code: code.to_string(),
            explanation: explanation.to_string(),
        };

        self.repository.upsert(&self.collection.name, point).await
    }

    /// Embed `query` and return at most `limit` hits in descending
    /// similarity order. `limit = 0` short-circuits to an empty list
    /// without touching either provider.
    pub async fn search(&self, query: &str, limit: u64) -> SnippetResult<Vec<SnippetHit>> {
        if limit == 0 {
            return Ok(vec![]);
        }

        let vector = self.embedding.embed(query).await?;
        self.repository
            .search(&self.collection.name, vector, limit)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::embedding::MockEmbeddingProvider;
    use crate::error::SnippetError;
    use crate::repository::MockSnippetRepository;
    use mockall::predicate::eq;

    fn mock_embedding(dimension: u64) -> MockEmbeddingProvider {
        let mut embedding = MockEmbeddingProvider::new();
        embedding.expect_dimension().return_const(dimension);
        embedding
    }

    #[tokio::test]
    async fn test_store_embeds_with_fixed_template() {
        let mut embedding = mock_embedding(3);
        embedding
            .expect_embed()
            .with(eq("Code: fn f() {}\nExplanation: noop"))
            .times(1)
            .returning(|_| Ok(vec![0.1, 0.2, 0.3]));

        let mut repo = MockSnippetRepository::new();
        repo.expect_upsert()
            .withf(|collection, point| {
                collection == "snippets"
                    && point.code == "fn f() {}"
                    && point.explanation == "noop"
                    && point.vector == vec![0.1, 0.2, 0.3]
            })
            .times(1)
            .returning(|_, point| Ok(point.id));

        let service = SnippetService::new(repo, Arc::new(embedding), "snippets");
        service.store("fn f() {}", "noop").await.unwrap();
    }

    #[tokio::test]
    async fn test_store_twice_generates_distinct_ids() {
        let mut embedding = mock_embedding(2);
        embedding
            .expect_embed()
            .times(2)
            .returning(|_| Ok(vec![0.5, 0.5]));

        let mut repo = MockSnippetRepository::new();
        repo.expect_upsert()
            .times(2)
            .returning(|_, point| Ok(point.id));

        let service = SnippetService::new(repo, Arc::new(embedding), "snippets");
        let first = service.store("same", "same").await.unwrap();
        let second = service.store("same", "same").await.unwrap();

        assert_ne!(first, second, "identical input must produce two distinct points");
    }

    #[tokio::test]
    async fn test_search_preserves_store_ordering() {
        let mut embedding = mock_embedding(2);
        embedding
            .expect_embed()
            .with(eq("sorting"))
            .times(1)
            .returning(|_| Ok(vec![1.0, 0.0]));

        let mut repo = MockSnippetRepository::new();
        repo.expect_search()
            .with(eq("snippets"), eq(vec![1.0, 0.0]), eq(5u64))
            .times(1)
            .returning(|_, _, _| {
                Ok(vec![
                    SnippetHit {
                        code: "a".to_string(),
                        explanation: "best".to_string(),
                        score: 0.92,
                    },
                    SnippetHit {
                        code: "b".to_string(),
                        explanation: "next".to_string(),
                        score: 0.71,
                    },
                ])
            });

        let service = SnippetService::new(repo, Arc::new(embedding), "snippets");
        let hits = service.search("sorting", 5).await.unwrap();

        assert_eq!(hits.len(), 2);
        assert!(hits[0].score >= hits[1].score);
        assert_eq!(hits[0].code, "a");
    }

    #[tokio::test]
    async fn test_search_limit_zero_returns_empty_without_calls() {
        // No expectations set: any provider or repository call would panic.
        let embedding = mock_embedding(2);
        let repo = MockSnippetRepository::new();

        let service = SnippetService::new(repo, Arc::new(embedding), "snippets");
        let hits = service.search("anything", 0).await.unwrap();

        assert!(hits.is_empty());
    }

    #[tokio::test]
    async fn test_store_propagates_embedding_failure() {
        let mut embedding = mock_embedding(2);
        embedding
            .expect_embed()
            .returning(|_| Err(SnippetError::Embedding("api down".to_string())));

        let repo = MockSnippetRepository::new();

        let service = SnippetService::new(repo, Arc::new(embedding), "snippets");
        let err = service.store("code", "explanation").await.unwrap_err();

        assert!(matches!(err, SnippetError::Embedding(_)));
    }

    #[tokio::test]
    async fn test_init_collection_skips_existing_by_default() {
        let embedding = mock_embedding(384);

        let mut repo = MockSnippetRepository::new();
        repo.expect_collection_exists()
            .times(1)
            .returning(|_| Ok(true));
        // Neither delete_collection nor create_collection may be called.

        let service = SnippetService::new(repo, Arc::new(embedding), "snippets");
        service.init_collection(false).await.unwrap();
    }

    #[tokio::test]
    async fn test_init_collection_creates_missing() {
        let embedding = mock_embedding(384);

        let mut repo = MockSnippetRepository::new();
        repo.expect_collection_exists()
            .times(1)
            .returning(|_| Ok(false));
        repo.expect_create_collection()
            .withf(|spec| spec.name == "snippets" && spec.dimension == 384)
            .times(1)
            .returning(|_| Ok(()));

        let service = SnippetService::new(repo, Arc::new(embedding), "snippets");
        service.init_collection(false).await.unwrap();
    }

    #[tokio::test]
    async fn test_init_collection_recreate_drops_existing() {
        let embedding = mock_embedding(384);

        let mut repo = MockSnippetRepository::new();
        repo.expect_collection_exists()
            .times(1)
            .returning(|_| Ok(true));
        repo.expect_delete_collection().times(1).returning(|_| Ok(()));
        repo.expect_create_collection().times(1).returning(|_| Ok(()));

        let service = SnippetService::new(repo, Arc::new(embedding), "snippets");
        service.init_collection(true).await.unwrap();
    }
}
