use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use qdrant_client::Qdrant;
use qdrant_client::qdrant::{
    CreateCollectionBuilder, Distance, PointStruct, SearchPointsBuilder, UpsertPointsBuilder,
    Value as QdrantValue, VectorParamsBuilder, value::Kind,
};
use uuid::Uuid;

use super::QdrantConfig;
use crate::error::{SnippetError, SnippetResult};
use crate::models::{CollectionSpec, SnippetHit, SnippetPoint};
use crate::repository::SnippetRepository;

/// Qdrant-backed implementation of SnippetRepository
pub struct QdrantSnippetRepository {
    client: Qdrant,
}

impl QdrantSnippetRepository {
    pub fn new(config: QdrantConfig) -> SnippetResult<Self> {
        let mut builder = Qdrant::from_url(&config.url);

        if let Some(api_key) = config.api_key {
            builder = builder.api_key(api_key);
        }

        builder = builder.timeout(Duration::from_secs(config.timeout_secs));

        let client = builder
            .build()
            .map_err(|e| SnippetError::Store(format!("Failed to build client: {}", e)))?;

        Ok(Self { client })
    }

    pub fn from_client(client: Qdrant) -> Self {
        Self { client }
    }

    fn snippet_payload(point: &SnippetPoint) -> HashMap<String, QdrantValue> {
        let mut payload = HashMap::new();
        payload.insert("code".to_string(), QdrantValue::from(point.code.clone()));
        payload.insert(
            "explanation".to_string(),
            QdrantValue::from(point.explanation.clone()),
        );
        payload
    }

    fn payload_str(payload: &HashMap<String, QdrantValue>, key: &str) -> String {
        match payload.get(key).and_then(|v| v.kind.as_ref()) {
            Some(Kind::StringValue(s)) => s.clone(),
            _ => String::new(),
        }
    }
}

#[async_trait]
impl SnippetRepository for QdrantSnippetRepository {
    async fn collection_exists(&self, spec: &CollectionSpec) -> SnippetResult<bool> {
        Ok(self.client.collection_exists(&spec.name).await?)
    }

    async fn create_collection(&self, spec: &CollectionSpec) -> SnippetResult<()> {
        self.client
            .create_collection(
                CreateCollectionBuilder::new(&spec.name)
                    .vectors_config(VectorParamsBuilder::new(spec.dimension, Distance::Cosine)),
            )
            .await?;

        Ok(())
    }

    async fn delete_collection(&self, spec: &CollectionSpec) -> SnippetResult<()> {
        self.client.delete_collection(&spec.name).await?;
        Ok(())
    }

    async fn upsert(&self, collection: &str, point: SnippetPoint) -> SnippetResult<Uuid> {
        let id = point.id;
        let qdrant_point = PointStruct::new(
            id.to_string(),
            point.vector.clone(),
            Self::snippet_payload(&point),
        );

        self.client
            .upsert_points(UpsertPointsBuilder::new(collection, vec![qdrant_point]).wait(true))
            .await?;

        Ok(id)
    }

    async fn search(
        &self,
        collection: &str,
        vector: Vec<f32>,
        limit: u64,
    ) -> SnippetResult<Vec<SnippetHit>> {
        let results = self
            .client
            .search_points(SearchPointsBuilder::new(collection, vector, limit).with_payload(true))
            .await?;

        // Qdrant returns hits in descending similarity order; no re-ranking.
        Ok(results
            .result
            .into_iter()
            .map(|point| SnippetHit {
                code: Self::payload_str(&point.payload, "code"),
                explanation: Self::payload_str(&point.payload, "explanation"),
                score: point.score,
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snippet_payload_carries_both_fields() {
        let point = SnippetPoint {
            id: Uuid::new_v4(),
            vector: vec![0.1, 0.2],
            code: "let x = 1;".to_string(),
            explanation: "binds x".to_string(),
        };

        let payload = QdrantSnippetRepository::snippet_payload(&point);
        assert_eq!(
            QdrantSnippetRepository::payload_str(&payload, "code"),
            "let x = 1;"
        );
        assert_eq!(
            QdrantSnippetRepository::payload_str(&payload, "explanation"),
            "binds x"
        );
    }

    #[test]
    fn test_payload_str_defaults_missing_field_to_empty() {
        let payload = HashMap::new();
        assert_eq!(QdrantSnippetRepository::payload_str(&payload, "code"), "");
    }
}
