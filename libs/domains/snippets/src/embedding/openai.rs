use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::EmbeddingProvider;
use crate::error::{SnippetError, SnippetResult};

/// Configuration for an OpenAI-compatible embeddings endpoint.
///
/// The default points at a locally served MiniLM-class model (384
/// dimensions); any server speaking the OpenAI `/embeddings` contract works.
#[derive(Debug, Clone)]
pub struct EmbeddingConfig {
    pub api_key: Option<String>,
    pub base_url: String,
    pub model: String,
    pub dimension: u64,
}

impl EmbeddingConfig {
    pub fn from_env() -> SnippetResult<Self> {
        let api_key = std::env::var("EMBEDDING_API_KEY").ok();

        let base_url = std::env::var("EMBEDDING_BASE_URL")
            .unwrap_or_else(|_| "http://localhost:8081/v1".to_string());

        let model = std::env::var("EMBEDDING_MODEL")
            .unwrap_or_else(|_| "all-MiniLM-L6-v2".to_string());

        let dimension = std::env::var("EMBEDDING_DIMENSION")
            .unwrap_or_else(|_| "384".to_string())
            .parse()
            .map_err(|e| SnippetError::Config(format!("Invalid EMBEDDING_DIMENSION: {}", e)))?;

        Ok(Self {
            api_key,
            base_url,
            model,
            dimension,
        })
    }
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: "http://localhost:8081/v1".to_string(),
            model: "all-MiniLM-L6-v2".to_string(),
            dimension: 384,
        }
    }
}

/// OpenAI-compatible embeddings provider
pub struct OpenAiEmbeddingProvider {
    client: Client,
    config: EmbeddingConfig,
}

impl OpenAiEmbeddingProvider {
    pub fn new(config: EmbeddingConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    pub fn from_env() -> SnippetResult<Self> {
        Ok(Self::new(EmbeddingConfig::from_env()?))
    }
}

#[derive(Debug, Serialize)]
struct EmbeddingRequest {
    model: String,
    input: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct EmbeddingResponse {
    data: Vec<EmbeddingData>,
}

#[derive(Debug, Deserialize)]
struct EmbeddingData {
    embedding: Vec<f32>,
    index: usize,
}

#[async_trait]
impl EmbeddingProvider for OpenAiEmbeddingProvider {
    fn dimension(&self) -> u64 {
        self.config.dimension
    }

    async fn embed(&self, text: &str) -> SnippetResult<Vec<f32>> {
        let request = EmbeddingRequest {
            model: self.config.model.clone(),
            input: vec![text.to_string()],
        };

        let mut builder = self
            .client
            .post(format!("{}/embeddings", self.config.base_url))
            .header("Content-Type", "application/json");

        if let Some(api_key) = &self.config.api_key {
            builder = builder.header("Authorization", format!("Bearer {}", api_key));
        }

        let response = builder.json(&request).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(SnippetError::Embedding(format!(
                "Embedding API error ({}): {}",
                status, error_text
            )));
        }

        let embedding_response: EmbeddingResponse = response.json().await?;

        // Sort by index to maintain order
        let mut data = embedding_response.data;
        data.sort_by_key(|d| d.index);

        let embedding = data
            .into_iter()
            .next()
            .map(|d| d.embedding)
            .ok_or_else(|| SnippetError::Embedding("No embedding returned".to_string()))?;

        if embedding.len() as u64 != self.config.dimension {
            return Err(SnippetError::Embedding(format!(
                "Embedding dimension mismatch: expected {}, got {}",
                self.config.dimension,
                embedding.len()
            )));
        }

        Ok(embedding)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = EmbeddingConfig::default();
        assert_eq!(config.model, "all-MiniLM-L6-v2");
        assert_eq!(config.dimension, 384);
        assert!(config.api_key.is_none());
    }

    #[test]
    fn test_config_from_env_overrides() {
        temp_env::with_vars(
            [
                ("EMBEDDING_API_KEY", Some("sk-test")),
                ("EMBEDDING_BASE_URL", Some("https://api.example.com/v1")),
                ("EMBEDDING_MODEL", Some("text-embedding-3-small")),
                ("EMBEDDING_DIMENSION", Some("1536")),
            ],
            || {
                let config = EmbeddingConfig::from_env().unwrap();
                assert_eq!(config.api_key.as_deref(), Some("sk-test"));
                assert_eq!(config.base_url, "https://api.example.com/v1");
                assert_eq!(config.model, "text-embedding-3-small");
                assert_eq!(config.dimension, 1536);
            },
        );
    }

    #[test]
    fn test_config_from_env_rejects_bad_dimension() {
        temp_env::with_var("EMBEDDING_DIMENSION", Some("lots"), || {
            assert!(EmbeddingConfig::from_env().is_err());
        });
    }
}
