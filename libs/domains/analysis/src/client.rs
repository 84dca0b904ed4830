//! Chat-completion client for OpenAI-compatible providers.

use async_trait::async_trait;
use core_config::{env_or_default, env_required};
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::error::{AnalysisError, AnalysisResult};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub max_tokens: u32,
    pub temperature: f32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatResponse {
    #[serde(default)]
    pub choices: Vec<ChatChoice>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatChoice {
    pub message: ChatChoiceMessage,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatChoiceMessage {
    pub content: String,
}

/// Trait for chat-completion providers
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ChatCompletionClient: Send + Sync {
    /// Model identifier to place in requests
    fn model(&self) -> &str;

    async fn complete(&self, request: ChatRequest) -> AnalysisResult<ChatResponse>;
}

/// Configuration for the LLM provider endpoint.
///
/// The API key has no default and no fallback: it must come from the
/// environment.
#[derive(Debug, Clone)]
pub struct LlmConfig {
    pub api_key: String,
    pub base_url: String,
    pub completions_path: String,
    pub model: String,
}

impl LlmConfig {
    pub fn from_env() -> Result<Self, core_config::ConfigError> {
        Ok(Self {
            api_key: env_required("LLM_API_KEY")?,
            base_url: env_or_default("LLM_BASE_URL", "https://api.novita.ai/v3/openai"),
            completions_path: env_or_default("LLM_CHAT_COMPLETIONS_PATH", "/chat/completions"),
            model: env_or_default("LLM_MODEL", "meta-llama/llama-3.1-8b-instruct"),
        })
    }

    pub fn completions_url(&self) -> String {
        format!("{}{}", self.base_url, self.completions_path)
    }
}

/// Reqwest-backed implementation
pub struct HttpChatClient {
    client: Client,
    config: LlmConfig,
}

impl HttpChatClient {
    pub fn new(config: LlmConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    pub fn from_env() -> Result<Self, core_config::ConfigError> {
        Ok(Self::new(LlmConfig::from_env()?))
    }
}

#[async_trait]
impl ChatCompletionClient for HttpChatClient {
    fn model(&self) -> &str {
        &self.config.model
    }

    async fn complete(&self, request: ChatRequest) -> AnalysisResult<ChatResponse> {
        let url = self.config.completions_url();

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| AnalysisError::Request {
                url: url.clone(),
                message: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AnalysisError::UpstreamStatus {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json::<ChatResponse>()
            .await
            .map_err(|e| AnalysisError::BadResponse(format!("Unexpected API response format: {}", e)))
    }
}
