use std::time::Instant;

use tracing::debug;

use crate::client::{ChatCompletionClient, ChatMessage, ChatRequest};
use crate::error::{AnalysisError, AnalysisResult};
use crate::models::{AnalysisOutcome, AnalyzeResponse};
use crate::prompt::{EMPTY_CODE_GUIDANCE, MAX_TOKENS, SYSTEM_PROMPT, TEMPERATURE, user_prompt};

/// Analysis service wrapping an injected chat-completion client.
pub struct AnalysisService<C: ChatCompletionClient> {
    client: C,
}

impl<C: ChatCompletionClient> AnalysisService<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    /// Analyze `code` for optimization, bugs, and security issues.
    ///
    /// Empty or whitespace-only code short-circuits to the canned guidance
    /// with `execution_time` 0.0 and no provider call. Otherwise the timer
    /// covers exactly the provider round-trip, not prompt construction or
    /// response parsing.
    pub async fn analyze(&self, code: &str) -> AnalysisResult<AnalyzeResponse> {
        if code.trim().is_empty() {
            return Ok(AnalyzeResponse::plain(EMPTY_CODE_GUIDANCE, 0.0));
        }

        let request = ChatRequest {
            model: self.client.model().to_string(),
            messages: vec![
                ChatMessage::system(SYSTEM_PROMPT),
                ChatMessage::user(user_prompt(code)),
            ],
            max_tokens: MAX_TOKENS,
            temperature: TEMPERATURE,
        };

        let start = Instant::now();
        let response = self.client.complete(request).await?;
        let execution_time = start.elapsed().as_secs_f64();

        debug!(execution_time, "LLM provider round-trip completed");

        let content = response
            .choices
            .first()
            .map(|choice| choice.message.content.as_str())
            .ok_or_else(|| {
                AnalysisError::BadResponse("Unexpected API response format".to_string())
            })?;

        let outcome = AnalysisOutcome::from_content(content)?;
        Ok(outcome.into_response(execution_time))
    }
}
