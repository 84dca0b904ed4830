//! Analysis Domain Library
//!
//! LLM-backed code analysis: a fixed security-and-compliance prompt is sent
//! to an OpenAI-compatible chat-completion provider and the reply is
//! normalized into a stable response shape. The provider sits behind the
//! [`ChatCompletionClient`] trait so the service and handlers are testable
//! with a mocked client.

pub mod client;
pub mod error;
pub mod handlers;
pub mod models;
pub mod prompt;
pub mod service;

// Re-export commonly used types
pub use client::{ChatCompletionClient, ChatMessage, ChatRequest, ChatResponse, HttpChatClient, LlmConfig};
pub use error::{AnalysisError, AnalysisResult};
pub use handlers::AnalysisApiDoc;
pub use models::{AnalysisOutcome, AnalyzeRequest, AnalyzeResponse};
pub use service::AnalysisService;
