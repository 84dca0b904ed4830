mod openai;
mod provider;

pub use openai::{EmbeddingConfig, OpenAiEmbeddingProvider};
pub use provider::EmbeddingProvider;

#[cfg(test)]
pub use provider::MockEmbeddingProvider;
