use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Target collection for snippet vectors.
///
/// All vectors in the collection share `dimension`; the similarity metric is
/// always cosine (higher score = more similar).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionSpec {
    pub name: String,
    pub dimension: u64,
}

impl CollectionSpec {
    pub fn new(name: impl Into<String>, dimension: u64) -> Self {
        Self {
            name: name.into(),
            dimension,
        }
    }
}

/// A snippet ready to be persisted: server-generated id, embedding vector,
/// and the original text fields carried as payload.
#[derive(Debug, Clone)]
pub struct SnippetPoint {
    pub id: Uuid,
    pub vector: Vec<f32>,
    pub code: String,
    pub explanation: String,
}

/// A search hit, ordered by descending cosine similarity.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SnippetHit {
    /// Stored snippet code
    pub code: String,
    /// Stored snippet explanation
    pub explanation: String,
    /// Cosine similarity score reported by the vector store
    pub score: f32,
}

/// Text blob fed to the embedding provider when a snippet is stored.
///
/// The same template must be used for storage so that queries phrased like
/// an explanation land close to the stored snippet.
pub fn embedding_text(code: &str, explanation: &str) -> String {
    format!("Code: {code}\nExplanation: {explanation}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedding_text_template() {
        let text = embedding_text("fn main() {}", "entry point");
        assert_eq!(text, "Code: fn main() {}\nExplanation: entry point");
    }

    #[test]
    fn test_embedding_text_allows_empty_fields() {
        assert_eq!(embedding_text("", ""), "Code: \nExplanation: ");
    }
}
