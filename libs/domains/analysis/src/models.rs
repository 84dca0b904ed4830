use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::{AnalysisError, AnalysisResult};

/// Request to analyze a piece of code
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AnalyzeRequest {
    pub code: String,
}

/// Analysis result returned to the caller.
///
/// `optimized_code` and `explanation` are present only when the model
/// honored the structured JSON contract; a plain-text reply yields just
/// `analysis` and `execution_time`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AnalyzeResponse {
    pub analysis: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub optimized_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
    /// Wall-clock seconds spent waiting on the LLM provider
    pub execution_time: f64,
}

impl AnalyzeResponse {
    pub fn plain(analysis: impl Into<String>, execution_time: f64) -> Self {
        Self {
            analysis: analysis.into(),
            optimized_code: None,
            explanation: None,
            execution_time,
        }
    }
}

/// What the model's reply turned out to be once inspected.
#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisOutcome {
    /// The reply was the requested JSON object with all three keys.
    Structured {
        analysis: String,
        optimized_code: String,
        explanation: String,
    },
    /// The reply was not JSON at all; passed through as the analysis text.
    Unstructured { text: String },
}

impl AnalysisOutcome {
    /// Classify raw message content.
    ///
    /// Valid JSON missing any of the three keys is an error rather than a
    /// fallback: the model understood the contract and still broke it.
    pub fn from_content(content: &str) -> AnalysisResult<Self> {
        let parsed: serde_json::Value = match serde_json::from_str(content) {
            Ok(value) => value,
            Err(_) => {
                return Ok(AnalysisOutcome::Unstructured {
                    text: content.to_string(),
                });
            }
        };

        let object = parsed.as_object().ok_or_else(missing_keys_error)?;

        let field = |key: &str| -> AnalysisResult<String> {
            object
                .get(key)
                .and_then(|v| v.as_str())
                .map(str::to_string)
                .ok_or_else(missing_keys_error)
        };

        Ok(AnalysisOutcome::Structured {
            analysis: field("analysis")?,
            optimized_code: field("optimized_code")?,
            explanation: field("explanation")?,
        })
    }

    pub fn into_response(self, execution_time: f64) -> AnalyzeResponse {
        match self {
            AnalysisOutcome::Structured {
                analysis,
                optimized_code,
                explanation,
            } => AnalyzeResponse {
                analysis,
                optimized_code: Some(optimized_code),
                explanation: Some(explanation),
                execution_time,
            },
            AnalysisOutcome::Unstructured { text } => AnalyzeResponse::plain(text, execution_time),
        }
    }
}

fn missing_keys_error() -> AnalysisError {
    AnalysisError::BadResponse("API response JSON is missing required keys.".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_structured_content_extracts_all_keys() {
        let content = r#"{"analysis": "a", "optimized_code": "b", "explanation": "c"}"#;
        let outcome = AnalysisOutcome::from_content(content).unwrap();
        assert_eq!(
            outcome,
            AnalysisOutcome::Structured {
                analysis: "a".to_string(),
                optimized_code: "b".to_string(),
                explanation: "c".to_string(),
            }
        );
    }

    #[test]
    fn test_plain_text_falls_back_to_unstructured() {
        let outcome = AnalysisOutcome::from_content("This loop is O(n^2).").unwrap();
        assert_eq!(
            outcome,
            AnalysisOutcome::Unstructured {
                text: "This loop is O(n^2).".to_string()
            }
        );
    }

    #[test]
    fn test_json_missing_key_is_error() {
        let content = r#"{"analysis": "a", "optimized_code": "b"}"#;
        let err = AnalysisOutcome::from_content(content).unwrap_err();
        assert!(matches!(err, AnalysisError::BadResponse(_)));
        assert!(err.to_string().contains("missing required keys"));
    }

    #[test]
    fn test_json_non_object_is_error() {
        let err = AnalysisOutcome::from_content("[1, 2, 3]").unwrap_err();
        assert!(matches!(err, AnalysisError::BadResponse(_)));
    }

    #[test]
    fn test_unstructured_response_omits_optional_keys() {
        let response = AnalyzeResponse::plain("just text", 1.5);
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["analysis"], "just text");
        assert_eq!(value["execution_time"], 1.5);
        assert!(value.get("optimized_code").is_none());
        assert!(value.get("explanation").is_none());
    }
}
