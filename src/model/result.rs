use serde::{Deserialize, Serialize};

use crate::error::GenerationError;

/// Flattened outcome handed to the page script: either the article text or
/// an error message, never both.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct CompletionResult {
    pub success: bool,
    #[serde(rename = "article")]
    pub text: String,
    #[serde(rename = "error")]
    pub error_message: String,
}

impl CompletionResult {
    pub fn ok(text: impl Into<String>) -> Self {
        Self {
            success: true,
            text: text.into(),
            error_message: String::new(),
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            text: String::new(),
            error_message: message.into(),
        }
    }
}

impl From<Result<String, GenerationError>> for CompletionResult {
    fn from(result: Result<String, GenerationError>) -> Self {
        match result {
            Ok(text) => Self::ok(text),
            Err(err) => Self::failed(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_page_field_names() {
        let value = serde_json::to_value(CompletionResult::ok("Title\n\nBody")).unwrap();
        assert_eq!(value["success"], true);
        assert_eq!(value["article"], "Title\n\nBody");
        assert_eq!(value["error"], "");
    }

    #[test]
    fn failure_carries_only_the_message() {
        let result: CompletionResult = Err(GenerationError::MalformedResponse).into();
        assert!(!result.success);
        assert!(result.text.is_empty());
        assert_eq!(result.error_message, "Unexpected API response format");
    }
}
