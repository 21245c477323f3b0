use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::InputError;
use crate::model::message::ChatMessage;

/// Rough tokens-per-word multiplier used to size the completion budget.
pub const TOKENS_PER_WORD: u32 = 3;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum ArticleLength {
    Short,
    #[default]
    Medium,
    Long,
}

impl ArticleLength {
    pub const ALL: [ArticleLength; 3] = [Self::Short, Self::Medium, Self::Long];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Short => "short",
            Self::Medium => "medium",
            Self::Long => "long",
        }
    }

    pub fn word_count(&self) -> u32 {
        match self {
            Self::Short => 300,
            Self::Medium => 600,
            Self::Long => 1000,
        }
    }

    pub fn max_tokens(&self) -> u32 {
        self.word_count() * TOKENS_PER_WORD
    }

    /// Maps any name that is not a known length to `Medium`.
    pub fn lenient(name: &str) -> Self {
        name.parse().unwrap_or(Self::Medium)
    }

    /// Human label used by the form's length selector.
    pub fn label(&self) -> String {
        let name = match self {
            Self::Short => "Short",
            Self::Medium => "Medium",
            Self::Long => "Long",
        };
        format!("{name} (~{} words)", self.word_count())
    }
}

impl fmt::Display for ArticleLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ArticleLength {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "short" => Ok(Self::Short),
            "medium" => Ok(Self::Medium),
            "long" => Ok(Self::Long),
            other => Err(InputError::InvalidLength(other.to_string())),
        }
    }
}

/// A fully assembled completion request. Built fresh for every generation
/// and dropped once the response has been read.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    pub topic: String,
    pub length: ArticleLength,
    pub word_count: u32,
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
    pub messages: Vec<ChatMessage>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_counts_are_fixed() {
        assert_eq!(ArticleLength::Short.word_count(), 300);
        assert_eq!(ArticleLength::Medium.word_count(), 600);
        assert_eq!(ArticleLength::Long.word_count(), 1000);
    }

    #[test]
    fn token_budget_is_three_per_word() {
        for length in ArticleLength::ALL {
            assert_eq!(length.max_tokens(), length.word_count() * 3);
        }
        assert_eq!(ArticleLength::Long.max_tokens(), 3000);
    }

    #[test]
    fn strict_parse_rejects_unknown_names() {
        assert_eq!("Short".parse::<ArticleLength>().unwrap(), ArticleLength::Short);
        assert_eq!(" long ".parse::<ArticleLength>().unwrap(), ArticleLength::Long);
        assert!(matches!(
            "epic".parse::<ArticleLength>(),
            Err(InputError::InvalidLength(name)) if name == "epic"
        ));
    }

    #[test]
    fn lenient_parse_falls_back_to_medium() {
        assert_eq!(ArticleLength::lenient("epic"), ArticleLength::Medium);
        assert_eq!(ArticleLength::lenient(""), ArticleLength::Medium);
        assert_eq!(ArticleLength::lenient("epic").word_count(), 600);
        assert_eq!(ArticleLength::lenient("short"), ArticleLength::Short);
    }

    #[test]
    fn labels_mention_word_count() {
        assert_eq!(ArticleLength::Short.label(), "Short (~300 words)");
        assert_eq!(ArticleLength::Long.label(), "Long (~1000 words)");
    }
}
