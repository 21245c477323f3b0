use crate::config::AppConfig;
use crate::model::{ArticleLength, ChatMessage, GenerationRequest};
use crate::prompts;

/// Turns a sanitized topic and an optional length into a completion request.
#[derive(Debug, Clone)]
pub struct RequestBuilder {
    model: String,
    temperature: f32,
    default_length: ArticleLength,
}

impl RequestBuilder {
    pub fn new(model: impl Into<String>, temperature: f32, default_length: ArticleLength) -> Self {
        Self {
            model: model.into(),
            temperature,
            default_length,
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(
            config.default_model.clone(),
            config.temperature,
            config.default_length,
        )
    }

    pub fn build(&self, topic: &str, length: Option<ArticleLength>) -> GenerationRequest {
        let length = length.unwrap_or(self.default_length);
        let word_count = length.word_count();

        GenerationRequest {
            topic: topic.to_string(),
            length,
            word_count,
            model: self.model.clone(),
            temperature: self.temperature,
            max_tokens: length.max_tokens(),
            messages: vec![
                ChatMessage::system(prompts::system_prompt(topic, word_count)),
                ChatMessage::user(prompts::user_prompt(topic)),
            ],
        }
    }
}

impl Default for RequestBuilder {
    fn default() -> Self {
        Self::from_config(&AppConfig::default())
    }
}
