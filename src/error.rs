use thiserror::Error;

/// Failure kinds of a single generation. Callers match on the variant to
/// decide how to present the message.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("{0}")]
    Configuration(String),

    #[error("API Request failed: {0}")]
    Transport(String),

    #[error("{message}")]
    Api { status: u16, message: String },

    #[error("Unexpected API response format")]
    MalformedResponse,
}

impl GenerationError {
    pub fn missing_api_key() -> Self {
        Self::Configuration("OpenRouter API key is not configured".into())
    }

    /// True for failures caused by the remote side rather than local setup.
    pub fn is_upstream(&self) -> bool {
        !matches!(self, Self::Configuration(_))
    }
}

impl From<reqwest::Error> for GenerationError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err.to_string())
    }
}

/// Rejections raised at the caller boundary before the core is invoked.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("Please enter a topic")]
    EmptyTopic,

    #[error("Please enter a valid topic (2-100 characters, no special characters)")]
    InvalidTopic,

    #[error("Unknown article length: {0}")]
    InvalidLength(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_displays_provider_message_verbatim() {
        let err = GenerationError::Api {
            status: 401,
            message: "bad key".into(),
        };
        assert_eq!(err.to_string(), "bad key");
        assert!(err.is_upstream());
    }

    #[test]
    fn configuration_error_is_local() {
        let err = GenerationError::missing_api_key();
        assert_eq!(err.to_string(), "OpenRouter API key is not configured");
        assert!(!err.is_upstream());
    }
}
