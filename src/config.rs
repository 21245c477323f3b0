use std::fmt;

use anyhow::{bail, Context, Result};
use tracing::warn;

use crate::model::ArticleLength;

pub const DEFAULT_API_URL: &str = "https://openrouter.ai/api/v1/chat/completions";
pub const DEFAULT_MODEL: &str = "openai/gpt-3.5-turbo";
pub const DEFAULT_TEMPERATURE: f32 = 0.7;
pub const DEFAULT_SITE_URL: &str = "http://localhost";
pub const DEFAULT_APP_TITLE: &str = "Article Generator";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

/// Holds a credential and keeps it out of `Debug` output and logs.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct SecretString(String);

impl SecretString {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Only for building the `Authorization` header.
    pub fn expose(&self) -> &str {
        &self.0
    }

    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Debug for SecretString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[REDACTED]")
    }
}

impl From<&str> for SecretString {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Process-wide settings. Loaded once at startup and shared read-only.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_key: SecretString,
    pub api_url: String,
    pub default_model: String,
    pub temperature: f32,
    pub default_length: ArticleLength,
    pub site_url: String,
    pub app_title: String,
    pub bind_addr: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_key: SecretString::default(),
            api_url: DEFAULT_API_URL.to_string(),
            default_model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            default_length: ArticleLength::Medium,
            site_url: DEFAULT_SITE_URL.to_string(),
            app_title: DEFAULT_APP_TITLE.to_string(),
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
        }
    }
}

impl AppConfig {
    /// Reads the environment (after `.env` has been loaded by the caller).
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| dotenvy::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let defaults = Self::default();

        let temperature = match get("ARTICLE_TEMPERATURE") {
            Some(raw) => {
                let value = raw
                    .parse::<f32>()
                    .with_context(|| format!("ARTICLE_TEMPERATURE is not a number: {raw}"))?;
                if !(0.0..=2.0).contains(&value) {
                    bail!("ARTICLE_TEMPERATURE must be between 0 and 2, got {value}");
                }
                value
            }
            None => defaults.temperature,
        };

        let default_length = match get("ARTICLE_DEFAULT_LENGTH") {
            Some(raw) => {
                if raw.parse::<ArticleLength>().is_err() {
                    warn!(value = %raw, "unknown ARTICLE_DEFAULT_LENGTH, using medium");
                }
                ArticleLength::lenient(&raw)
            }
            None => defaults.default_length,
        };

        Ok(Self {
            api_key: SecretString::new(get("OPENROUTER_API_KEY").unwrap_or_default()),
            api_url: get("OPENROUTER_API_URL").unwrap_or(defaults.api_url),
            default_model: get("ARTICLE_DEFAULT_MODEL").unwrap_or(defaults.default_model),
            temperature,
            default_length,
            site_url: get("ARTICLE_SITE_URL").unwrap_or(defaults.site_url),
            app_title: get("ARTICLE_APP_TITLE").unwrap_or(defaults.app_title),
            bind_addr: get("ARTICLE_BIND_ADDR").unwrap_or(defaults.bind_addr),
        })
    }
}
