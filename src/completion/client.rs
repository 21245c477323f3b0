use reqwest::{header, StatusCode};
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::config::{AppConfig, SecretString};
use crate::error::GenerationError;
use crate::model::{ChatMessage, GenerationRequest};

/// JSON body of a chat completion call.
#[derive(Debug, Serialize)]
pub struct CompletionPayload<'a> {
    pub model: &'a str,
    pub messages: &'a [ChatMessage],
    pub temperature: f32,
    pub max_tokens: u32,
}

impl<'a> From<&'a GenerationRequest> for CompletionPayload<'a> {
    fn from(req: &'a GenerationRequest) -> Self {
        Self {
            model: &req.model,
            messages: &req.messages,
            temperature: req.temperature,
            max_tokens: req.max_tokens,
        }
    }
}

const CONTENT_POINTER: &str = "/choices/0/message/content";
const ERROR_MESSAGE_POINTER: &str = "/error/message";

/// Sends one completion request per call to an OpenAI-compatible endpoint.
#[derive(Clone)]
pub struct CompletionClient {
    http: reqwest::Client,
    endpoint: String,
    api_key: SecretString,
    site_url: String,
    app_title: String,
}

impl CompletionClient {
    pub fn new(
        http: reqwest::Client,
        endpoint: impl Into<String>,
        api_key: SecretString,
        site_url: impl Into<String>,
        app_title: impl Into<String>,
    ) -> Self {
        Self {
            http,
            endpoint: endpoint.into(),
            api_key,
            site_url: site_url.into(),
            app_title: app_title.into(),
        }
    }

    pub fn from_config(config: &AppConfig, http: reqwest::Client) -> Self {
        Self::new(
            http,
            config.api_url.clone(),
            config.api_key.clone(),
            config.site_url.clone(),
            config.app_title.clone(),
        )
    }

    /// Issues a single POST and returns the first choice's content untouched.
    pub async fn complete(&self, request: &GenerationRequest) -> Result<String, GenerationError> {
        if self.api_key.is_blank() {
            return Err(GenerationError::missing_api_key());
        }

        debug!(
            endpoint = %self.endpoint,
            model = %request.model,
            max_tokens = request.max_tokens,
            "sending completion request"
        );

        let response = self
            .http
            .post(&self.endpoint)
            .header(header::CONTENT_TYPE, "application/json")
            .header(
                header::AUTHORIZATION,
                format!("Bearer {}", self.api_key.expose()),
            )
            .header("HTTP-Referer", &self.site_url)
            .header("X-Title", &self.app_title)
            .json(&CompletionPayload::from(request))
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        debug!(status = status.as_u16(), bytes = body.len(), "completion response received");

        interpret_response(status, &body)
    }
}

/// Maps an HTTP status and raw body onto the generated text or a typed error.
pub fn interpret_response(status: StatusCode, body: &str) -> Result<String, GenerationError> {
    if status != StatusCode::OK {
        let message = serde_json::from_str::<Value>(body)
            .ok()
            .and_then(|v| {
                v.pointer(ERROR_MESSAGE_POINTER)
                    .and_then(Value::as_str)
                    .map(str::to_string)
            })
            .unwrap_or_else(|| format!("API returned error code: {}", status.as_u16()));
        return Err(GenerationError::Api {
            status: status.as_u16(),
            message,
        });
    }

    // Only the first choice matters; later entries may take any shape.
    let parsed: Value =
        serde_json::from_str(body).map_err(|_| GenerationError::MalformedResponse)?;

    parsed
        .pointer(CONTENT_POINTER)
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or(GenerationError::MalformedResponse)
}
