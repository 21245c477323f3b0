pub mod builder;
pub mod client;

use anyhow::{Context, Result};
use tracing::{info, Instrument};
use uuid::Uuid;

pub use builder::RequestBuilder;
pub use client::{interpret_response, CompletionClient, CompletionPayload};

use crate::config::AppConfig;
use crate::error::GenerationError;
use crate::model::{ArticleLength, CompletionResult};

/// Builds the request for a topic and runs it against the completion endpoint.
#[derive(Clone)]
pub struct ArticleGenerator {
    builder: RequestBuilder,
    client: CompletionClient,
}

impl ArticleGenerator {
    pub fn new(builder: RequestBuilder, client: CompletionClient) -> Self {
        Self { builder, client }
    }

    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .build()
            .context("failed to build HTTP client")?;
        Ok(Self::with_http_client(config, http))
    }

    pub fn with_http_client(config: &AppConfig, http: reqwest::Client) -> Self {
        Self::new(
            RequestBuilder::from_config(config),
            CompletionClient::from_config(config, http),
        )
    }

    pub fn builder(&self) -> &RequestBuilder {
        &self.builder
    }

    pub async fn generate(
        &self,
        topic: &str,
        length: Option<ArticleLength>,
    ) -> Result<String, GenerationError> {
        let request = self.builder.build(topic, length);
        let span = tracing::info_span!(
            "generate",
            request_id = %Uuid::new_v4(),
            length = %request.length,
            model = %request.model,
        );

        async {
            let article = self.client.complete(&request).await?;
            info!(chars = article.len(), "article generated");
            Ok::<_, GenerationError>(article)
        }
        .instrument(span)
        .await
    }

    pub async fn generate_result(
        &self,
        topic: &str,
        length: Option<ArticleLength>,
    ) -> CompletionResult {
        self.generate(topic, length).await.into()
    }
}
