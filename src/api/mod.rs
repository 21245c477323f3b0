use std::sync::Arc;

use anyhow::Result;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::completion::ArticleGenerator;
use crate::config::AppConfig;

pub mod handlers;
pub mod page;
pub mod types;

use page::PageRenderer;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub generator: Arc<ArticleGenerator>,
    pub pages: Arc<PageRenderer>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Result<Self> {
        let generator = ArticleGenerator::from_config(&config)?;
        Self::with_generator(config, generator)
    }

    pub fn with_generator(config: AppConfig, generator: ArticleGenerator) -> Result<Self> {
        let pages = PageRenderer::new(&config.app_title)?;
        Ok(Self {
            config: Arc::new(config),
            generator: Arc::new(generator),
            pages: Arc::new(pages),
        })
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        // Form page and its submission (plain POST or AJAX)
        .route("/", get(handlers::index).post(handlers::submit_form))
        .route("/api/articles", post(handlers::generate_article))
        .route("/healthz", get(handlers::healthz))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_headers(Any)
                .allow_methods(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
