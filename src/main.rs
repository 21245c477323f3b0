use anyhow::Context;
use tokio::net::TcpListener;
use tracing::{info, warn};

use article_generator::{api, init_tracing, AppConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // -----------------------------
    // Logging
    // -----------------------------
    init_tracing();

    // -----------------------------
    // Config / shared state
    // -----------------------------
    let config = AppConfig::from_env()?;
    if config.api_key.is_blank() {
        warn!("OPENROUTER_API_KEY is not set; every generation will fail until it is configured");
    }
    info!(
        model = %config.default_model,
        temperature = config.temperature,
        default_length = %config.default_length,
        "configuration loaded"
    );

    let addr = config.bind_addr.clone();
    let state = api::AppState::new(config)?;

    // -----------------------------
    // Router
    // -----------------------------
    let app = api::router(state);

    info!("HTTP listening on http://{addr}");
    info!("JSON API at http://{addr}/api/articles");

    let listener = TcpListener::bind(addr.as_str())
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}
