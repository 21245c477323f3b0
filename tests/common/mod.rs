#![allow(dead_code)]

use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc, Mutex,
};

use article_generator::{
    api::{self, AppState},
    config::SecretString,
    AppConfig, ArticleGenerator,
};
use axum::{body::Bytes, extract::State, http::HeaderMap, http::StatusCode, routing::post, Router};
use tokio::net::TcpListener;

pub const STUB_PATH: &str = "/api/v1/chat/completions";

pub struct Captured {
    pub headers: HeaderMap,
    pub body: serde_json::Value,
}

/// Stand-in for the completion endpoint: replies with a canned status and
/// body and records what it received.
#[derive(Clone)]
pub struct Stub {
    pub url: String,
    hits: Arc<AtomicUsize>,
    last: Arc<Mutex<Option<Captured>>>,
    status: StatusCode,
    body: Arc<String>,
}

impl Stub {
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }

    pub fn take_last(&self) -> Captured {
        self.last
            .lock()
            .unwrap()
            .take()
            .expect("stub was never called")
    }
}

async fn completions(
    State(stub): State<Stub>,
    headers: HeaderMap,
    body: Bytes,
) -> (StatusCode, String) {
    stub.hits.fetch_add(1, Ordering::SeqCst);
    let body_json = serde_json::from_slice(&body).unwrap_or(serde_json::Value::Null);
    *stub.last.lock().unwrap() = Some(Captured {
        headers,
        body: body_json,
    });
    (stub.status, stub.body.as_ref().clone())
}

pub async fn spawn_stub(status: StatusCode, body: &str) -> Stub {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let stub = Stub {
        url: format!("http://{addr}{STUB_PATH}"),
        hits: Arc::new(AtomicUsize::new(0)),
        last: Arc::new(Mutex::new(None)),
        status,
        body: Arc::new(body.to_string()),
    };
    let app = Router::new()
        .route(STUB_PATH, post(completions))
        .with_state(stub.clone());
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    stub
}

pub fn success_body(content: &str) -> String {
    serde_json::json!({
        "id": "gen-123",
        "model": "openai/gpt-3.5-turbo",
        "choices": [
            {"index": 0, "message": {"role": "assistant", "content": content}, "finish_reason": "stop"}
        ]
    })
    .to_string()
}

pub fn config_for(stub: &Stub, api_key: &str) -> AppConfig {
    AppConfig {
        api_key: SecretString::new(api_key),
        api_url: stub.url.clone(),
        ..Default::default()
    }
}

/// Loopback-only client; ignores any proxy set in the environment.
pub fn http() -> reqwest::Client {
    reqwest::Client::builder().no_proxy().build().unwrap()
}

pub fn generator_for(config: &AppConfig) -> ArticleGenerator {
    ArticleGenerator::with_http_client(config, http())
}

/// Serves the full web router on an ephemeral port; returns its base URL.
pub async fn spawn_app(config: AppConfig) -> String {
    let generator = generator_for(&config);
    let state = AppState::with_generator(config, generator).unwrap();
    let app = api::router(state);
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}
