use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Form, Json,
};
use tracing::warn;

use crate::{
    api::page::PageView,
    api::types::{ArticleForm, GenerateArticleRequest},
    api::AppState,
    error::{GenerationError, InputError},
    input::{parse_length, sanitize_topic, validate_topic},
    model::CompletionResult,
};

/// Why a submission produced no article.
enum Rejection {
    Input(InputError),
    Generation(GenerationError),
}

impl Rejection {
    fn status(&self) -> StatusCode {
        match self {
            Rejection::Input(_) => StatusCode::BAD_REQUEST,
            Rejection::Generation(GenerationError::Configuration(_)) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            Rejection::Generation(_) => StatusCode::BAD_GATEWAY,
        }
    }

    fn user_message(&self) -> String {
        match self {
            Rejection::Input(err) => err.to_string(),
            Rejection::Generation(err) => format!("Error: {err}"),
        }
    }
}

async fn run_generation(
    state: &AppState,
    raw_topic: &str,
    raw_length: Option<&str>,
) -> Result<String, Rejection> {
    let topic = validate_topic(raw_topic).map_err(Rejection::Input)?;
    let length = parse_length(raw_length).map_err(Rejection::Input)?;

    state
        .generator
        .generate(&topic, length)
        .await
        .map_err(|err| {
            warn!(error = %err, upstream = err.is_upstream(), "article generation failed");
            Rejection::Generation(err)
        })
}

fn to_result(outcome: &Result<String, Rejection>) -> CompletionResult {
    match outcome {
        Ok(article) => CompletionResult::ok(article.as_str()),
        Err(rejection) => CompletionResult::failed(rejection.user_message()),
    }
}

pub async fn index(State(state): State<AppState>) -> Result<Html<String>, (StatusCode, String)> {
    let view = PageView {
        length: state.config.default_length,
        ..Default::default()
    };
    state
        .pages
        .render(&view)
        .map(Html)
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))
}

pub async fn submit_form(State(state): State<AppState>, Form(form): Form<ArticleForm>) -> Response {
    let raw_topic = form.topic.as_deref().unwrap_or_default();
    let outcome = run_generation(&state, raw_topic, form.length.as_deref()).await;

    if form.is_ajax() {
        return Json(to_result(&outcome)).into_response();
    }

    let length = parse_length(form.length.as_deref())
        .ok()
        .flatten()
        .unwrap_or(state.config.default_length);

    let (article, error) = match outcome {
        Ok(article) => (Some(article), None),
        Err(rejection) => (None, Some(rejection.user_message())),
    };

    let view = PageView {
        topic: sanitize_topic(raw_topic),
        length,
        article,
        error,
    };

    match state.pages.render(&view) {
        Ok(html) => Html(html).into_response(),
        Err(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response(),
    }
}

pub async fn generate_article(
    State(state): State<AppState>,
    Json(req): Json<GenerateArticleRequest>,
) -> (StatusCode, Json<CompletionResult>) {
    let outcome = run_generation(&state, &req.topic, req.length.as_deref()).await;
    let status = match &outcome {
        Ok(_) => StatusCode::OK,
        Err(rejection) => rejection.status(),
    };
    (status, Json(to_result(&outcome)))
}

pub async fn healthz() -> &'static str {
    "ok"
}
