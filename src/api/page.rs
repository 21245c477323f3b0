use anyhow::{Context, Result};
use minijinja::Environment;
use serde::Serialize;

use crate::model::ArticleLength;

const INDEX_TEMPLATE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/templates/index.html"
));

#[derive(Debug, Serialize)]
struct LengthOption {
    value: &'static str,
    label: String,
}

/// What the form page shows after a (possibly failed) submission.
#[derive(Debug, Default)]
pub struct PageView {
    pub topic: String,
    pub length: ArticleLength,
    pub article: Option<String>,
    pub error: Option<String>,
}

#[derive(Serialize)]
struct PageContext<'a> {
    title: &'a str,
    topic: &'a str,
    length: &'static str,
    lengths: Vec<LengthOption>,
    article: Option<&'a str>,
    error: Option<&'a str>,
}

/// Renders the single form page. `.html` templates are auto-escaped.
pub struct PageRenderer {
    env: Environment<'static>,
    title: String,
}

impl PageRenderer {
    pub fn new(title: &str) -> Result<Self> {
        let mut env = Environment::new();
        env.add_template("index.html", INDEX_TEMPLATE)
            .context("index template failed to parse")?;
        Ok(Self {
            env,
            title: title.to_string(),
        })
    }

    pub fn render(&self, view: &PageView) -> Result<String> {
        let ctx = PageContext {
            title: &self.title,
            topic: &view.topic,
            length: view.length.as_str(),
            lengths: ArticleLength::ALL
                .iter()
                .map(|l| LengthOption {
                    value: l.as_str(),
                    label: l.label(),
                })
                .collect(),
            article: view.article.as_deref(),
            error: view.error.as_deref(),
        };
        self.env
            .get_template("index.html")?
            .render(ctx)
            .context("failed to render index page")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_page_selects_length_and_hides_result() {
        let html = PageRenderer::new("Article Generator")
            .unwrap()
            .render(&PageView {
                length: ArticleLength::Long,
                ..Default::default()
            })
            .unwrap();
        assert!(html.contains("<title>Article Generator</title>"));
        assert!(html.contains(r#"<option value="long" selected>Long (~1000 words)</option>"#));
        assert!(!html.contains(r#"class="error""#));
        assert!(html.contains(r#"id="result" class="result" style="display:none""#));
    }

    #[test]
    fn article_is_escaped_and_keeps_line_breaks() {
        let html = PageRenderer::new("Article Generator")
            .unwrap()
            .render(&PageView {
                topic: "Tides".into(),
                article: Some("# Tides\n<b>Moon & sun".into()),
                ..Default::default()
            })
            .unwrap();
        assert!(html.contains("# Tides<br>&lt;b&gt;Moon &amp; sun"));
        assert!(html.contains(r#"value="Tides""#));
    }

    #[test]
    fn error_message_is_shown_escaped() {
        let html = PageRenderer::new("Article Generator")
            .unwrap()
            .render(&PageView {
                error: Some("Error: <oops>".into()),
                ..Default::default()
            })
            .unwrap();
        assert!(html.contains(r#"<div class="error">Error: &lt;oops&gt;</div>"#));
    }
}
