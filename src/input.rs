//! Caller-side input handling shared by the web form and the CLI.
//!
//! The generation core uses the topic verbatim, so everything that reaches
//! it goes through [`validate_topic`] first.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::InputError;
use crate::model::ArticleLength;

pub const TOPIC_MIN_CHARS: usize = 2;
pub const TOPIC_MAX_CHARS: usize = 100;

// A tag opens with `<` directly followed by a non-space character; an
// unterminated tag swallows the rest of the input.
static TAG_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<[^\s>][^>]*(?:>|$)").expect("tag pattern"));

static DISALLOWED_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"[^\p{L}\p{N}\s\-.,?!;:'"()]+"#).expect("topic character class")
});

/// Trims, strips markup, and drops characters outside the allowed class.
pub fn sanitize_topic(raw: &str) -> String {
    let without_tags = TAG_RE.replace_all(raw.trim(), "");
    DISALLOWED_RE
        .replace_all(&without_tags, "")
        .trim()
        .to_string()
}

pub fn validate_topic(raw: &str) -> Result<String, InputError> {
    let topic = sanitize_topic(raw);
    if topic.is_empty() {
        return Err(InputError::EmptyTopic);
    }
    let chars = topic.chars().count();
    if !(TOPIC_MIN_CHARS..=TOPIC_MAX_CHARS).contains(&chars) {
        return Err(InputError::InvalidTopic);
    }
    Ok(topic)
}

/// Absent or blank means "use the configured default"; anything else must
/// name a known length.
pub fn parse_length(raw: Option<&str>) -> Result<Option<ArticleLength>, InputError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(name) => name.parse().map(Some),
    }
}
