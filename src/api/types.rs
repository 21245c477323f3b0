use serde::Deserialize;

/// Fields posted by the form page. Everything is optional so that missing
/// fields turn into validation messages instead of extractor rejections.
#[derive(Debug, Default, Deserialize)]
pub struct ArticleForm {
    #[serde(default)]
    pub topic: Option<String>,
    #[serde(default)]
    pub length: Option<String>,
    #[serde(default)]
    pub ajax_request: Option<String>,
}

impl ArticleForm {
    pub fn is_ajax(&self) -> bool {
        self.ajax_request.as_deref() == Some("generate")
    }
}

#[derive(Debug, Deserialize)]
pub struct GenerateArticleRequest {
    #[serde(default)]
    pub topic: String,
    #[serde(default)]
    pub length: Option<String>,
}
