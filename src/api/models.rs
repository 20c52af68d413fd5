use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Deserialize)]
pub struct ScrapeRequest {
    #[serde(default)]
    pub url: Option<String>,
}

impl ScrapeRequest {
    /// The requested URL, if one was given and is non-empty.
    pub fn url(&self) -> Option<&str> {
        self.url.as_deref().filter(|url| !url.is_empty())
    }
}

#[derive(Debug, Serialize)]
pub struct ScrapeResponse {
    pub success: bool,
    pub content: String,
    pub structured: StructuredContent,
    pub metadata: ScrapeMetadata,
}

#[derive(Debug, Serialize)]
pub struct StructuredContent {
    pub title: String,
    pub description: String,
    pub content: String,
    pub url: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScrapeMetadata {
    pub timestamp: String,
    pub cached: bool,
    pub content_length: usize,
}
