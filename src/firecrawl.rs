use std::time::Duration;

use once_cell::sync::Lazy;
use reqwest::{Client, ClientBuilder};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, error, warn};

use crate::error::{AppError, Result};

// Shared client so connections to the provider are pooled
static CLIENT: Lazy<Client> = Lazy::new(|| {
    ClientBuilder::new()
        .connect_timeout(Duration::from_secs(10))
        .pool_max_idle_per_host(10)
        .build()
        .expect("Failed to build HTTP client")
});

const SCRAPE_TIMEOUT_MS: u64 = 60_000;
const WAIT_FOR_MS: u64 = 5_000;
const CACHE_MAX_AGE_MS: u64 = 3_600_000;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScrapeOptions<'a> {
    pub url: &'a str,
    pub formats: &'static [&'static str],
    pub timeout: u64,
    pub wait_for: u64,
    #[serde(rename = "render_js")]
    pub render_js: bool,
    pub block_ads: bool,
    pub max_age: u64,
}

impl<'a> ScrapeOptions<'a> {
    pub fn for_url(url: &'a str) -> Self {
        Self {
            url,
            formats: &["markdown"],
            timeout: SCRAPE_TIMEOUT_MS,
            wait_for: WAIT_FOR_MS,
            render_js: true,
            block_ads: true,
            max_age: CACHE_MAX_AGE_MS,
        }
    }
}

/// Page fields pulled out of a Firecrawl reply. Missing or falsy values are `None`.
#[derive(Debug, Default, PartialEq)]
pub struct ScrapedPage {
    pub markdown: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub cached: bool,
}

impl ScrapedPage {
    /// Reads a reply body, accepting it when `success` and `data` are both truthy.
    pub fn from_reply(reply: &Value) -> Result<Self> {
        let success = reply.get("success").is_some_and(is_truthy);
        let data = reply.get("data").filter(|data| is_truthy(data));

        let Some(data) = data.filter(|_| success) else {
            warn!(success, "Firecrawl reply missing success flag or data");
            return Err(AppError::InvalidResponse);
        };

        let metadata = data.get("metadata");
        Ok(ScrapedPage {
            markdown: text_field(data.get("markdown"))?,
            title: text_field(metadata.and_then(|m| m.get("title")))?,
            description: text_field(metadata.and_then(|m| m.get("description")))?,
            cached: data.get("cached").is_some_and(is_truthy),
        })
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn is_cached(&self) -> bool {
        self.cached
    }
}

/// JavaScript truthiness for a JSON value.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

// Falsy values read as absent; a truthy non-string breaks the reply contract.
fn text_field(value: Option<&Value>) -> Result<Option<String>> {
    match value {
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(other) if is_truthy(other) => {
            warn!(value = %other, "Firecrawl reply has a non-text field");
            Err(AppError::InvalidResponse)
        }
        _ => Ok(None),
    }
}

/// Issues a single scrape request. Non-success statuses and replies missing
/// `success`/`data` come back as errors; nothing is retried.
pub async fn scrape_url(api_url: &str, api_key: &str, url: &str) -> Result<ScrapedPage> {
    let endpoint = format!("{}/v1/scrape", api_url.trim_end_matches('/'));
    debug!(%endpoint, %url, "sending scrape request");

    let res = CLIENT
        .post(&endpoint)
        .bearer_auth(api_key)
        .json(&ScrapeOptions::for_url(url))
        .send()
        .await?;

    let status = res.status();
    if !status.is_success() {
        let details = res.text().await?;
        error!(%status, body = %details, "Firecrawl scrape failed");
        return Err(AppError::ScrapeFailed { details });
    }

    let reply: Value = res.json().await?;
    ScrapedPage::from_reply(&reply)
}
