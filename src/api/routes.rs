use std::any::Any;

use axum::{
    routing::post,
    Router,
    body::Bytes,
    extract::State,
    response::{IntoResponse, Response},
};
use chrono::{SecondsFormat, Utc};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{CorsLayer, Any as AnyCors};
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use crate::error::{Result, AppError};
use crate::api::models::{ScrapeMetadata, ScrapeRequest, ScrapeResponse, StructuredContent};
use crate::api::response;
use crate::firecrawl::scrape_url;
use crate::sanitize::sanitize_opt;
use crate::AppState;

pub const SCRAPE_PATH: &str = "/api/scrape-url-enhanced";

pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route(SCRAPE_PATH, post(scrape_handler))
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(AnyCors)
                .allow_methods(AnyCors)
                .allow_headers(AnyCors),
        )
        .with_state(app_state)
}

async fn scrape_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> Response {
    let start_time = std::time::Instant::now();

    // Any content type is accepted
    let result = match serde_json::from_slice::<ScrapeRequest>(&body) {
        Ok(req) => process_scrape_request(&state, &req).await,
        Err(err) => Err(err.into()),
    };

    info!("Request processing took: {:?}", start_time.elapsed());

    match result {
        Ok(response_data) => response::success(response_data).into_response(),
        Err(err) => {
            match &err {
                AppError::MissingUrl => info!("Rejected request without URL"),
                AppError::ConfigError(msg) => error!("Config error: {}", msg),
                AppError::ScrapeFailed { .. } | AppError::InvalidResponse => {
                    error!("Scrape error: {}", err)
                }
                AppError::Unexpected(msg) => error!("Fatal error: {}", msg),
            }
            err.into_response()
        }
    }
}

async fn process_scrape_request(state: &AppState, req: &ScrapeRequest) -> Result<ScrapeResponse> {
    let url = req.url().ok_or(AppError::MissingUrl)?;
    let api_key = state.config.api_key()?;

    info!(%url, "Scraping");
    let page = scrape_url(&state.config.firecrawl_api_url, api_key, url).await?;

    let title = sanitize_opt(page.title());
    let description = sanitize_opt(page.description());
    let markdown = sanitize_opt(page.markdown.as_deref());

    let content = format_content(&title, &description, url, &markdown);
    let content_length = js_length(&content);

    Ok(ScrapeResponse {
        success: true,
        content,
        structured: StructuredContent {
            title,
            description,
            content: markdown,
            url: url.to_string(),
        },
        metadata: ScrapeMetadata {
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            cached: page.is_cached(),
            content_length,
        },
    })
}

/// Flattens the page into labeled sections for display.
fn format_content(title: &str, description: &str, url: &str, markdown: &str) -> String {
    format!("Title: {title}\nDescription: {description}\nURL: {url}\n\nContent:\n{markdown}")
        .trim()
        .to_string()
}

/// Length in UTF-16 code units, the way browser clients measure `content.length`.
fn js_length(text: &str) -> usize {
    text.encode_utf16().count()
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let message = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        String::new()
    };

    error!("Handler panicked: {}", message);
    AppError::Unexpected(message).into_response()
}
