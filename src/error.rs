use axum::{
    response::{IntoResponse, Response},
    http::StatusCode,
};

use crate::api::response;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("URL is required")]
    MissingUrl,

    #[error("{0}")]
    ConfigError(String),

    /// Provider answered with a non-success status; `details` is its raw body.
    #[error("Scrape failed")]
    ScrapeFailed { details: String },

    #[error("Invalid scrape response")]
    InvalidResponse,

    #[error("{0}")]
    Unexpected(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::MissingUrl => StatusCode::BAD_REQUEST,
            AppError::ConfigError(_)
            | AppError::ScrapeFailed { .. }
            | AppError::InvalidResponse
            | AppError::Unexpected(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            AppError::Unexpected(msg) if msg.trim().is_empty() => "Unknown error".to_string(),
            other => other.to_string(),
        };
        let details = match self {
            AppError::ScrapeFailed { details } => Some(details),
            _ => None,
        };

        response::error(status, message, details).into_response()
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::Unexpected(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Unexpected(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statuses_follow_error_kind() {
        assert_eq!(AppError::MissingUrl.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            AppError::ConfigError("FIRECRAWL_API_KEY not set".into()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(AppError::InvalidResponse.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn messages_match_envelope_text() {
        assert_eq!(AppError::MissingUrl.to_string(), "URL is required");
        assert_eq!(
            AppError::ScrapeFailed { details: "rate limited".into() }.to_string(),
            "Scrape failed"
        );
        assert_eq!(AppError::InvalidResponse.to_string(), "Invalid scrape response");
    }
}
