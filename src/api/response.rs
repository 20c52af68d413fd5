use serde::Serialize;
use axum::Json;
use axum::http::StatusCode;

use crate::api::models::ScrapeResponse;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

pub fn success(data: ScrapeResponse) -> (StatusCode, Json<ScrapeResponse>) {
    (StatusCode::OK, Json(data))
}

pub fn error(
    status: StatusCode,
    message: String,
    details: Option<String>,
) -> (StatusCode, Json<ErrorResponse>) {
    (
        status,
        Json(ErrorResponse {
            success: false,
            error: message,
            details,
        }),
    )
}
