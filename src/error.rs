use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid walk parameters: {0}")]
    InvalidParameters(String),

    #[error("Invalid locations: {0}")]
    InvalidLocations(String),

    #[error("Too many locations: {0}")]
    TooManyLocations(String),

    #[error("Directions provider error: {0}")]
    Directions(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

// Convert AppError into HTTP responses
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::InvalidParameters(ref e) => (StatusCode::BAD_REQUEST, e.as_str()),
            AppError::InvalidLocations(ref e) => (StatusCode::BAD_REQUEST, e.as_str()),
            AppError::TooManyLocations(ref e) => (StatusCode::BAD_REQUEST, e.as_str()),
            AppError::Directions(ref e) => {
                // Only reachable when a handler calls the provider directly;
                // the composer absorbs these into straight-line fallbacks.
                tracing::error!("Directions provider error: {}", e);
                (StatusCode::BAD_GATEWAY, "Routing service error")
            }
            AppError::InvalidRequest(ref e) => (StatusCode::BAD_REQUEST, e.as_str()),
        };

        let body = Json(json!({
            "error": status.canonical_reason().unwrap_or("Unknown error"),
            "message": error_message,
        }));

        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
