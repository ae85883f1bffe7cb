//! Error types for the analyzer service.
//!
//! `AppError` covers the transport-facing failure modes; the scoring engine
//! itself is total and never fails. The `IntoResponse` impl maps each
//! variant onto the public `{"message": ...}` error body.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    /// Request body did not contain a usable absolute URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Outbound request failed (network error, timeout, bad scheme)
    #[error("Failed to fetch website: {0}")]
    Fetch(#[from] reqwest::Error),

    /// Upstream answered with a non-2xx status
    #[error("Failed to fetch website: {status} {reason}")]
    UpstreamStatus { status: u16, reason: String },

    /// Anything unexpected
    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, Serialize)]
struct ErrorBody {
    message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::InvalidUrl(_) | AppError::Fetch(_) | AppError::UpstreamStatus { .. } => {
                (StatusCode::BAD_REQUEST, self.to_string())
            }
            AppError::Other(e) => {
                tracing::error!("unexpected analysis failure: {:#}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to analyze website. Please check the URL and try again.".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { message })).into_response()
    }
}
