//! Mapping from proxy failures to HTTP responses.

use api_shared::ErrorRes;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use motivate_core::MotivateError;

/// Message returned alongside a forwarded upstream error.
pub const UPSTREAM_FAILURE_MESSAGE: &str = "Failed to generate phrases";

/// Every way the proxy function can fail.
#[derive(Debug, PartialEq, Eq)]
pub enum ProxyError {
    /// `word` or `apiKey` missing or blank (400).
    MissingFields,
    /// The generation API answered with a non-success status; forwarded as-is.
    Upstream { status: u16, body: String },
    /// Anything else (500).
    Internal(String),
}

impl From<MotivateError> for ProxyError {
    fn from(err: MotivateError) -> Self {
        match err {
            MotivateError::MissingFields => ProxyError::MissingFields,
            MotivateError::GenerationStatus { status, body } => {
                ProxyError::Upstream { status, body }
            }
            other => ProxyError::Internal(other.to_string()),
        }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        match self {
            ProxyError::MissingFields => (
                StatusCode::BAD_REQUEST,
                Json(ErrorRes::new(MotivateError::MissingFields.to_string())),
            )
                .into_response(),
            ProxyError::Upstream { status, body } => {
                let status = StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY);
                (
                    status,
                    Json(ErrorRes::with_details(UPSTREAM_FAILURE_MESSAGE, body)),
                )
                    .into_response()
            }
            ProxyError::Internal(message) => {
                let message = if message.trim().is_empty() {
                    "Internal server error".to_string()
                } else {
                    message
                };
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorRes::new(message)),
                )
                    .into_response()
            }
        }
    }
}
