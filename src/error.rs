/*
 * Responsibility
 * - App-wide AppError
 * - IntoResponse (HTTP status + `{"error": "..."}` body)
 * - Uniform conversion from extraction / completion errors
 * - Middleware failures (timeout, panic) use the same body shape
 */
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::services::extraction::ExtractionError;

pub const MISSING_TEXT: &str = "Missing 'text' parameter";

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    InvalidInput(String),
    #[error("Unauthorized")]
    Unauthorized,
    // Completion provider could not be constructed at startup.
    #[error("LLM initialization failed")]
    ServiceUnavailable,
    // The outbound completion call failed.
    #[error("{0}")]
    ServiceError(String),
    #[error("request body too large")]
    PayloadTooLarge,
    #[error("request timed out")]
    Timeout,
    #[error("internal server error")]
    Internal,
}

impl AppError {
    pub fn missing_text() -> Self {
        Self::InvalidInput(MISSING_TEXT.to_string())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized => StatusCode::UNAUTHORIZED,
            AppError::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::Timeout => StatusCode::REQUEST_TIMEOUT,
            AppError::ServiceUnavailable | AppError::ServiceError(_) | AppError::Internal => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }

        let body = ErrorResponse {
            error: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<ExtractionError> for AppError {
    fn from(e: ExtractionError) -> Self {
        match e {
            ExtractionError::EmptyText => AppError::missing_text(),
            ExtractionError::Unavailable(_) => AppError::ServiceUnavailable,
            ExtractionError::Completion(inner) => AppError::ServiceError(inner.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::completion::CompletionError;

    #[test]
    fn statuses_and_messages() {
        assert_eq!(AppError::missing_text().status(), StatusCode::BAD_REQUEST);
        assert_eq!(AppError::missing_text().to_string(), MISSING_TEXT);
        assert_eq!(AppError::Unauthorized.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(AppError::Unauthorized.to_string(), "Unauthorized");
        assert_eq!(
            AppError::ServiceUnavailable.status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(AppError::PayloadTooLarge.status(), StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(AppError::Timeout.status(), StatusCode::REQUEST_TIMEOUT);
        assert_eq!(AppError::Timeout.to_string(), "request timed out");
        assert_eq!(AppError::Internal.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn completion_failures_keep_the_upstream_message() {
        let err: AppError = ExtractionError::Completion(CompletionError::Network(
            "connection refused".into(),
        ))
        .into();

        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.to_string(), "network error: connection refused");
    }
}
