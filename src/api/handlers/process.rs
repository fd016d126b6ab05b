/*
 * Responsibility
 * - POST /process
 * - Json body -> DTO validation -> ExtractionService::extract
 * - Model output is returned as-is (never parsed or reshaped)
 */
use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};

use crate::{api::dto::process::ProcessRequest, error::AppError, state::AppState};

pub async fn process(
    State(state): State<AppState>,
    payload: Result<Json<ProcessRequest>, JsonRejection>,
) -> Result<Response, AppError> {
    let Json(req) = match payload {
        Ok(json) => json,
        Err(rejection) if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE => {
            tracing::warn!(reason = %rejection.body_text(), "invalid request: body too large");
            return Err(AppError::PayloadTooLarge);
        }
        Err(rejection) => {
            tracing::warn!(reason = %rejection.body_text(), "invalid request: unreadable body");
            return Err(AppError::missing_text());
        }
    };

    let text = req.validate().map_err(|reason| {
        tracing::warn!(reason, "invalid request: missing 'text' parameter");
        AppError::missing_text()
    })?;

    tracing::info!(text_len = text.len(), "processing transaction message");
    tracing::debug!(text, "transaction message");

    let result = state.extraction.extract(text).await?;

    let content_type = if result.looks_like_json() {
        "application/json"
    } else {
        "text/plain; charset=utf-8"
    };

    Ok((StatusCode::OK, [(header::CONTENT_TYPE, content_type)], result.raw).into_response())
}
