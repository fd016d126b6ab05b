//! Shared-secret bearer check for `/process`.
//!
//! - `Authorization: Bearer <secret>` must equal `API_SECRET_KEY` (constant-time compare).
//! - The scheme is case-insensitive (RFC 7235); the token is compared exactly, untrimmed.
//! - Runs before the body is read, so a bad token is a 401 whatever the payload.
//! - No secret configured => the check is skipped (development only; `Config` refuses this in production).

use axum::{
    Router,
    body::Body,
    extract::State,
    http::{HeaderMap, Request, header},
    middleware::{self, Next},
    response::Response,
};
use subtle::ConstantTimeEq;

use crate::error::AppError;
use crate::state::AppState;

/// Guard every route of `router` with the bearer check.
pub fn apply(router: Router<AppState>, state: AppState) -> Router<AppState> {
    router.route_layer(middleware::from_fn_with_state(state, bearer_middleware))
}

async fn bearer_middleware(
    State(state): State<AppState>,
    req: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let Some(secret) = state.api_secret_key.as_deref() else {
        return Ok(next.run(req).await);
    };

    if !is_authorized(req.headers(), secret) {
        tracing::warn!(uri = %req.uri(), "rejected request with missing or invalid bearer token");
        return Err(AppError::Unauthorized);
    }

    Ok(next.run(req).await)
}

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.split_once(' ')?;

    scheme.eq_ignore_ascii_case("bearer").then_some(token)
}

fn is_authorized(headers: &HeaderMap, secret: &str) -> bool {
    match bearer_token(headers) {
        Some(token) => bool::from(token.as_bytes().ct_eq(secret.as_bytes())),
        None => false,
    }
}
