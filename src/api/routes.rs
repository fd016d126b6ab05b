/*
 * Responsibility
 * - URL layout: /health (open), /process (bearer-protected)
 */
use axum::{
    Router,
    routing::{get, post},
};

use crate::api::handlers::{health::health, process::process};
use crate::middleware::bearer_auth;
use crate::state::AppState;

pub fn routes(state: AppState) -> Router<AppState> {
    let protected = bearer_auth::apply(Router::new().route("/process", post(process)), state);

    Router::new()
        .route("/health", get(health))
        .merge(protected)
}
