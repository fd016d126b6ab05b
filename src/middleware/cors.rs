//! CORS for browser callers.
//!
//! Only `GET /health` and `POST /process` exist, so only those methods (plus the
//! preflight) are advertised. Credentials are never allowed; the bearer secret
//! travels in `Authorization`, which is listed as an allowed request header.
//! `x-request-id` is exposed so browser clients can quote it when reporting errors.

use std::time::Duration;

use axum::Router;
use axum::http::{HeaderName, HeaderValue, Method, header};
use tower_http::cors::{AllowOrigin, CorsLayer};

use crate::config::Config;

const PREFLIGHT_MAX_AGE: Duration = Duration::from_secs(600);

pub fn apply(router: Router, config: &Config) -> Router {
    let request_id = HeaderName::from_static("x-request-id");

    let cors = CorsLayer::new()
        .allow_origin(allowed_origins(config))
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE, request_id.clone()])
        .expose_headers([request_id])
        .max_age(PREFLIGHT_MAX_AGE);

    router.layer(cors)
}

/// Development: any origin. Production: exact matches from `CORS_ALLOWED_ORIGINS`
/// (an empty list allows none; a `*` entry is ignored).
fn allowed_origins(config: &Config) -> AllowOrigin {
    if !config.app_env.is_production() {
        return AllowOrigin::any();
    }

    let allowed: Vec<HeaderValue> = config
        .cors_allowed_origins
        .iter()
        .filter(|s| s.as_str() != "*")
        .filter_map(|s| HeaderValue::from_str(s).ok())
        .collect();

    AllowOrigin::list(allowed)
}
