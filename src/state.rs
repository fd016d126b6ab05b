/*
 * Responsibility
 * - Shared context bound to the Router (AppState)
 *   - extraction service (owns the completion client), bearer secret
 * - Clone is cheap (Arc inside); nothing here is mutated after startup
 */
use std::sync::Arc;

use crate::services::extraction::ExtractionService;

#[derive(Clone)]
pub struct AppState {
    pub extraction: Arc<ExtractionService>,
    pub api_secret_key: Option<Arc<str>>,
}

impl AppState {
    pub fn new(extraction: Arc<ExtractionService>, api_secret_key: Option<String>) -> Self {
        Self {
            extraction,
            api_secret_key: api_secret_key.map(Arc::from),
        }
    }
}
