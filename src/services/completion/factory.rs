/// Factory: build the completion provider from application `Config`.
use std::sync::Arc;

use crate::config::Config;
use crate::services::completion::{CompletionError, CompletionProvider, GroqProvider};

pub fn build_completion_provider(
    config: &Config,
) -> Result<Arc<dyn CompletionProvider>, CompletionError> {
    let provider = GroqProvider::new(&config.completion)?;

    Ok(Arc::new(provider))
}
