//! Completion provider interface used by the extraction service.
use async_trait::async_trait;
use thiserror::Error;

/// Result type for completion calls.
pub type CompletionResult<T> = Result<T, CompletionError>;

/// Provider-layer errors (configuration/transport/upstream).
///
/// Kept independent from `AppError`; every variant ends up as a 500 at the HTTP
/// boundary, and none of them is retried.
#[derive(Debug, Error)]
pub enum CompletionError {
    #[error("completion provider not configured: {0}")]
    NotConfigured(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("completion API error: {0}")]
    Api(String),
    #[error("completion API rate limited")]
    RateLimited,
    #[error("completion API returned no content")]
    EmptyResponse,
}

/// A text-in, text-out completion backend.
///
/// Decoding parameters (model, temperature, max tokens) are fixed when the
/// provider is built, so a call only carries the prompt.
#[async_trait]
pub trait CompletionProvider: Send + Sync + 'static {
    // Backend name (for logging).
    fn name(&self) -> &'static str;

    // Send `prompt` as a single user message and return the generated text as-is.
    async fn complete(&self, prompt: &str) -> CompletionResult<String>;
}
