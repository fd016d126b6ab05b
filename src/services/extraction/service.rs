use std::sync::Arc;

use thiserror::Error;

use crate::services::completion::{CompletionError, CompletionProvider};
use crate::services::extraction::clock::Clock;
use crate::services::extraction::prompt;

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("empty transaction text")]
    EmptyText,
    // Provider could not be built at startup (e.g. GROQ_API_KEY missing).
    #[error("completion provider unavailable: {0}")]
    Unavailable(String),
    #[error(transparent)]
    Completion(#[from] CompletionError),
}

/// Raw model output. Usually JSON, never parsed here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionResult {
    pub raw: String,
}

impl ExtractionResult {
    /// Whether the raw output happens to be well-formed JSON (used only to pick a Content-Type).
    pub fn looks_like_json(&self) -> bool {
        serde_json::from_str::<serde::de::IgnoredAny>(&self.raw).is_ok()
    }
}

/// Turns a transaction message into the model's structured (textual) answer.
///
/// Built once at startup and shared through `AppState`; holds no per-request state.
pub struct ExtractionService {
    provider: Result<Arc<dyn CompletionProvider>, String>,
    clock: Arc<dyn Clock>,
}

impl ExtractionService {
    pub fn new(provider: Arc<dyn CompletionProvider>, clock: Arc<dyn Clock>) -> Self {
        Self {
            provider: Ok(provider),
            clock,
        }
    }

    /// A service whose provider failed to initialize. Every call fails with `Unavailable`.
    pub fn unavailable(reason: impl Into<String>, clock: Arc<dyn Clock>) -> Self {
        Self {
            provider: Err(reason.into()),
            clock,
        }
    }

    /// One-shot extraction. A failed upstream call is returned as-is; no retry.
    pub async fn extract(&self, text: &str) -> Result<ExtractionResult, ExtractionError> {
        if text.trim().is_empty() {
            return Err(ExtractionError::EmptyText);
        }

        let provider = self
            .provider
            .as_ref()
            .map_err(|reason| ExtractionError::Unavailable(reason.clone()))?;

        let prompt = prompt::build_prompt(text, self.clock.today());

        tracing::info!(provider = provider.name(), "sending request to LLM");
        let raw = provider.complete(&prompt).await?;
        tracing::info!(output_len = raw.len(), "received response from LLM");

        Ok(ExtractionResult { raw })
    }
}
