//! Groq completion provider.
//!
//! Groq exposes the OpenAI-compatible `POST /chat/completions` endpoint, so this
//! client works against any server speaking that protocol (`GROQ_BASE_URL`).

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};

use crate::config::CompletionSettings;
use crate::services::completion::client::{CompletionError, CompletionProvider, CompletionResult};

/// Groq chat-completions client. One instance (and one connection pool) per process.
pub struct GroqProvider {
    client: Client,
    api_key: String,
    endpoint: String,
    model: String,
    temperature: f32,
    max_tokens: u32,
}

impl GroqProvider {
    pub fn new(settings: &CompletionSettings) -> CompletionResult<Self> {
        let api_key = settings
            .api_key
            .clone()
            .ok_or_else(|| CompletionError::NotConfigured("GROQ_API_KEY is missing".into()))?;

        let client = Client::builder()
            .timeout(settings.timeout)
            .build()
            .map_err(|e| CompletionError::NotConfigured(e.to_string()))?;

        Ok(Self {
            client,
            api_key,
            endpoint: format!("{}/chat/completions", settings.base_url),
            model: settings.model.clone(),
            temperature: settings.temperature,
            max_tokens: settings.max_tokens,
        })
    }
}

#[async_trait]
impl CompletionProvider for GroqProvider {
    fn name(&self) -> &'static str {
        "groq"
    }

    async fn complete(&self, prompt: &str) -> CompletionResult<String> {
        let request = ChatRequest {
            model: &self.model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            temperature: self.temperature,
            max_tokens: self.max_tokens,
        };

        tracing::debug!(
            model = %self.model,
            prompt_len = prompt.len(),
            "sending request to completion API"
        );

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| CompletionError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            if status == StatusCode::TOO_MANY_REQUESTS {
                return Err(CompletionError::RateLimited);
            }

            let error_text = response.text().await.unwrap_or_default();
            return Err(CompletionError::Api(format!("{}: {}", status, error_text)));
        }

        let body: ChatResponse = response
            .json()
            .await
            .map_err(|e| CompletionError::Api(format!("failed to parse response: {}", e)))?;

        let content = body
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or(CompletionError::EmptyResponse)?;

        tracing::debug!(
            model = %self.model,
            output_len = content.len(),
            "received response from completion API"
        );

        Ok(content)
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}
