//! Chat-completion transport. The single place that talks to the LLM API;
//! generation and evaluation both go through the [`LlmTransport`] trait so
//! tests can swap in scripted stubs. The transport never retries — retry
//! policy belongs to the caller.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value as JsonValue;
use std::time::Duration;

/// Per-call upper bound; a hung upstream fails instead of blocking forever.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("LLM API error {status}: {body}")]
    Status { status: u16, body: String },

    #[error("malformed LLM response envelope (missing choices[0].message.content)")]
    Envelope,
}

#[derive(Debug, Clone, Copy)]
pub struct ChatParams {
    pub temperature: f32,
    pub max_tokens: u32,
}

#[async_trait]
pub trait LlmTransport: Send + Sync {
    /// Sends one chat completion and returns the raw generated text.
    async fn complete(
        &self,
        system: &str,
        user: &str,
        params: ChatParams,
    ) -> Result<String, TransportError>;
}

/// Production transport against an OpenRouter-style chat-completion API.
#[derive(Clone)]
pub struct OpenRouterClient {
    client: Client,
    url: String,
    api_key: String,
    model: String,
}

impl OpenRouterClient {
    pub fn new(client: Client, url: String, api_key: String, model: String) -> Self {
        Self {
            client,
            url,
            api_key,
            model,
        }
    }
}

#[async_trait]
impl LlmTransport for OpenRouterClient {
    async fn complete(
        &self,
        system: &str,
        user: &str,
        params: ChatParams,
    ) -> Result<String, TransportError> {
        let payload = serde_json::json!({
            "model": self.model,
            "messages": [
                {"role": "system", "content": system},
                {"role": "user", "content": user}
            ],
            "temperature": params.temperature,
            "max_tokens": params.max_tokens
        });

        let res = self
            .client
            .post(&self.url)
            .bearer_auth(&self.api_key)
            .json(&payload)
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await?;

        if !res.status().is_success() {
            let status = res.status().as_u16();
            let body = res.text().await.unwrap_or_default();
            return Err(TransportError::Status { status, body });
        }

        let body: JsonValue = res.json().await?;
        body.get("choices")
            .and_then(|c| c.get(0))
            .and_then(|c| c.get("message"))
            .and_then(|m| m.get("content"))
            .and_then(|c| c.as_str())
            .map(|s| s.to_string())
            .ok_or(TransportError::Envelope)
    }
}
