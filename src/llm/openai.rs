//! OpenAI provider implementation.

use super::{ApiKey, CompletionOptions, CompletionProvider, ProviderError};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;

const TIMEOUT_SECS: u64 = 120;

/// OpenAI chat completions provider.
///
/// Sends the prompt as a single user message to
/// `POST {base_url}/v1/chat/completions` with Bearer authentication.
pub struct OpenAIProvider {
    /// Base URL (e.g., "https://api.openai.com")
    base_url: String,
    /// Model name (e.g., "gpt-3.5-turbo")
    model: String,
    api_key: ApiKey,
    /// Shared HTTP client for connection pooling
    client: Arc<Client>,
}

impl OpenAIProvider {
    pub fn new(base_url: String, model: String, api_key: ApiKey, client: Arc<Client>) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            model,
            api_key,
            client,
        }
    }
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Deserialize)]
struct ChatChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

#[async_trait]
impl CompletionProvider for OpenAIProvider {
    fn name(&self) -> &str {
        "openai"
    }

    async fn complete(
        &self,
        prompt: &str,
        options: CompletionOptions,
    ) -> Result<Option<String>, ProviderError> {
        let url = format!("{}/v1/chat/completions", self.base_url);
        let api_key = self.api_key.get()?;

        let request = ChatRequest {
            model: &self.model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            temperature: options.temperature,
            max_tokens: options.max_tokens,
        };

        let response = self
            .client
            .post(&url)
            .header("authorization", format!("Bearer {}", api_key))
            .json(&request)
            .timeout(Duration::from_secs(TIMEOUT_SECS))
            .send()
            .await
            .map_err(|e| ProviderError::from_reqwest(e, TIMEOUT_SECS * 1000))?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ProviderError::Upstream {
                status: status.as_u16(),
                message: error_body,
            });
        }

        let completion: ChatResponse = response.json().await.map_err(|e| {
            ProviderError::InvalidResponse(format!("Failed to parse completion response: {}", e))
        })?;

        Ok(completion
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .filter(|text| !text.trim().is_empty()))
    }
}
