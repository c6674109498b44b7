//! Google Gemini provider implementation.

use super::{ApiKey, CompletionOptions, CompletionProvider, ProviderError};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;

const TIMEOUT_SECS: u64 = 120;

/// Google Generative AI provider.
///
/// - Completion via POST /v1beta/models/{model}:generateContent?key={key}
/// - Greedy sampling shape (topK 1, topP 1) with the caller's temperature
pub struct GeminiProvider {
    /// Base URL (e.g., "https://generativelanguage.googleapis.com")
    base_url: String,
    /// Model name (e.g., "gemini-pro")
    model: String,
    /// API key for query parameter authentication
    api_key: ApiKey,
    /// Shared HTTP client for connection pooling
    client: Arc<Client>,
}

impl GeminiProvider {
    pub fn new(base_url: String, model: String, api_key: ApiKey, client: Arc<Client>) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            model,
            api_key,
            client,
        }
    }

    fn build_request(prompt: &str, options: CompletionOptions) -> GoogleRequest {
        GoogleRequest {
            contents: vec![GoogleContent {
                role: None,
                parts: vec![GooglePart {
                    text: prompt.to_string(),
                }],
            }],
            generation_config: GoogleGenerationConfig {
                temperature: options.temperature,
                top_k: 1,
                top_p: 1.0,
                max_output_tokens: options.max_tokens,
            },
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GoogleRequest {
    contents: Vec<GoogleContent>,
    generation_config: GoogleGenerationConfig,
}

#[derive(Debug, Serialize, Deserialize)]
struct GoogleContent {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<GooglePart>,
}

#[derive(Debug, Serialize, Deserialize)]
struct GooglePart {
    #[serde(default)]
    text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GoogleGenerationConfig {
    temperature: f32,
    top_k: u32,
    top_p: f32,
    max_output_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct GoogleResponse {
    #[serde(default)]
    candidates: Vec<GoogleCandidate>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GoogleCandidate {
    content: Option<GoogleContent>,
    #[serde(default)]
    #[allow(dead_code)]
    finish_reason: Option<String>,
}

#[async_trait]
impl CompletionProvider for GeminiProvider {
    fn name(&self) -> &str {
        "gemini"
    }

    async fn complete(
        &self,
        prompt: &str,
        options: CompletionOptions,
    ) -> Result<Option<String>, ProviderError> {
        let api_key = self.api_key.get()?;
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        );

        let response = self
            .client
            .post(&url)
            .query(&[("key", api_key)])
            .json(&Self::build_request(prompt, options))
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

        let body: GoogleResponse = response.json().await.map_err(|e| {
            ProviderError::InvalidResponse(format!("Failed to parse Gemini response: {}", e))
        })?;

        // Text of the first candidate, parts concatenated.
        let text = body
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .map(|part| part.text)
                    .collect::<Vec<String>>()
                    .join("")
            })
            .filter(|text| !text.trim().is_empty());

        Ok(text)
    }
}
