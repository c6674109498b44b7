//! Provider factory for creating CompletionProvider trait objects from configuration.

use super::{ApiKey, CompletionProvider, GeminiProvider, OpenAIProvider, ProviderError};
use crate::config::{LlmConfig, ProviderKind};
use reqwest::Client;
use std::sync::Arc;

/// Create a provider from LLM configuration.
///
/// # Arguments
///
/// * `kind` - Which provider to build
/// * `config` - LLM configuration (base URL, model, key variable)
/// * `client` - Shared HTTP client for connection pooling
///
/// # Errors
///
/// Returns `ProviderError::Configuration` if the provider resolves its key
/// eagerly and the key variable is unset.
///
/// # Examples
///
/// ```
/// use draftpick::config::{KeyResolution, LlmConfig, ProviderKind};
/// use draftpick::llm::create_provider;
/// use reqwest::Client;
/// use std::sync::Arc;
///
/// let mut config = LlmConfig::default();
/// config.gemini.key_resolution = KeyResolution::Lazy;
///
/// let provider = create_provider(ProviderKind::Gemini, &config, Arc::new(Client::new())).unwrap();
/// assert_eq!(provider.name(), "gemini");
/// ```
pub fn create_provider(
    kind: ProviderKind,
    config: &LlmConfig,
    client: Arc<Client>,
) -> Result<Arc<dyn CompletionProvider>, ProviderError> {
    match kind {
        ProviderKind::OpenAI => {
            let c = &config.openai;
            let api_key = ApiKey::from_env(&c.api_key_env, c.key_resolution)?;
            Ok(Arc::new(OpenAIProvider::new(
                c.base_url.clone(),
                c.model.clone(),
                api_key,
                client,
            )))
        }
        ProviderKind::Gemini => {
            let c = &config.gemini;
            let api_key = ApiKey::from_env(&c.api_key_env, c.key_resolution)?;
            Ok(Arc::new(GeminiProvider::new(
                c.base_url.clone(),
                c.model.clone(),
                api_key,
                client,
            )))
        }
    }
}

/// Both configured providers, built once at startup.
#[derive(Clone)]
pub struct Providers {
    pub openai: Arc<dyn CompletionProvider>,
    pub gemini: Arc<dyn CompletionProvider>,
}

impl Providers {
    pub fn from_config(config: &LlmConfig, client: Arc<Client>) -> Result<Self, ProviderError> {
        Ok(Self {
            openai: create_provider(ProviderKind::OpenAI, config, Arc::clone(&client))?,
            gemini: create_provider(ProviderKind::Gemini, config, client)?,
        })
    }

    pub fn get(&self, kind: ProviderKind) -> Arc<dyn CompletionProvider> {
        match kind {
            ProviderKind::OpenAI => Arc::clone(&self.openai),
            ProviderKind::Gemini => Arc::clone(&self.gemini),
        }
    }
}
