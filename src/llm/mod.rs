//! LLM provider abstraction.
//!
//! This module provides the `CompletionProvider` trait and the OpenAI and
//! Gemini implementations used to obtain champion suggestions.

use async_trait::async_trait;

pub mod error;
pub mod factory;
pub mod google;
pub mod key;
pub mod openai;

pub use error::ProviderError;
pub use factory::{create_provider, Providers};
pub use google::GeminiProvider;
pub use key::ApiKey;
pub use openai::OpenAIProvider;

/// Sampling parameters for one completion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompletionOptions {
    pub temperature: f32,
    pub max_tokens: u32,
}

impl Default for CompletionOptions {
    fn default() -> Self {
        Self {
            temperature: 0.7,
            max_tokens: 500,
        }
    }
}

/// A text completion backend.
///
/// # Object Safety
///
/// This trait is object-safe and designed to be used as
/// `Arc<dyn CompletionProvider>`.
#[async_trait]
pub trait CompletionProvider: Send + Sync + 'static {
    /// Provider name for logging (e.g. "openai").
    fn name(&self) -> &str;

    /// Complete a single user prompt.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(text))` with the first candidate's text
    /// - `Ok(None)` if the provider answered without content
    /// - `Err(ProviderError::*)` on transport, upstream or configuration failure
    async fn complete(
        &self,
        prompt: &str,
        options: CompletionOptions,
    ) -> Result<Option<String>, ProviderError>;
}
