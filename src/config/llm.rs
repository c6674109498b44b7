//! LLM provider configuration

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which LLM answers recommendation prompts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    OpenAI,
    #[default]
    Gemini,
}

impl FromStr for ProviderKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "openai" => Ok(ProviderKind::OpenAI),
            "gemini" => Ok(ProviderKind::Gemini),
            _ => Err(format!("Invalid provider: {}", s)),
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderKind::OpenAI => f.write_str("openai"),
            ProviderKind::Gemini => f.write_str("gemini"),
        }
    }
}

/// When a provider's API key is read from the environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyResolution {
    /// At startup; a missing key aborts startup
    Eager,
    /// On first call; a missing key fails that call
    Lazy,
}

/// OpenAI provider settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OpenAIConfig {
    pub base_url: String,
    pub model: String,
    pub api_key_env: String,
    pub key_resolution: KeyResolution,
    pub max_tokens: u32,
}

impl Default for OpenAIConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.openai.com".to_string(),
            model: "gpt-3.5-turbo".to_string(),
            api_key_env: "OPENAI_API_KEY".to_string(),
            key_resolution: KeyResolution::Eager,
            max_tokens: 500,
        }
    }
}

/// Gemini provider settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeminiConfig {
    pub base_url: String,
    pub model: String,
    pub api_key_env: String,
    pub key_resolution: KeyResolution,
    pub max_tokens: u32,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            base_url: "https://generativelanguage.googleapis.com".to_string(),
            model: "gemini-pro".to_string(),
            api_key_env: "GEMINI_API_KEY".to_string(),
            key_resolution: KeyResolution::Lazy,
            max_tokens: 2048,
        }
    }
}

/// LLM configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LlmConfig {
    /// Provider used when a request does not choose one
    pub default_provider: ProviderKind,
    pub openai: OpenAIConfig,
    pub gemini: GeminiConfig,
}

impl LlmConfig {
    /// Output token cap for the given provider.
    pub fn max_tokens(&self, kind: ProviderKind) -> u32 {
        match kind {
            ProviderKind::OpenAI => self.openai.max_tokens,
            ProviderKind::Gemini => self.gemini.max_tokens,
        }
    }
}
