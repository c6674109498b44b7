//! Configuration module for draftpick
//!
//! Provides layered configuration loading from files, environment variables, and defaults.
//!
//! # Configuration Precedence
//!
//! 1. CLI arguments (highest priority)
//! 2. Environment variables (`DRAFTPICK_*`)
//! 3. Configuration file (TOML)
//! 4. Default values (lowest priority)
//!
//! API keys never live in the file; each provider section names the
//! environment variable its key is read from.
//!
//! # Example
//!
//! ```rust
//! use draftpick::config::DraftpickConfig;
//!
//! // Load defaults
//! let config = DraftpickConfig::default();
//! assert_eq!(config.server.port, 8000);
//!
//! // Parse from TOML
//! let toml = r#"
//! [recommend]
//! max_rounds = 3
//! "#;
//! let config: DraftpickConfig = toml::from_str(toml).unwrap();
//! assert_eq!(config.recommend.max_rounds, 3);
//! ```

pub mod error;
pub mod llm;
pub mod logging;
pub mod server;
pub mod stats;

pub use error::ConfigError;
pub use llm::{GeminiConfig, KeyResolution, LlmConfig, OpenAIConfig, ProviderKind};
pub use logging::{LogFormat, LoggingConfig};
pub use server::ServerConfig;
pub use stats::{CatalogConfig, RecommendConfig, StatsConfig};

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Unified configuration for draftpick.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DraftpickConfig {
    /// HTTP server configuration
    pub server: ServerConfig,
    /// LLM providers
    pub llm: LlmConfig,
    /// Build statistics provider
    pub stats: StatsConfig,
    /// Champion roster source
    pub catalog: CatalogConfig,
    /// Recommendation loop
    pub recommend: RecommendConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
}

impl DraftpickConfig {
    /// Load configuration from a TOML file
    ///
    /// If path is None, returns default configuration.
    /// If path doesn't exist, returns NotFound error.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(p) => {
                if !p.exists() {
                    return Err(ConfigError::NotFound(p.to_path_buf()));
                }
                let content = std::fs::read_to_string(p)?;
                toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))
            }
            None => Ok(Self::default()),
        }
    }

    /// Apply environment variable overrides
    ///
    /// Supports DRAFTPICK_* environment variables for common settings.
    /// Invalid values are silently ignored (defaults are kept).
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(port) = std::env::var("DRAFTPICK_PORT") {
            if let Ok(p) = port.parse() {
                self.server.port = p;
            }
        }
        if let Ok(host) = std::env::var("DRAFTPICK_HOST") {
            self.server.host = host;
        }

        if let Ok(level) = std::env::var("DRAFTPICK_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Ok(format) = std::env::var("DRAFTPICK_LOG_FORMAT") {
            if let Ok(f) = format.parse() {
                self.logging.format = f;
            }
        }

        if let Ok(provider) = std::env::var("DRAFTPICK_PROVIDER") {
            if let Ok(p) = provider.parse() {
                self.llm.default_provider = p;
            }
        }
        if let Ok(rounds) = std::env::var("DRAFTPICK_MAX_ROUNDS") {
            if let Ok(r) = rounds.parse() {
                self.recommend.max_rounds = r;
            }
        }

        self
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(validation("server.port", "port must be non-zero"));
        }

        for (field, url) in [
            ("llm.openai.base_url", &self.llm.openai.base_url),
            ("llm.gemini.base_url", &self.llm.gemini.base_url),
            ("stats.base_url", &self.stats.base_url),
            ("catalog.base_url", &self.catalog.base_url),
        ] {
            if url.trim().is_empty() {
                return Err(validation(field, "URL cannot be empty"));
            }
        }

        for (field, seconds) in [
            ("stats.timeout_seconds", self.stats.timeout_seconds),
            ("catalog.timeout_seconds", self.catalog.timeout_seconds),
        ] {
            if seconds == 0 {
                return Err(validation(field, "timeout must be non-zero"));
            }
        }

        if self.recommend.max_rounds == 0 {
            return Err(validation(
                "recommend.max_rounds",
                "at least one round is required",
            ));
        }

        if !(0.0..=2.0).contains(&self.recommend.temperature) {
            return Err(validation(
                "recommend.temperature",
                "temperature must be between 0 and 2",
            ));
        }

        Ok(())
    }
}

fn validation(field: &str, message: &str) -> ConfigError {
    ConfigError::Validation {
        field: field.to_string(),
        message: message.to_string(),
    }
}
