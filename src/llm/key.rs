//! API key resolution.

use super::ProviderError;
use crate::config::KeyResolution;
use std::sync::OnceLock;

/// An API key read from the environment, either at construction or on
/// first use depending on [`KeyResolution`].
#[derive(Debug)]
pub enum ApiKey {
    Resolved(String),
    Deferred {
        env_var: String,
        cached: OnceLock<String>,
    },
}

impl ApiKey {
    /// Create a key from an environment variable.
    ///
    /// # Errors
    ///
    /// With `KeyResolution::Eager`, returns `ProviderError::Configuration`
    /// if the variable is unset or empty.
    pub fn from_env(env_var: &str, resolution: KeyResolution) -> Result<Self, ProviderError> {
        match resolution {
            KeyResolution::Eager => read_env(env_var).map(ApiKey::Resolved),
            KeyResolution::Lazy => Ok(ApiKey::Deferred {
                env_var: env_var.to_string(),
                cached: OnceLock::new(),
            }),
        }
    }

    pub fn literal(key: impl Into<String>) -> Self {
        ApiKey::Resolved(key.into())
    }

    /// The key value, reading the environment on first use if deferred.
    pub fn get(&self) -> Result<&str, ProviderError> {
        match self {
            ApiKey::Resolved(key) => Ok(key),
            ApiKey::Deferred { env_var, cached } => {
                if let Some(key) = cached.get() {
                    return Ok(key);
                }
                let key = read_env(env_var)?;
                Ok(cached.get_or_init(|| key))
            }
        }
    }
}

fn read_env(env_var: &str) -> Result<String, ProviderError> {
    match std::env::var(env_var) {
        Ok(key) if !key.trim().is_empty() => Ok(key),
        _ => Err(ProviderError::Configuration(format!(
            "Missing {} environment variable",
            env_var
        ))),
    }
}
