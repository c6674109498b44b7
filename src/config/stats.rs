//! Stats provider and catalog configuration

use serde::{Deserialize, Serialize};

/// DeepLoL stats provider settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StatsConfig {
    pub base_url: String,
    pub platform_id: String,
    pub game_version: String,
    pub tier: String,
    pub timeout_seconds: u64,
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            base_url: "https://b2c-api-cdn.deeplol.gg".to_string(),
            platform_id: "KR".to_string(),
            game_version: "14.24".to_string(),
            tier: "Emerald+".to_string(),
            timeout_seconds: 10,
        }
    }
}

/// Data Dragon roster settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    pub base_url: String,
    pub locale: String,
    /// Per-request timeout for versions.json and champion.json
    pub timeout_seconds: u64,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: "https://ddragon.leagueoflegends.com".to_string(),
            locale: "en_US".to_string(),
            timeout_seconds: 10,
        }
    }
}

/// Recommendation loop settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RecommendConfig {
    /// Hard cap on prompt rounds per request
    pub max_rounds: u32,
    pub temperature: f32,
}

impl Default for RecommendConfig {
    fn default() -> Self {
        Self {
            max_rounds: 5,
            temperature: 0.7,
        }
    }
}
