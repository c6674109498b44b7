//! Error types for build lookups.

use thiserror::Error;

/// Reasons a build could not be resolved for a champion and role.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LookupError {
    /// Champion name does not resolve to a numeric id.
    #[error("Champion ID not found for {0}")]
    ChampionNotFound(String),

    /// Provider has no recorded variant for the champion in this lane.
    #[error("No build data found for {champion} in lane {lane}")]
    NoBuildData { champion: String, lane: String },

    /// Transport or decoding failure talking to the stats provider.
    #[error("Stats provider unavailable: {0}")]
    ProviderUnavailable(String),
}

impl LookupError {
    /// Short machine-readable kind, used as a log field.
    pub fn kind(&self) -> &'static str {
        match self {
            LookupError::ChampionNotFound(_) => "champion_not_found",
            LookupError::NoBuildData { .. } => "no_build_data",
            LookupError::ProviderUnavailable(_) => "provider_unavailable",
        }
    }
}
