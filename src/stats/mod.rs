//! Stats provider abstraction.
//!
//! The build normalizer asks a `StatsProvider` for the recorded build
//! variants of a champion in one lane. `DeepLolClient` is the HTTP
//! implementation; tests substitute in-memory providers.

use async_trait::async_trait;

pub mod deeplol;
pub mod types;

pub use deeplol::DeepLolClient;
pub use types::{
    BuildResponse, BuildVariant, ItemBuild, LaneBuild, RuneBuild, SkillBuild, SpellBuild,
};

use crate::build::LookupError;

/// Source of per-lane champion build statistics.
#[async_trait]
pub trait StatsProvider: Send + Sync + 'static {
    /// Fetch the build collection for a champion in a provider lane
    /// (`"Top"`, `"Jungle"`, `"Middle"`, `"Bot"`, `"Supporter"`).
    ///
    /// # Returns
    ///
    /// - `Ok(Some(LaneBuild))` if the provider has an entry for the lane
    /// - `Ok(None)` if the lane is absent
    /// - `Err(LookupError::ProviderUnavailable)` on transport or decoding failure
    async fn fetch_build(
        &self,
        champion_id: u32,
        lane: &str,
    ) -> Result<Option<LaneBuild>, LookupError>;
}
