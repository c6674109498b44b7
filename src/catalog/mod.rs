//! Champion catalog.
//!
//! Holds the champion roster fetched from Data Dragon. The catalog is an
//! explicitly constructed service with an `initialize` / `is_ready`
//! lifecycle; callers share it through an `Arc` and read snapshots of the
//! roster. The recommendation core never triggers a refresh itself.
//!
//! # Example
//!
//! ```
//! use draftpick::catalog::{Champion, ChampionCatalog, Role};
//!
//! let catalog = ChampionCatalog::from_champions(vec![
//!     Champion::new("Ahri", "103", "Ahri", &["Mage", "Assassin"]),
//! ]);
//! assert!(catalog.is_ready());
//! assert_eq!(catalog.find_by_name("ahri").unwrap().key, "103");
//! assert_eq!(catalog.search("", Some(Role::Mid)).len(), 1);
//! ```

mod champion;
mod error;

pub use champion::{difficulty_text, roles_for_tags, Champion, ChampionInfo, Role};
pub use error::CatalogError;

use crate::config::CatalogConfig;
use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};
use std::time::Duration;

/// Data Dragon `champion.json` envelope.
#[derive(Deserialize)]
struct ChampionsResponse {
    version: String,
    data: BTreeMap<String, Champion>,
}

/// A loaded roster.
#[derive(Debug, Clone)]
pub struct CatalogSnapshot {
    pub version: String,
    pub champions: Arc<Vec<Champion>>,
    pub fetched_at: DateTime<Utc>,
}

struct DataDragonSource {
    base_url: String,
    locale: String,
    timeout: Duration,
    client: Arc<Client>,
}

/// Champion roster service.
pub struct ChampionCatalog {
    source: Option<DataDragonSource>,
    snapshot: RwLock<Option<CatalogSnapshot>>,
}

impl ChampionCatalog {
    /// Create an empty catalog that loads from Data Dragon on `initialize`.
    pub fn new(config: &CatalogConfig, client: Arc<Client>) -> Self {
        Self {
            source: Some(DataDragonSource {
                base_url: config.base_url.trim_end_matches('/').to_string(),
                locale: config.locale.clone(),
                timeout: Duration::from_secs(config.timeout_seconds),
                client,
            }),
            snapshot: RwLock::new(None),
        }
    }

    /// Create a catalog that is ready immediately with a fixed roster.
    pub fn from_champions(champions: Vec<Champion>) -> Self {
        let champions = champions
            .into_iter()
            .map(|mut c| {
                if c.roles.is_empty() {
                    c.roles = roles_for_tags(&c.tags);
                }
                c
            })
            .collect();

        Self {
            source: None,
            snapshot: RwLock::new(Some(CatalogSnapshot {
                version: "static".to_string(),
                champions: Arc::new(champions),
                fetched_at: Utc::now(),
            })),
        }
    }

    /// Load the roster if it is not loaded yet.
    pub async fn initialize(&self) -> Result<(), CatalogError> {
        if self.is_ready() {
            return Ok(());
        }

        let source = self.source.as_ref().ok_or(CatalogError::NotReady)?;
        let snapshot = source.fetch().await?;

        tracing::info!(
            version = %snapshot.version,
            champions = snapshot.champions.len(),
            "Champion catalog loaded"
        );

        *self
            .snapshot
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = Some(snapshot);
        Ok(())
    }

    pub fn is_ready(&self) -> bool {
        self.read_snapshot().is_some()
    }

    /// Roster version (e.g. "14.3.1"), if loaded.
    pub fn version(&self) -> Option<String> {
        self.read_snapshot().map(|s| s.version)
    }

    /// When the loaded roster was fetched (or built, for a static roster).
    pub fn fetched_at(&self) -> Option<DateTime<Utc>> {
        self.read_snapshot().map(|s| s.fetched_at)
    }

    /// The full roster, empty if not loaded.
    pub fn list_all(&self) -> Arc<Vec<Champion>> {
        self.read_snapshot()
            .map(|s| s.champions)
            .unwrap_or_default()
    }

    /// Case-insensitive exact lookup by display name.
    pub fn find_by_name(&self, name: &str) -> Option<Champion> {
        let needle = name.trim().to_lowercase();
        self.list_all()
            .iter()
            .find(|c| c.name.to_lowercase() == needle)
            .cloned()
    }

    /// Lookup by Data Dragon key (e.g. "MonkeyKing").
    pub fn get_by_id(&self, id: &str) -> Option<Champion> {
        self.list_all().iter().find(|c| c.id == id).cloned()
    }

    /// Champions whose name contains `query` (case-insensitive), optionally
    /// restricted to a role.
    pub fn search(&self, query: &str, role: Option<Role>) -> Vec<Champion> {
        let needle = query.trim().to_lowercase();
        self.list_all()
            .iter()
            .filter(|c| c.name.to_lowercase().contains(&needle))
            .filter(|c| role.map_or(true, |r| c.plays(r)))
            .cloned()
            .collect()
    }

    fn read_snapshot(&self) -> Option<CatalogSnapshot> {
        self.snapshot
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

impl DataDragonSource {
    async fn fetch(&self) -> Result<CatalogSnapshot, CatalogError> {
        let versions_url = format!("{}/api/versions.json", self.base_url);
        let versions: Vec<String> = self.get_json(&versions_url).await?;
        let version = versions
            .into_iter()
            .next()
            .ok_or_else(|| CatalogError::InvalidResponse("empty version list".to_string()))?;

        let roster_url = format!(
            "{}/cdn/{}/data/{}/champion.json",
            self.base_url, version, self.locale
        );
        let roster: ChampionsResponse = self.get_json(&roster_url).await?;

        let champions = roster
            .data
            .into_values()
            .map(|mut c| {
                c.roles = roles_for_tags(&c.tags);
                c
            })
            .collect();

        Ok(CatalogSnapshot {
            version: roster.version,
            champions: Arc::new(champions),
            fetched_at: Utc::now(),
        })
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, url: &str) -> Result<T, CatalogError> {
        let response = self
            .client
            .get(url)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| CatalogError::Network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(CatalogError::InvalidResponse(format!(
                "{} returned {}",
                url,
                response.status()
            )));
        }

        response
            .json()
            .await
            .map_err(|e| CatalogError::InvalidResponse(format!("Failed to parse {}: {}", url, e)))
    }
}
