//! Champion recommendation.
//!
//! [`Recommender`] is the entry point: it validates a draft request, makes
//! sure the champion catalog is loaded, and runs the [`Orchestrator`] loop
//! against the chosen LLM provider.
//!
//! # Example
//!
//! ```no_run
//! use draftpick::build::BuildNormalizer;
//! use draftpick::catalog::ChampionCatalog;
//! use draftpick::config::{DraftpickConfig, ProviderKind};
//! use draftpick::llm::create_provider;
//! use draftpick::recommend::{DraftRequest, Recommender};
//! use draftpick::stats::DeepLolClient;
//! use reqwest::Client;
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = DraftpickConfig::default();
//! let client = Arc::new(Client::new());
//! let catalog = Arc::new(ChampionCatalog::new(&config.catalog, client.clone()));
//! let stats = Arc::new(DeepLolClient::new(&config.stats, client.clone()));
//! let recommender = Recommender::new(catalog, Arc::new(BuildNormalizer::new(stats)), &config);
//!
//! let provider = create_provider(ProviderKind::Gemini, &config.llm, client)?;
//! let request = DraftRequest::for_role("Mid");
//! let result = recommender
//!     .recommend(&request, provider, config.llm.max_tokens(ProviderKind::Gemini))
//!     .await?;
//! println!("{} picks", result.len());
//! # Ok(())
//! # }
//! ```

mod error;
pub mod orchestrator;
pub mod parser;
pub mod prompt;

pub use error::RecommendError;
pub use orchestrator::{Orchestrator, RecommendOptions, StopReason};
pub use parser::{parse_recommendations, Candidate, MAX_CANDIDATES};
pub use prompt::build_prompt;

use crate::build::{Build, BuildNormalizer};
use crate::catalog::{Champion, ChampionCatalog, Role};
use crate::config::{DraftpickConfig, RecommendConfig};
use crate::llm::{CompletionOptions, CompletionProvider};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

/// A validated draft.
#[derive(Debug, Clone, PartialEq)]
pub struct Draft {
    pub allies: Vec<(Champion, Role)>,
    pub enemies: Vec<Champion>,
    pub target_role: Role,
}

/// An ally slot in a draft request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamMember {
    pub champion: Champion,
    pub role: Role,
}

/// Draft request as sent by clients.
///
/// `targetRole` stays a string here so an unknown role is reported as
/// [`RecommendError::InvalidRequest`] rather than a decoding failure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftRequest {
    #[serde(default)]
    pub allies: Vec<TeamMember>,
    #[serde(default)]
    pub enemies: Vec<Champion>,
    #[serde(default)]
    pub target_role: String,
    /// Route to OpenAI instead of Gemini
    #[serde(default, rename = "useOpenAI")]
    pub use_openai: bool,
}

impl DraftRequest {
    pub fn for_role(role: &str) -> Self {
        Self {
            target_role: role.to_string(),
            ..Self::default()
        }
    }

    /// Check the target role and convert into a [`Draft`].
    pub fn validate(&self) -> Result<Draft, RecommendError> {
        let target_role = self
            .target_role
            .parse::<Role>()
            .map_err(RecommendError::InvalidRequest)?;

        Ok(Draft {
            allies: self
                .allies
                .iter()
                .map(|m| (m.champion.clone(), m.role))
                .collect(),
            enemies: self.enemies.clone(),
            target_role,
        })
    }
}

/// Validated picks as three parallel lists.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Recommendations {
    #[serde(rename = "recommendations")]
    pub champions: Vec<Champion>,
    pub explanations: Vec<String>,
    pub builds: Vec<Build>,
}

impl Recommendations {
    pub fn len(&self) -> usize {
        self.champions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.champions.is_empty()
    }

    pub fn contains(&self, champion: &Champion) -> bool {
        self.champions.iter().any(|c| c.id == champion.id)
    }

    pub(crate) fn push(&mut self, champion: Champion, explanation: String, build: Build) {
        self.champions.push(champion);
        self.explanations.push(explanation);
        self.builds.push(build);
    }
}

/// Recommendation service shared by the HTTP API and the CLI.
pub struct Recommender {
    catalog: Arc<ChampionCatalog>,
    normalizer: Arc<BuildNormalizer>,
    settings: RecommendConfig,
    content_logging: bool,
}

impl Recommender {
    pub fn new(
        catalog: Arc<ChampionCatalog>,
        normalizer: Arc<BuildNormalizer>,
        config: &DraftpickConfig,
    ) -> Self {
        Self {
            catalog,
            normalizer,
            settings: config.recommend.clone(),
            content_logging: config.logging.enable_content_logging,
        }
    }

    pub fn catalog(&self) -> &Arc<ChampionCatalog> {
        &self.catalog
    }

    pub fn normalizer(&self) -> &Arc<BuildNormalizer> {
        &self.normalizer
    }

    /// Recommend up to three champions for the request's target role.
    ///
    /// # Errors
    ///
    /// - `RecommendError::InvalidRequest` for an unknown target role
    /// - `RecommendError::CatalogUnavailable` if the roster cannot be loaded
    ///
    /// Everything else degrades to fewer (possibly zero) picks.
    pub async fn recommend(
        &self,
        request: &DraftRequest,
        provider: Arc<dyn CompletionProvider>,
        max_tokens: u32,
    ) -> Result<Recommendations, RecommendError> {
        let draft = request.validate()?;

        if !self.catalog.is_ready() {
            self.catalog
                .initialize()
                .await
                .map_err(|e| RecommendError::CatalogUnavailable(e.to_string()))?;
        }
        let roster = self.catalog.list_all();

        let provider_name = provider.name().to_string();
        let options = RecommendOptions {
            max_rounds: self.settings.max_rounds,
            completion: CompletionOptions {
                temperature: self.settings.temperature,
                max_tokens,
            },
            content_logging: self.content_logging,
            ..RecommendOptions::default()
        };
        let orchestrator = Orchestrator::new(provider, Arc::clone(&self.normalizer), options);

        let (result, reason) = orchestrator.run_with_reason(&draft, &roster).await;
        info!(
            provider = %provider_name,
            role = %draft.target_role,
            picks = result.len(),
            stop_reason = reason.as_str(),
            "Recommendation finished"
        );

        Ok(result)
    }
}
