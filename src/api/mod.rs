//! # HTTP API
//!
//! JSON endpoints for the draft assistant.
//!
//! ## Endpoints
//!
//! - `POST /api/recommendations` - Recommend picks (Gemini, or OpenAI with `"useOpenAI": true`)
//! - `POST /api/gemini` - Recommend picks with Gemini
//! - `GET /api/champions` - Champion roster (`?q=` name filter, `?role=` role filter)
//! - `GET /api/providers/check` - One 10-token completion (`?provider=openai|gemini`)
//! - `GET /health` - Service status
//!
//! ## Example
//!
//! ```no_run
//! use draftpick::api::{create_router, AppState};
//! use draftpick::config::DraftpickConfig;
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Arc::new(DraftpickConfig::default());
//! let state = Arc::new(AppState::new(config)?);
//! let app = create_router(state);
//!
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:8000").await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! Errors use one envelope:
//! ```json
//! {
//!   "error": {
//!     "message": "Invalid target role: Bottom",
//!     "type": "invalid_request_error",
//!     "code": "invalid_request_error"
//!   }
//! }
//! ```
//!
//! A request that yields fewer than three picks is still a success.

mod champions;
mod error;
mod health;
mod providers;
mod recommendations;

pub use champions::{ChampionEntry, ChampionList, ChampionQuery};
pub use error::{ApiError, ApiErrorBody};
pub use health::{CatalogHealth, HealthResponse};
pub use providers::{ProviderCheck, ProviderCheckQuery, CHECK_MAX_TOKENS, CHECK_PROMPT};

use crate::build::BuildNormalizer;
use crate::catalog::ChampionCatalog;
use crate::config::DraftpickConfig;
use crate::llm::{ProviderError, Providers};
use crate::logging;
use crate::recommend::Recommender;
use crate::stats::DeepLolClient;
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tower_http::cors::CorsLayer;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

/// Maximum request body size (1 MB).
const MAX_BODY_SIZE: usize = 1024 * 1024;

/// Shared application state accessible to all handlers.
pub struct AppState {
    pub config: Arc<DraftpickConfig>,
    pub recommender: Arc<Recommender>,
    pub providers: Providers,
    /// Server startup time for uptime tracking
    pub start_time: Instant,
}

impl AppState {
    /// Build the production services (Data Dragon, DeepLoL, OpenAI, Gemini)
    /// from configuration.
    ///
    /// # Errors
    ///
    /// Fails if an eagerly resolved API key is missing or the HTTP client
    /// cannot be built.
    pub fn new(config: Arc<DraftpickConfig>) -> Result<Self, ProviderError> {
        let http_client = Arc::new(
            reqwest::Client::builder()
                .pool_max_idle_per_host(10)
                .build()
                .map_err(|e| {
                    ProviderError::Configuration(format!("Failed to create HTTP client: {}", e))
                })?,
        );

        let providers = Providers::from_config(&config.llm, Arc::clone(&http_client))?;
        let catalog = Arc::new(ChampionCatalog::new(
            &config.catalog,
            Arc::clone(&http_client),
        ));
        let stats = Arc::new(DeepLolClient::new(&config.stats, http_client));
        let normalizer = Arc::new(BuildNormalizer::new(stats));
        let recommender = Arc::new(Recommender::new(catalog, normalizer, &config));

        Ok(Self::from_parts(config, recommender, providers))
    }

    /// Assemble state from already constructed services.
    pub fn from_parts(
        config: Arc<DraftpickConfig>,
        recommender: Arc<Recommender>,
        providers: Providers,
    ) -> Self {
        Self {
            config,
            recommender,
            providers,
            start_time: Instant::now(),
        }
    }
}

/// Create the main API router with all endpoints configured.
pub fn create_router(state: Arc<AppState>) -> Router {
    let timeout = Duration::from_secs(state.config.server.request_timeout_seconds);

    Router::new()
        .route("/api/recommendations", post(recommendations::handle))
        .route("/api/gemini", post(recommendations::handle_gemini))
        .route("/api/champions", get(champions::handle))
        .route("/api/providers/check", get(providers::handle))
        .route("/health", get(health::handle))
        .layer(TimeoutLayer::new(timeout))
        .layer(RequestBodyLimitLayer::new(MAX_BODY_SIZE))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .layer(axum::middleware::from_fn(logging::request_id))
        .with_state(state)
}
