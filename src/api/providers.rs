//! Provider connectivity check.

use super::{ApiError, AppState};
use crate::config::ProviderKind;
use crate::llm::CompletionOptions;
use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, warn};

/// Prompt sent by the check. The reply is returned as-is.
pub const CHECK_PROMPT: &str = "Say \"API is working\" if you receive this message.";

/// Completion budget for the check.
pub const CHECK_MAX_TOKENS: u32 = 10;

#[derive(Debug, Default, Deserialize)]
pub struct ProviderCheckQuery {
    /// `openai` or `gemini`; defaults to `llm.default_provider`
    #[serde(default)]
    pub provider: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ProviderCheck {
    pub success: bool,
    pub provider: String,
    pub message: Option<String>,
}

/// GET /api/providers/check - send one tiny completion to a provider.
pub async fn handle(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ProviderCheckQuery>,
) -> Result<Json<ProviderCheck>, ApiError> {
    let kind = match query.provider.as_deref() {
        Some(name) => name
            .parse::<ProviderKind>()
            .map_err(|e| ApiError::bad_request(&e))?,
        None => state.config.llm.default_provider,
    };

    let options = CompletionOptions {
        temperature: state.config.recommend.temperature,
        max_tokens: CHECK_MAX_TOKENS,
    };

    let message = state
        .providers
        .get(kind)
        .complete(CHECK_PROMPT, options)
        .await
        .map_err(|e| {
            warn!(provider = %kind, error = %e, "Provider check failed");
            ApiError::from(e)
        })?;

    info!(provider = %kind, "Provider check succeeded");
    Ok(Json(ProviderCheck {
        success: true,
        provider: kind.to_string(),
        message,
    }))
}
