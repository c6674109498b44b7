//! Recommendation endpoint handlers.

use super::{ApiError, AppState};
use crate::config::ProviderKind;
use crate::logging::RequestId;
use crate::recommend::{DraftRequest, Recommendations};
use axum::{extract::rejection::JsonRejection, extract::State, Extension, Json};
use std::sync::Arc;
use tracing::{info, Instrument};

/// POST /api/recommendations - provider chosen by the `useOpenAI` flag.
pub async fn handle(
    State(state): State<Arc<AppState>>,
    Extension(request_id): Extension<RequestId>,
    payload: Result<Json<DraftRequest>, JsonRejection>,
) -> Result<Json<Recommendations>, ApiError> {
    let Json(request) = payload?;
    let kind = if request.use_openai {
        ProviderKind::OpenAI
    } else {
        ProviderKind::Gemini
    };
    run(&state, request_id, &request, kind).await
}

/// POST /api/gemini - always Gemini.
pub async fn handle_gemini(
    State(state): State<Arc<AppState>>,
    Extension(request_id): Extension<RequestId>,
    payload: Result<Json<DraftRequest>, JsonRejection>,
) -> Result<Json<Recommendations>, ApiError> {
    let Json(request) = payload?;
    run(&state, request_id, &request, ProviderKind::Gemini).await
}

async fn run(
    state: &AppState,
    request_id: RequestId,
    request: &DraftRequest,
    kind: ProviderKind,
) -> Result<Json<Recommendations>, ApiError> {
    let span = tracing::info_span!(
        "recommend",
        request_id = %request_id.0,
        provider = %kind,
        role = %request.target_role,
    );

    async {
        info!(
            allies = request.allies.len(),
            enemies = request.enemies.len(),
            "Recommendation request"
        );

        let provider = state.providers.get(kind);
        let max_tokens = state.config.llm.max_tokens(kind);
        let result = state
            .recommender
            .recommend(request, provider, max_tokens)
            .await?;

        Ok::<_, ApiError>(Json(result))
    }
    .instrument(span)
    .await
}
