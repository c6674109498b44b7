//! Health check endpoint handler.

use crate::api::AppState;
use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub uptime_seconds: u64,
    pub catalog: CatalogHealth,
}

#[derive(Debug, Serialize)]
pub struct CatalogHealth {
    pub ready: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fetched_at: Option<DateTime<Utc>>,
    pub champions: usize,
}

/// GET /health - Return service status.
///
/// The service is "degraded" until the champion catalog has loaded.
pub async fn handle(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let catalog = state.recommender.catalog();
    let ready = catalog.is_ready();

    Json(HealthResponse {
        status: if ready { "healthy" } else { "degraded" }.to_string(),
        uptime_seconds: state.start_time.elapsed().as_secs(),
        catalog: CatalogHealth {
            ready,
            version: catalog.version(),
            fetched_at: catalog.fetched_at(),
            champions: catalog.list_all().len(),
        },
    })
}
