//! Champion roster endpoint.

use super::{ApiError, AppState};
use crate::catalog::{Champion, Role};
use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Debug, Default, Deserialize)]
pub struct ChampionQuery {
    /// Case-insensitive name substring
    #[serde(default)]
    pub q: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ChampionList {
    pub version: String,
    pub champions: Vec<ChampionEntry>,
}

/// A roster champion with its difficulty label.
#[derive(Debug, Serialize)]
pub struct ChampionEntry {
    #[serde(flatten)]
    pub champion: Champion,
    pub difficulty_text: &'static str,
}

impl From<Champion> for ChampionEntry {
    fn from(champion: Champion) -> Self {
        let difficulty_text = champion.difficulty_label();
        Self {
            champion,
            difficulty_text,
        }
    }
}

/// GET /api/champions - roster, optionally filtered by name and role.
pub async fn handle(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ChampionQuery>,
) -> Result<Json<ChampionList>, ApiError> {
    let role = query
        .role
        .as_deref()
        .map(str::parse::<Role>)
        .transpose()
        .map_err(|e| ApiError::bad_request(&e))?;

    let catalog = state.recommender.catalog();
    catalog.initialize().await.map_err(|e| {
        ApiError::service_unavailable(&format!("Champion catalog unavailable: {}", e))
    })?;

    let champions = catalog
        .search(query.q.as_deref().unwrap_or(""), role)
        .into_iter()
        .map(ChampionEntry::from)
        .collect();
    Ok(Json(ChampionList {
        version: catalog.version().unwrap_or_default(),
        champions,
    }))
}
