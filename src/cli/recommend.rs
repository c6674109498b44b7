//! Recommend command implementation

use crate::build::BuildNormalizer;
use crate::catalog::{Champion, ChampionCatalog, Role};
use crate::cli::output::{format_json, format_recommendations_table};
use crate::cli::{load_config, RecommendArgs};
use crate::llm::create_provider;
use crate::recommend::{DraftRequest, Recommender, TeamMember};
use crate::stats::DeepLolClient;
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;

/// Handle `draftpick recommend` command
pub async fn handle_recommend(args: &RecommendArgs) -> Result<String, Box<dyn std::error::Error>> {
    let config = load_config(&args.config)?;
    let kind = args.provider.unwrap_or(config.llm.default_provider);

    let client = Arc::new(Client::new());
    let provider = create_provider(kind, &config.llm, Arc::clone(&client))?;
    let catalog = Arc::new(ChampionCatalog::new(&config.catalog, Arc::clone(&client)));
    let stats = Arc::new(DeepLolClient::new(&config.stats, client));
    let recommender = Recommender::new(
        Arc::clone(&catalog),
        Arc::new(BuildNormalizer::new(stats)),
        &config,
    );

    catalog.initialize().await?;
    let request = DraftRequest {
        allies: args
            .allies
            .iter()
            .map(|spec| parse_ally(&catalog, spec))
            .collect::<Result<_, _>>()?,
        enemies: args
            .enemies
            .iter()
            .map(|name| lookup(&catalog, name))
            .collect::<Result<_, _>>()?,
        target_role: args.role.clone(),
        use_openai: false,
    };

    let timeout = Duration::from_secs(config.server.request_timeout_seconds);
    let result = tokio::time::timeout(
        timeout,
        recommender.recommend(&request, provider, config.llm.max_tokens(kind)),
    )
    .await
    .map_err(|_| format!("Recommendation timed out after {}s", timeout.as_secs()))??;

    if args.json {
        Ok(format_json(&result)?)
    } else {
        Ok(format_recommendations_table(&result))
    }
}

/// Display name first, then Data Dragon key (`MonkeyKing`, `LeeSin`).
fn lookup(catalog: &ChampionCatalog, name: &str) -> Result<Champion, String> {
    catalog
        .find_by_name(name)
        .or_else(|| catalog.get_by_id(name))
        .ok_or_else(|| format!("Unknown champion: {}", name))
}

/// Parse `NAME:ROLE` (the role is split at the last colon).
fn parse_ally(catalog: &ChampionCatalog, spec: &str) -> Result<TeamMember, String> {
    let (name, role) = spec
        .rsplit_once(':')
        .ok_or_else(|| format!("Expected NAME:ROLE, got '{}'", spec))?;
    let role: Role = role.trim().parse()?;
    Ok(TeamMember {
        champion: lookup(catalog, name.trim())?,
        role,
    })
}
