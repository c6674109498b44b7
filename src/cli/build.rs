//! Build command implementation

use crate::build::BuildNormalizer;
use crate::catalog::Role;
use crate::cli::output::{format_build_table, format_json};
use crate::cli::{load_config, BuildArgs};
use crate::stats::DeepLolClient;
use reqwest::Client;
use std::sync::Arc;

/// Handle `draftpick build` command
///
/// Unlike the recommendation flow this reports lookup failures instead of
/// printing the placeholder build.
pub async fn handle_build(args: &BuildArgs) -> Result<String, Box<dyn std::error::Error>> {
    let config = load_config(&args.config)?;
    let role: Role = args.role.parse()?;

    let stats = Arc::new(DeepLolClient::new(&config.stats, Arc::new(Client::new())));
    let normalizer = BuildNormalizer::new(stats);
    let build = normalizer.try_resolve(&args.champion, role).await?;

    if args.json {
        Ok(format_json(&build)?)
    } else {
        Ok(format_build_table(&args.champion, role.as_str(), &build))
    }
}
