//! Serve command implementation

use crate::api::{create_router, AppState};
use crate::catalog::ChampionCatalog;
use crate::cli::ServeArgs;
use crate::config::{DraftpickConfig, LogFormat};
use std::sync::Arc;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Load configuration with CLI overrides
pub fn load_config_with_overrides(
    args: &ServeArgs,
) -> Result<DraftpickConfig, Box<dyn std::error::Error>> {
    // Load from file if it exists, otherwise use defaults
    let mut config = if args.config.exists() {
        DraftpickConfig::load(Some(&args.config))?
    } else {
        tracing::debug!("Config file not found, using defaults");
        DraftpickConfig::default()
    };

    config = config.with_env_overrides();

    // CLI overrides (highest priority)
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(ref host) = args.host {
        config.server.host = host.clone();
    }
    if let Some(ref log_level) = args.log_level {
        config.logging.level = log_level.clone();
    }

    Ok(config)
}

/// Initialize tracing based on configuration
pub fn init_tracing(
    config: &crate::config::LoggingConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let filter_str = crate::logging::build_filter_directives(config);

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&filter_str));

    if config.enable_content_logging {
        eprintln!("WARNING: Content logging is enabled. Prompt and LLM response text will be logged.");
        eprintln!("         Use only for debugging.");
    }

    match config.format {
        LogFormat::Pretty => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().pretty())
                .try_init()?;
        }
        LogFormat::Json => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().json())
                .try_init()?;
        }
    }

    Ok(())
}

/// Load the champion roster in the background so the first request does
/// not pay for it. Failures are logged; requests retry the load.
pub fn start_catalog_warmup(
    catalog: Arc<ChampionCatalog>,
    cancel_token: CancellationToken,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        tokio::select! {
            result = catalog.initialize() => match result {
                Ok(()) => tracing::info!(
                    version = ?catalog.version(),
                    "Champion catalog warmed up"
                ),
                Err(e) => tracing::warn!(
                    error = %e,
                    "Champion catalog warmup failed, will retry on first request"
                ),
            },
            _ = cancel_token.cancelled() => {
                tracing::debug!("Catalog warmup cancelled");
            }
        }
    })
}

/// Wait for shutdown signal (SIGINT or SIGTERM)
async fn shutdown_signal(cancel_token: CancellationToken) {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install CTRL+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received SIGINT, shutting down...");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, shutting down...");
        }
    }

    cancel_token.cancel();
}

/// Main serve command handler
pub async fn run_serve(args: ServeArgs) -> Result<(), Box<dyn std::error::Error>> {
    // 1. Load and merge configuration
    let config = load_config_with_overrides(&args)?;
    config.validate()?;

    // 2. Initialize tracing
    init_tracing(&config.logging)?;

    tracing::info!("Starting draftpick server");
    tracing::debug!(?config, "Loaded configuration");

    // 3. Build services; an eagerly resolved key that is missing stops here
    let app_state = Arc::new(AppState::new(Arc::new(config.clone()))?);
    let app = create_router(Arc::clone(&app_state));

    // 4. Warm the champion catalog
    let cancel_token = CancellationToken::new();
    let warmup_handle = start_catalog_warmup(
        Arc::clone(app_state.recommender.catalog()),
        cancel_token.clone(),
    );

    // 5. Bind and serve
    let addr = format!("{}:{}", config.server.host, config.server.port);
    tracing::info!(addr = %addr, "draftpick API server listening");

    let listener = tokio::net::TcpListener::bind(&addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(cancel_token.clone()))
        .await?;

    // 6. Cleanup
    cancel_token.cancel();
    warmup_handle.await?;

    tracing::info!("draftpick server stopped");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Champion;
    use std::path::PathBuf;
    use std::time::Duration;
    use tempfile::NamedTempFile;

    fn args(config: PathBuf) -> ServeArgs {
        ServeArgs {
            config,
            port: None,
            host: None,
            log_level: None,
        }
    }

    #[tokio::test]
    async fn test_serve_config_loading() {
        let temp = NamedTempFile::new().unwrap();
        std::fs::write(temp.path(), "[server]\nport = 8080").unwrap();

        let config = load_config_with_overrides(&args(temp.path().to_path_buf())).unwrap();
        assert_eq!(config.server.port, 8080);
    }

    #[tokio::test]
    async fn test_serve_cli_overrides_config() {
        let temp = NamedTempFile::new().unwrap();
        std::fs::write(temp.path(), "[server]\nport = 8080").unwrap();

        let mut serve_args = args(temp.path().to_path_buf());
        serve_args.port = Some(9000);
        serve_args.log_level = Some("debug".to_string());

        let config = load_config_with_overrides(&serve_args).unwrap();
        assert_eq!(config.server.port, 9000); // CLI wins
        assert_eq!(config.logging.level, "debug");
    }

    #[tokio::test]
    async fn test_serve_works_without_config_file() {
        let config = load_config_with_overrides(&args(PathBuf::from("nonexistent.toml"))).unwrap();
        assert_eq!(config.server.host, "0.0.0.0"); // Default
    }

    #[tokio::test]
    async fn test_catalog_warmup_completes_for_static_roster() {
        let catalog = Arc::new(ChampionCatalog::from_champions(vec![Champion::new(
            "Ahri",
            "103",
            "Ahri",
            &["Mage"],
        )]));

        let handle = start_catalog_warmup(catalog, CancellationToken::new());
        let result = tokio::time::timeout(Duration::from_secs(1), handle).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_catalog_warmup_stops_on_shutdown() {
        // Unroutable address: the fetch would hang until the client timeout.
        let config = crate::config::CatalogConfig {
            base_url: "http://10.255.255.1".to_string(),
            ..Default::default()
        };
        let catalog = Arc::new(ChampionCatalog::new(
            &config,
            Arc::new(reqwest::Client::new()),
        ));

        let cancel = CancellationToken::new();
        let handle = start_catalog_warmup(catalog, cancel.clone());
        tokio::time::sleep(Duration::from_millis(50)).await;
        cancel.cancel();

        let result = tokio::time::timeout(Duration::from_secs(1), handle).await;
        assert!(result.is_ok());
    }
}
