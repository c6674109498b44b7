//! CLI module for draftpick
//!
//! Command-line interface definitions and handlers.
//!
//! # Commands
//!
//! - `serve` - Start the HTTP API server
//! - `recommend` - Recommend champions for a draft
//! - `build` - Show the best recorded build for a champion and role
//! - `config` - Configuration utilities (init)
//! - `completions` - Generate shell completions
//!
//! # Example
//!
//! ```bash
//! # Start server with default config
//! draftpick serve
//!
//! # Recommend a mid laner against Zed with Lee Sin in the jungle
//! draftpick recommend --role Mid --ally "Lee Sin:Jungle" --enemy Zed
//!
//! # Generate shell completions
//! draftpick completions bash > ~/.bash_completion.d/draftpick
//! ```

pub mod build;
pub mod completions;
pub mod config;
pub mod output;
pub mod recommend;
pub mod serve;

pub use build::handle_build;
pub use completions::handle_completions;
pub use config::handle_config_init;
pub use recommend::handle_recommend;

use crate::config::{DraftpickConfig, ProviderKind};
use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};

/// draftpick - League of Legends draft assistant
#[derive(Parser, Debug)]
#[command(
    name = "draftpick",
    version,
    about = "LLM champion recommendations with resolved builds"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the HTTP API server
    Serve(ServeArgs),
    /// Recommend champions for a draft
    Recommend(RecommendArgs),
    /// Show the build for a champion in a role
    Build(BuildArgs),
    /// Configuration utilities
    #[command(subcommand)]
    Config(ConfigCommands),
    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Path to configuration file
    #[arg(short, long, default_value = "draftpick.toml")]
    pub config: PathBuf,

    /// Override server port
    #[arg(short, long, env = "DRAFTPICK_PORT")]
    pub port: Option<u16>,

    /// Override server host
    #[arg(short = 'H', long, env = "DRAFTPICK_HOST")]
    pub host: Option<String>,

    /// Set log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "DRAFTPICK_LOG_LEVEL")]
    pub log_level: Option<String>,
}

#[derive(Args, Debug)]
pub struct RecommendArgs {
    /// Target role (Top, Jungle, Mid, ADC, Support)
    #[arg(short, long)]
    pub role: String,

    /// Ally as NAME:ROLE (repeatable)
    #[arg(short, long = "ally", value_name = "NAME:ROLE")]
    pub allies: Vec<String>,

    /// Enemy champion name (repeatable)
    #[arg(short, long = "enemy", value_name = "NAME")]
    pub enemies: Vec<String>,

    /// LLM provider (openai, gemini); defaults to llm.default_provider
    #[arg(short, long)]
    pub provider: Option<ProviderKind>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Path to configuration file
    #[arg(short, long, default_value = "draftpick.toml")]
    pub config: PathBuf,
}

#[derive(Args, Debug)]
pub struct BuildArgs {
    /// Champion display name (e.g. "Lee Sin")
    #[arg(short = 'n', long)]
    pub champion: String,

    /// Role (Top, Jungle, Mid, ADC, Support)
    #[arg(short, long)]
    pub role: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Path to configuration file
    #[arg(short, long, default_value = "draftpick.toml")]
    pub config: PathBuf,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Initialize a new configuration file
    Init(ConfigInitArgs),
}

#[derive(Args, Debug)]
pub struct ConfigInitArgs {
    /// Output file path
    #[arg(short, long, default_value = "draftpick.toml")]
    pub output: PathBuf,

    /// Overwrite existing file
    #[arg(short, long)]
    pub force: bool,
}

#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: clap_complete::Shell,
}

/// Load the config file if present (defaults otherwise), apply env
/// overrides, and validate.
pub fn load_config(path: &Path) -> Result<DraftpickConfig, Box<dyn std::error::Error>> {
    let config = if path.exists() {
        DraftpickConfig::load(Some(path))?
    } else {
        tracing::debug!("Config file not found, using defaults");
        DraftpickConfig::default()
    };

    let config = config.with_env_overrides();
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_cli_parse_serve_defaults() {
        let cli = Cli::try_parse_from(["draftpick", "serve"]).unwrap();
        match cli.command {
            Commands::Serve(args) => {
                assert_eq!(args.config, PathBuf::from("draftpick.toml"));
                assert!(args.port.is_none());
            }
            _ => panic!("Expected Serve command"),
        }
    }

    #[test]
    fn test_cli_parse_serve_with_port() {
        let cli = Cli::try_parse_from(["draftpick", "serve", "-p", "9000"]).unwrap();
        match cli.command {
            Commands::Serve(args) => assert_eq!(args.port, Some(9000)),
            _ => panic!("Expected Serve command"),
        }
    }

    #[test]
    fn test_cli_parse_recommend() {
        let cli = Cli::try_parse_from([
            "draftpick",
            "recommend",
            "--role",
            "Mid",
            "--ally",
            "Lee Sin:Jungle",
            "--ally",
            "Jinx:ADC",
            "--enemy",
            "Zed",
            "--provider",
            "openai",
            "--json",
        ])
        .unwrap();
        match cli.command {
            Commands::Recommend(args) => {
                assert_eq!(args.role, "Mid");
                assert_eq!(args.allies, vec!["Lee Sin:Jungle", "Jinx:ADC"]);
                assert_eq!(args.enemies, vec!["Zed"]);
                assert_eq!(args.provider, Some(ProviderKind::OpenAI));
                assert!(args.json);
            }
            _ => panic!("Expected Recommend command"),
        }
    }

    #[test]
    fn test_cli_parse_recommend_rejects_unknown_provider() {
        let result =
            Cli::try_parse_from(["draftpick", "recommend", "--role", "Mid", "-p", "claude"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_parse_build() {
        let cli =
            Cli::try_parse_from(["draftpick", "build", "--champion", "Ahri", "--role", "Mid"])
                .unwrap();
        match cli.command {
            Commands::Build(args) => {
                assert_eq!(args.champion, "Ahri");
                assert_eq!(args.role, "Mid");
                assert!(!args.json);
            }
            _ => panic!("Expected Build command"),
        }
    }

    #[test]
    fn test_cli_parse_config_init() {
        let cli = Cli::try_parse_from(["draftpick", "config", "init", "--force"]).unwrap();
        match cli.command {
            Commands::Config(ConfigCommands::Init(args)) => assert!(args.force),
            _ => panic!("Expected Config Init command"),
        }
    }

    #[test]
    fn test_load_config_missing_file_uses_defaults() {
        let config = load_config(Path::new("/nonexistent/draftpick.toml")).unwrap();
        assert_eq!(config.catalog.locale, "en_US");
    }

    #[test]
    fn test_load_config_rejects_invalid() {
        let temp = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(temp.path(), "[recommend]\nmax_rounds = 0").unwrap();
        assert!(load_config(temp.path()).is_err());
    }
}
