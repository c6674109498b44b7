use clap::Parser;
use draftpick::cli::{
    handle_build, handle_completions, handle_config_init, handle_recommend, Cli, Commands,
    ConfigCommands,
};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Serve(args) => draftpick::cli::serve::run_serve(args).await,
        Commands::Recommend(args) => handle_recommend(&args).await.map(|output| {
            println!("{}", output);
        }),
        Commands::Build(args) => handle_build(&args).await.map(|output| {
            println!("{}", output);
        }),
        Commands::Config(config_cmd) => match config_cmd {
            ConfigCommands::Init(args) => handle_config_init(&args),
        },
        Commands::Completions(args) => {
            handle_completions(&args);
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
