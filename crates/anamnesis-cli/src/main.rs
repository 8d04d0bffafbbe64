//! Anamnesis CLI entry point.
//!
//! Binary name: `anam`
//!
//! Parses CLI arguments, resolves configuration and the API credential,
//! then dispatches to the appropriate command handler.

mod cli;
mod state;

use clap::Parser;
use clap_complete::generate;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up tracing based on verbosity
    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "warn",
        1 => "info,anamnesis=debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .init();

    // Shell completions don't need app state
    if let Commands::Completions { shell } = &cli.command {
        let mut cmd = <Cli as clap::CommandFactory>::command();
        generate(*shell, &mut cmd, "anam", &mut std::io::stdout());
        return Ok(());
    }

    // Case listing needs no credential either
    if let Commands::Cases = &cli.command {
        return cli::cases::list_cases(cli.json).await;
    }

    // Initialize application state. The API credential is resolved here,
    // once, so a missing key fails at startup rather than on the first send.
    let state = AppState::init().await?;

    match cli.command {
        Commands::Chat { case } => {
            cli::chat::run_chat_loop(&state, case.as_deref()).await?;
        }

        Commands::Check => {
            cli::check::check(&state, cli.json).await?;
        }

        Commands::Cases | Commands::Completions { .. } => unreachable!("handled above"),
    }

    Ok(())
}
