//! Linkpost CLI binary.
//!
//! This binary provides command-line access to linkpost's functionality:
//! - Serve the HTTP API
//! - Publish one post per invocation for schedulers (`daily-post`)
//! - Generate, preview and inspect configuration without publishing

use clap::Parser;
use linkpost::observability::{ObservabilityConfig, init_observability_with_config};
use linkpost_core::LinkpostConfig;

mod cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use cli::{
        Cli, Commands, generate_post, handle_serve_command, run_daily_post, show_preview,
        show_profile, show_status,
    };

    // A missing .env file is fine; real environment variables still apply.
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    init_observability_with_config(ObservabilityConfig::default().with_verbose(cli.verbose))?;

    let loaded = LinkpostConfig::load();

    match cli.command {
        Commands::Serve { port } => {
            handle_serve_command(&loaded?, port).await?;
        }

        // Configuration failures end up in the printed summary.
        Commands::DailyPost => {
            std::process::exit(run_daily_post(loaded).await);
        }

        Commands::Generate {
            topic,
            max_tokens,
            stream,
        } => {
            generate_post(&loaded?, topic, max_tokens, stream).await?;
        }

        Commands::Preview => show_preview(),

        Commands::Status => show_status(&loaded?),

        Commands::Profile => {
            show_profile(&loaded?).await?;
        }
    }

    Ok(())
}
