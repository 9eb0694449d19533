//! CLI command definitions.

use clap::{Parser, Subcommand};

/// Linkpost - generate LinkedIn posts with Gemini and publish them
#[derive(Parser, Debug)]
#[command(name = "linkpost")]
#[command(about = "Generate LinkedIn posts with Gemini and publish them", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Run the HTTP API
    Serve {
        /// Port to listen on (defaults to PORT, then 3000)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Generate and publish one post with a random topic (for schedulers)
    DailyPost,

    /// Generate a post without publishing it
    Generate {
        /// Topic to write about (random when omitted)
        #[arg(short, long)]
        topic: Option<String>,

        /// Maximum output tokens
        #[arg(long)]
        max_tokens: Option<u32>,

        /// Print text as it streams from Gemini
        #[arg(long)]
        stream: bool,
    },

    /// Print a random prompt without calling any provider
    Preview,

    /// Show which providers are configured
    Status,

    /// Show the LinkedIn profile behind the access token
    Profile,
}
