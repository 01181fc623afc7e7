mod cli;
mod config;
mod embedding;
mod error;
mod generation;
mod index;
mod mission;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "missioneer",
    version,
    about = "Semantic mission log with retrieval-augmented generation"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Add a mission with an explicit title and description
    Add {
        #[arg(long)]
        title: String,
        #[arg(long)]
        description: String,
    },
    /// Search missions by meaning
    Search {
        /// Free-text query
        query: String,
        /// Maximum number of results
        #[arg(long)]
        top_k: Option<usize>,
    },
    /// Generate a new mission from retrieved context and append it
    Generate {
        /// Theme for the new mission
        query: String,
    },
    /// List all missions in id order
    List,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load config (for log level)
    let config = config::MissioneerConfig::load()?;

    // Initialize tracing with the configured log level, on stderr so
    // stdout stays clean for command output.
    let filter =
        EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Add { title, description } => cli::add(&config, &title, &description),
        Command::Search { query, top_k } => cli::search(&config, &query, top_k),
        Command::Generate { query } => cli::generate(&config, &query),
        Command::List => cli::list(&config),
    }
}
