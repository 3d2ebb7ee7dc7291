//! ArtScope CLI: the main entry point.
//!
//! Commands:
//! - `explore` : Interactive session (default)
//! - `search`  : Search the catalog for artists
//! - `artworks`: List one page of an artist's artworks
//! - `artwork` : Show one artwork, optionally with web research
//! - `models`  : List models installed on the inference server
//! - `doctor`  : Diagnose configuration and connectivity
//! - `onboard` : Write the default config file
//! - `config`  : Show or validate the configuration

use clap::{Parser, Subcommand};

mod commands;
mod render;

#[derive(Parser)]
#[command(
    name = "artscope",
    about = "ArtScope: explore museum artworks with a local art-history assistant",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse artists and artworks and ask questions (interactive)
    Explore,

    /// Search the catalog for artists
    Search {
        /// Free-text artist query
        query: String,
    },

    /// List an artist's artworks
    Artworks {
        artist_id: u64,

        /// Page number, starting at 1
        #[arg(short, long, default_value_t = 1)]
        page: u32,
    },

    /// Show an artwork's details
    Artwork {
        id: u64,

        /// Also show the artist's lifespan
        #[arg(long)]
        artist_id: Option<u64>,

        /// Collect web research about the artwork
        #[arg(long)]
        research: bool,
    },

    /// List models available on the inference server
    Models,

    /// Diagnose configuration and connectivity
    Doctor,

    /// Write the default configuration file
    Onboard,

    /// Configuration management
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the effective configuration
    Show,
    /// Validate the configuration file
    Validate,
    /// Print the config file location
    Path,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Logs go to stderr so the interactive output stays readable
    let filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command.unwrap_or(Commands::Explore) {
        Commands::Explore => commands::explore::run().await?,
        Commands::Search { query } => commands::search::run(&query).await?,
        Commands::Artworks { artist_id, page } => commands::artworks::run(artist_id, page).await?,
        Commands::Artwork {
            id,
            artist_id,
            research,
        } => commands::artwork::run(id, artist_id, research).await?,
        Commands::Models => commands::models::run().await?,
        Commands::Doctor => commands::doctor::run().await?,
        Commands::Onboard => commands::onboard::run().await?,
        Commands::Config { action } => match action.unwrap_or(ConfigAction::Show) {
            ConfigAction::Show => commands::config_cmd::show().await?,
            ConfigAction::Validate => commands::config_cmd::validate().await?,
            ConfigAction::Path => commands::config_cmd::path(),
        },
    }

    Ok(())
}
