mod commands;
mod render;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use rinkside_core::config::RinksideConfig;
use tracing_subscriber::EnvFilter;

use commands::FilterArgs;

#[derive(Parser)]
#[command(name = "rinkside")]
#[command(about = "Browse upcoming skating and hockey sessions and add them to your calendar")]
struct Cli {
    /// Events JSON file (defaults to the configured feed)
    #[arg(long, global = true)]
    feed: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List events matching the filters
    List {
        #[command(flatten)]
        filters: FilterArgs,
    },
    /// List the cities that have events
    Cities,
    /// List the dates that have events
    Dates,
    /// Write an .ics file for the Nth listed event
    Export {
        /// Position in `list` output (1-based)
        index: usize,

        /// Directory to write into (defaults to the current directory)
        #[arg(long)]
        dir: Option<PathBuf>,

        #[command(flatten)]
        filters: FilterArgs,
    },
    /// Print an "add to calendar" link for the Nth listed event
    Link {
        /// Position in `list` output (1-based)
        index: usize,

        #[command(flatten)]
        filters: FilterArgs,
    },
    /// Convert an arena's .ics calendar into feed JSON
    Import {
        /// Calendar file to read
        file: PathBuf,

        #[arg(long)]
        arena_name: String,

        #[arg(long)]
        street: String,

        #[arg(long)]
        city: String,

        #[arg(long, default_value = "MN")]
        state: String,

        #[arg(long)]
        zip: String,

        /// Only import entries whose description or summary contains this
        #[arg(long, default_value = "Open Skate")]
        marker: String,

        /// Event type to assign to imported entries
        #[arg(long = "type", default_value = "Open Skate")]
        event_type: String,
    },
    /// Show config paths and values, or change the feed file
    Config {
        /// Save this path as the default feed
        #[arg(long)]
        set_feed: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = RinksideConfig::load()?;
    let feed = cli.feed.unwrap_or_else(|| config.feed_path());

    match cli.command {
        Commands::List { filters } => commands::list::run(&feed, &filters, &config).await,
        Commands::Cities => commands::facets::cities(&feed).await,
        Commands::Dates => commands::facets::dates(&feed).await,
        Commands::Export {
            index,
            dir,
            filters,
        } => {
            let dir = dir.unwrap_or_else(|| PathBuf::from("."));
            commands::export::run(&feed, index, &dir, &filters, &config).await
        }
        Commands::Link { index, filters } => {
            commands::link::run(&feed, index, &filters, &config).await
        }
        Commands::Import {
            file,
            arena_name,
            street,
            city,
            state,
            zip,
            marker,
            event_type,
        } => {
            let arena = commands::import::arena(arena_name, street, city, state, zip);
            commands::import::run(&file, arena, marker, event_type).await
        }
        Commands::Config { set_feed } => commands::config::run(config, set_feed),
    }
}
