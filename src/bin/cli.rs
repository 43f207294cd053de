//! Watchlist Streams CLI
//!
//! With no command, runs the whole pipeline: links, films, availability,
//! report.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use watchlist_streams::{
    error::Result,
    models::Config,
    pipeline::{self, Stage},
    services::JustWatchClient,
    storage::LocalStorage,
    utils::Fetcher,
};

/// Watchlist Streams - which subscription services carry your watchlist
#[derive(Parser, Debug)]
#[command(
    name = "watchlist-streams",
    version,
    about = "Groups a Letterboxd watchlist by streaming service"
)]
struct Cli {
    /// Path to the TOML configuration file
    #[arg(short, long, default_value = "config.toml", global = true)]
    config: PathBuf,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Harvest film links from the watchlist pages
    Links,

    /// Fetch film details for every harvested link
    Films,

    /// Look up subscription services for every film
    Availability,

    /// Write the report grouped by service
    Report,

    /// Run every stage in order (default)
    Pipeline {
        /// Resume from this stage using the files already on disk
        #[arg(long, value_enum, default_value = "links")]
        from: Stage,
    },

    /// Dump the lookup service's provider catalog
    Providers,

    /// Validate the configuration file
    Validate,

    /// Show which stage files exist
    Info,
}

/// Initialize logging based on verbosity flag.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

/// Main entry point for the CLI application.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = Config::load(&cli.config)?;
    log::info!("Loaded configuration from {}", cli.config.display());

    if let Err(e) = config.validate() {
        log::error!("Config validation failed: {}", e);
        return Err(e);
    }

    let storage = LocalStorage::new(&config.paths.data_dir);
    let command = cli.command.unwrap_or(Command::Pipeline { from: Stage::Links });

    match command {
        Command::Validate => {
            log::info!("✓ Config OK ({} services of interest)", config.services.len());
            for (short_name, name) in &config.services {
                log::info!("    {} -> {}", short_name, name);
            }
        }

        Command::Info => {
            pipeline::run_info(&config, &storage).await?;
        }

        Command::Report => {
            pipeline::run_report(&config, &storage).await?;
        }

        Command::Links => {
            let fetcher = Fetcher::new(&config.crawler)?;
            pipeline::run_harvester(&config, &fetcher, &storage).await?;
        }

        Command::Films => {
            let fetcher = Fetcher::new(&config.crawler)?;
            pipeline::run_detail_fetcher(&config, &fetcher, &storage).await?;
        }

        Command::Availability => {
            let lookup = JustWatchClient::new(&config.lookup, Fetcher::new(&config.crawler)?)?;
            pipeline::run_resolver(&config, &lookup, &storage).await?;
        }

        Command::Providers => {
            let lookup = JustWatchClient::new(&config.lookup, Fetcher::new(&config.crawler)?)?;
            pipeline::run_provider_catalog(&config, &lookup, &storage).await?;
        }

        Command::Pipeline { from } => {
            let fetcher = Fetcher::new(&config.crawler)?;
            let lookup = JustWatchClient::new(&config.lookup, fetcher.clone())?;
            pipeline::run_pipeline(&config, &fetcher, &lookup, &storage, from).await?;
        }
    }

    log::info!("Done!");

    Ok(())
}
