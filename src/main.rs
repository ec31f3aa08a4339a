//! Quote-Harvest main entry point
//!
//! This is the command-line interface for the Quote-Harvest scraper.

use anyhow::Context;
use clap::Parser;
use quote_harvest::config::{load_config_with_hash, Config};
use quote_harvest::output::write_quotes;
use quote_harvest::scrape::scrape_site;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Quote-Harvest: a concurrent paginated quote scraper
///
/// Quote-Harvest fetches a fixed range of listing pages concurrently, extracts
/// every quote in deterministic page order, and writes the result to a single
/// JSON file.
#[derive(Parser, Debug)]
#[command(name = "quote-harvest")]
#[command(version = "1.0.0")]
#[command(about = "A concurrent paginated quote scraper", long_about = None)]
struct Cli {
    /// Path to TOML configuration file (built-in defaults when omitted)
    #[arg(value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Validate config and show what would be scraped without fetching
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    let config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            let (config, config_hash) = load_config_with_hash(path)
                .with_context(|| format!("failed to load {}", path.display()))?;
            tracing::info!("Configuration loaded successfully (hash: {})", config_hash);
            config
        }
        None => {
            // The library default is 10 pages; the binary covers the whole site.
            let mut config = Config::default();
            config.scrape.max_pages = 100;
            tracing::info!("No config file given, using built-in defaults");
            config
        }
    };

    if cli.dry_run {
        handle_dry_run(&config);
        return Ok(());
    }

    handle_scrape(config).await
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("quote_harvest=info,warn"),
            1 => EnvFilter::new("quote_harvest=debug,info"),
            2 => EnvFilter::new("quote_harvest=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Handles the --dry-run mode: validates config and shows what would be scraped
fn handle_dry_run(config: &Config) {
    println!("=== Quote-Harvest Dry Run ===\n");

    println!("Scrape:");
    println!("  Base URL: {}", config.scrape.base_url);
    println!("  Max pages: {}", config.scrape.max_pages);

    println!("\nUser Agent:");
    println!("  Name: {}", config.user_agent.scraper_name);
    println!("  Version: {}", config.user_agent.scraper_version);

    println!("\nOutput:");
    println!("  JSON file: {}", config.output.json_path);

    println!("\n✓ Configuration is valid");
    println!(
        "✓ Would fetch {} listing pages concurrently",
        config.scrape.max_pages
    );
}

/// Handles the main scrape operation
async fn handle_scrape(config: Config) -> anyhow::Result<()> {
    let json_path = PathBuf::from(&config.output.json_path);

    // The output file is only touched after the entire scrape has succeeded.
    let quotes = scrape_site(config).await.context("scrape failed")?;
    write_quotes(&quotes, &json_path).context("failed to write output file")?;

    println!("✓ {} quotes written to {}", quotes.len(), json_path.display());
    Ok(())
}
