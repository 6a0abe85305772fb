//! price-machine - Merge CSV price lists and compare products by unit price
//!
//! Loads the price lists, writes an HTML snapshot sorted by price per kg and
//! then answers name searches interactively.

use anyhow::{Context, Result};
use clap::Parser;
use price_machine::catalog::{CatalogLoader, LabelMatching};
use price_machine::commands::{ExportCommand, InteractiveSession, SearchCommand};
use price_machine::config::{Config, OutputFormat};
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "price-machine",
    version,
    about = "Merge CSV price lists and compare products by price per kg",
    long_about = "Loads every price list from a data directory, exports a merged table sorted by \
                  unit price to HTML and starts an interactive product search."
)]
struct Cli {
    /// Directory with price lists (default: `data` next to the executable)
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// HTML export destination
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Path to config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output format for search results
    #[arg(short, long)]
    format: Option<OutputFormat>,

    /// Header matching mode (exact, normalized)
    #[arg(long)]
    label_matching: Option<LabelMatching>,

    /// Skip writing the HTML export
    #[arg(long)]
    no_export: bool,

    /// Run a single search and exit instead of prompting
    #[arg(short, long)]
    query: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new(Level::DEBUG.to_string())
    } else {
        EnvFilter::from_default_env().add_directive(Level::WARN.into())
    };

    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();

    // Load config, then apply CLI overrides
    let mut config = Config::load(cli.config.as_deref())?;

    if let Some(dir) = cli.data_dir {
        config.data_dir = Some(dir);
    }
    if let Some(output) = cli.output {
        config.output = output;
    }
    if let Some(format) = cli.format {
        config.format = format;
    }
    if let Some(matching) = cli.label_matching {
        config.label_matching = matching;
    }

    let data_dir = config.resolve_data_dir()?;
    let report = CatalogLoader::from_config(&config)
        .load(&data_dir)
        .with_context(|| format!("Cannot load price lists from {}", data_dir.display()))?;

    if report.sources.is_empty() {
        println!("No price lists found in {}.", data_dir.display());
    }
    for line in report.diagnostics() {
        println!("{}", line);
    }

    let catalog = report.catalog;

    if !cli.no_export {
        let outcome = ExportCommand::new(&config).execute(&catalog)?;
        println!("{}", outcome.message());
    }

    let search = SearchCommand::new(&config);

    if let Some(query) = cli.query {
        println!("{}", search.execute(&catalog, &query));
        return Ok(());
    }

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    InteractiveSession::new(&catalog, search).run(stdin.lock(), stdout.lock())
}
