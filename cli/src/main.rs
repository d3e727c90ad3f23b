//! Command-line interface for the Gwangju Tourism Atlas.
//!
//! Subcommands mirror the pipeline's phases:
//! - geocode: resolve facility addresses and write the geocode cache
//! - keywords: compute per-district distinguishing keywords
//! - render: build the interactive map page
//! - run: geocode + keywords + render in one pass
//!
//! Configuration via environment:
//! - ATLAS_GEOCODE_URL: geocoding endpoint (default: public Nominatim)
//! - ATLAS_LOG: log filter (default: info)

mod commands;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{
    geocode::GeocodeArgs, keywords::KeywordsArgs, render::RenderArgs, run::RunArgs,
};

/// Gwangju Tourism Atlas CLI
///
/// Enriches a facility CSV with coordinates and district labels, computes
/// district-differentiating keywords, and renders a layered map.
#[derive(Parser)]
#[command(name = "atlas")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Geocode facility addresses and write the cache CSV
    Geocode(GeocodeArgs),

    /// Compute per-district keywords
    Keywords(KeywordsArgs),

    /// Render the interactive map page
    Render(RenderArgs),

    /// Run the whole pipeline: geocode, keywords, render
    Run(RunArgs),
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("ATLAS_LOG").unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Geocode(args) => commands::geocode::execute(args).await,
        Commands::Keywords(args) => commands::keywords::execute(args),
        Commands::Render(args) => commands::render::execute(args),
        Commands::Run(args) => commands::run::execute(args).await,
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
