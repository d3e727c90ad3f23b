//! run command - the full pipeline in one invocation.

use super::{print_keyword_summary, print_load_summary, DataArgs, RankingArgs};
use anyhow::{Context, Result};
use atlas_data::{load_cached, load_records, write_cache};
use atlas_geocode::{NominatimClient, RateLimited};
use atlas_keywords::{DistrictKeywordEngine, ParticleStripAnalyzer};
use atlas_map::{MapDocument, MapOptions};
use clap::Args;
use colored::Colorize;
use std::path::PathBuf;
use std::time::Duration;

/// Arguments for the run command.
#[derive(Args)]
pub struct RunArgs {
    #[command(flatten)]
    pub data: DataArgs,

    #[command(flatten)]
    pub ranking: RankingArgs,

    /// Output HTML file
    #[arg(short, long, default_value = "gwangju_architecture_map.html")]
    pub out: PathBuf,

    /// Geocoding endpoint
    #[arg(long, env = "ATLAS_GEOCODE_URL", default_value = atlas_geocode::client::DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Minimum delay between geocoding requests, in milliseconds
    #[arg(long, default_value_t = 1000)]
    pub delay_ms: u64,

    /// Retries per address on transient failures
    #[arg(long, default_value_t = 3)]
    pub retries: u32,
}

/// Execute the run command.
pub async fn execute(args: RunArgs) -> Result<()> {
    // (A) Records: reuse the cache when usable, otherwise load and geocode.
    let (records, from_cache) = match load_cached(&args.data.cache)? {
        Some((records, report)) => {
            print_load_summary(&records, &report, true, &args.data.cache);
            (records, true)
        }
        None => {
            let (mut records, report) = load_records(&args.data.input)
                .with_context(|| format!("reading dataset {}", args.data.input.display()))?;
            print_load_summary(&records, &report, false, &args.data.input);

            let client = NominatimClient::with_base_url(&args.base_url)?;
            let driver = RateLimited::with_policy(
                client,
                Duration::from_millis(args.delay_ms),
                args.retries,
            );
            println!("{}", "Geocoding addresses...".yellow());
            let summary = driver.enrich_records(&mut records).await;
            println!(
                "{} {} geocoded, {} failed",
                "Geocoding done:".green(),
                summary.geocoded,
                summary.failed,
            );

            write_cache(&args.data.cache, &records)
                .with_context(|| format!("writing cache {}", args.data.cache.display()))?;
            println!("{} {}", "Cache written:".green(), args.data.cache.display());
            (records, false)
        }
    };
    if from_cache {
        println!("{}", "Skipping geocoding, cache already resolved.".dimmed());
    }

    // (B) District keywords.
    let engine =
        DistrictKeywordEngine::new(ParticleStripAnalyzer::new(), args.ranking.to_params());
    let run = engine.run(&records)?;
    print_keyword_summary(&run);

    // (C) Map page.
    let document = MapDocument::render(&records, run.payload, &MapOptions::default())?;
    document.write_to(&args.out)?;
    println!();
    println!(
        "{} {} ({} markers, {} without coordinates)",
        "Map written:".green().bold(),
        args.out.display(),
        document.markers,
        document.skipped_without_coordinates,
    );
    Ok(())
}
