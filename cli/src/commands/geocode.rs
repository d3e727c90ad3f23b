//! geocode command - resolve addresses and write the cache CSV.

use super::{print_load_summary, DataArgs};
use anyhow::{Context, Result};
use atlas_data::{load_cached, load_records, write_cache};
use atlas_geocode::{NominatimClient, RateLimited};
use clap::Args;
use colored::Colorize;
use std::time::Duration;

/// Arguments for the geocode command.
#[derive(Args)]
pub struct GeocodeArgs {
    #[command(flatten)]
    pub data: DataArgs,

    /// Geocoding endpoint
    #[arg(long, env = "ATLAS_GEOCODE_URL", default_value = atlas_geocode::client::DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Minimum delay between requests, in milliseconds
    #[arg(long, default_value_t = 1000)]
    pub delay_ms: u64,

    /// Retries per address on transient failures
    #[arg(long, default_value_t = 3)]
    pub retries: u32,

    /// Re-geocode even when a usable cache exists
    #[arg(long)]
    pub force: bool,
}

/// Execute the geocode command.
pub async fn execute(args: GeocodeArgs) -> Result<()> {
    if !args.force {
        if let Some((records, report)) = load_cached(&args.data.cache)? {
            print_load_summary(&records, &report, true, &args.data.cache);
            println!(
                "{} {}",
                "Cache is usable, nothing to do.".green(),
                "(--force to re-geocode)".dimmed()
            );
            return Ok(());
        }
    }

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

    write_cache(&args.data.cache, &records)
        .with_context(|| format!("writing cache {}", args.data.cache.display()))?;

    println!(
        "{} {} geocoded, {} failed, {} already resolved",
        "Done:".green().bold(),
        summary.geocoded,
        summary.failed,
        summary.already_resolved,
    );
    println!("{} {}", "Cache written:".green(), args.data.cache.display());
    Ok(())
}
