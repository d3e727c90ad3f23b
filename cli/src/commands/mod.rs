//! Subcommand implementations and shared helpers.

pub mod geocode;
pub mod keywords;
pub mod render;
pub mod run;

use anyhow::{Context, Result};
use atlas_core::Record;
use atlas_data::{district_counts, load_cached, load_records, LoadReport};
use atlas_keywords::{KeywordParams, KeywordRun};
use clap::Args;
use colored::Colorize;
use std::path::{Path, PathBuf};

/// Input locations shared by every subcommand.
#[derive(Args)]
pub struct DataArgs {
    /// Raw facility CSV
    #[arg(short, long, default_value = "GT_ARCHITECTURE_TOURISM_RESOURCES_2025.csv")]
    pub input: PathBuf,

    /// Geocode cache CSV (reused when present, written by geocode/run)
    #[arg(short, long, default_value = "GT_ARCHITECTURE_TOURISM_RESOURCES_2025_GEO.csv")]
    pub cache: PathBuf,
}

/// Ranking knobs shared by keywords/render/run.
#[derive(Args)]
pub struct RankingArgs {
    /// Keywords kept per district
    #[arg(long, default_value_t = 15)]
    pub top_n: usize,

    /// Minimum in-district occurrences for a ranking candidate
    #[arg(long, default_value_t = 2)]
    pub min_count: u32,

    /// Dirichlet smoothing pseudo-count
    #[arg(long, default_value_t = 0.01)]
    pub alpha: f64,
}

impl RankingArgs {
    pub fn to_params(&self) -> KeywordParams {
        KeywordParams::new(self.alpha, self.top_n, self.min_count)
    }
}

/// Loads records, preferring a usable geocode cache over the raw input.
///
/// Returns the records, the load report, and whether the cache was used.
pub fn resolve_records(data: &DataArgs) -> Result<(Vec<Record>, LoadReport, bool)> {
    if let Some((records, report)) = load_cached(&data.cache)
        .with_context(|| format!("reading cache {}", data.cache.display()))?
    {
        return Ok((records, report, true));
    }
    let (records, report) = load_records(&data.input)
        .with_context(|| format!("reading dataset {}", data.input.display()))?;
    Ok((records, report, false))
}

/// Prints where the records came from and how the batch looks.
pub fn print_load_summary(records: &[Record], report: &LoadReport, from_cache: bool, source: &Path) {
    let origin = if from_cache { "cache" } else { "dataset" };
    println!(
        "{} {} ({} records, {} skipped, {} with coordinates)",
        format!("Loaded {origin}:").green().bold(),
        source.display(),
        report.loaded(),
        report.skipped_missing_address,
        report.with_coordinates,
    );
    for (district, count) in district_counts(records) {
        println!("  {} {}", format!("{district}:").cyan(), count);
    }
}

/// Prints each district's top keywords the way the panel shows them.
pub fn print_keyword_summary(run: &KeywordRun) {
    println!();
    println!("{}", "District keywords".green().bold());
    println!("{}", "=".repeat(70));
    for stats in &run.stats {
        let ranked = &run.rankings[&stats.district];
        let line = if ranked.is_empty() {
            "(결과 없음)".dimmed().to_string()
        } else {
            ranked
                .iter()
                .take(10)
                .map(|k| k.token.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        };
        println!(
            "{} {} {}",
            format!("{}:", stats.district).cyan().bold(),
            line,
            format!("[{} tokens]", stats.token_count).dimmed(),
        );
    }

    let empty = run.empty_districts();
    if !empty.is_empty() {
        let names: Vec<&str> = empty.iter().map(|d| d.name()).collect();
        println!(
            "{} {}",
            "Districts without keywords:".yellow(),
            names.join(", ")
        );
    }
}
