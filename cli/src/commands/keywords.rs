//! keywords command - compute and export per-district keywords.

use super::{print_keyword_summary, print_load_summary, resolve_records, DataArgs, RankingArgs};
use anyhow::{Context, Result};
use atlas_data::write_keyword_rankings;
use atlas_keywords::{DistrictKeywordEngine, ParticleStripAnalyzer};
use clap::Args;
use colored::Colorize;
use std::path::PathBuf;

/// Arguments for the keywords command.
#[derive(Args)]
pub struct KeywordsArgs {
    #[command(flatten)]
    pub data: DataArgs,

    #[command(flatten)]
    pub ranking: RankingArgs,

    /// Write the payload as JSON to this file
    #[arg(long)]
    pub json: Option<PathBuf>,

    /// Write the full rankings as CSV to this file
    #[arg(long)]
    pub csv: Option<PathBuf>,
}

/// Execute the keywords command.
pub fn execute(args: KeywordsArgs) -> Result<()> {
    let (records, report, from_cache) = resolve_records(&args.data)?;
    let source = if from_cache {
        &args.data.cache
    } else {
        &args.data.input
    };
    print_load_summary(&records, &report, from_cache, source);

    let engine =
        DistrictKeywordEngine::new(ParticleStripAnalyzer::new(), args.ranking.to_params());
    let run = engine.run(&records)?;
    print_keyword_summary(&run);

    if let Some(path) = &args.json {
        let json = serde_json::to_string_pretty(&run.payload)?;
        std::fs::write(path, json).with_context(|| format!("writing {}", path.display()))?;
        println!("{} {}", "Payload written:".green(), path.display());
    }
    if let Some(path) = &args.csv {
        write_keyword_rankings(path, &run.rankings)
            .with_context(|| format!("writing {}", path.display()))?;
        println!("{} {}", "Rankings written:".green(), path.display());
    }
    Ok(())
}
