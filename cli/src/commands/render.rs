//! render command - build the interactive map page.

use super::{print_keyword_summary, print_load_summary, resolve_records, DataArgs, RankingArgs};
use anyhow::Result;
use atlas_keywords::{DistrictKeywordEngine, ParticleStripAnalyzer};
use atlas_map::{MapDocument, MapOptions};
use clap::Args;
use colored::Colorize;
use std::path::PathBuf;

/// Arguments for the render command.
#[derive(Args)]
pub struct RenderArgs {
    #[command(flatten)]
    pub data: DataArgs,

    #[command(flatten)]
    pub ranking: RankingArgs,

    /// Output HTML file
    #[arg(short, long, default_value = "gwangju_architecture_map.html")]
    pub out: PathBuf,

    /// Page title
    #[arg(long)]
    pub title: Option<String>,
}

/// Execute the render command.
pub fn execute(args: RenderArgs) -> Result<()> {
    let (records, report, from_cache) = resolve_records(&args.data)?;
    let source = if from_cache {
        &args.data.cache
    } else {
        &args.data.input
    };
    print_load_summary(&records, &report, from_cache, source);
    if report.with_coordinates == 0 {
        println!(
            "{}",
            "No coordinates in the input; the map will have an empty canvas. Run `atlas geocode` first."
                .yellow()
        );
    }

    let engine =
        DistrictKeywordEngine::new(ParticleStripAnalyzer::new(), args.ranking.to_params());
    let run = engine.run(&records)?;
    print_keyword_summary(&run);

    let mut options = MapOptions::default();
    if let Some(title) = args.title {
        options.title = title;
    }
    let document = MapDocument::render(&records, run.payload, &options)?;
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
