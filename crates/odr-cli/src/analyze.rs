//! # Analyze Subcommand
//!
//! Runs the split heuristic engine over a case record read from a JSON
//! file and prints the resulting recommendation.

use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::Args;

use odr_analysis::{AnalysisEngine, SplitHeuristicEngine};
use odr_case::CaseRecord;

/// Arguments for the analyze subcommand.
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Path to a case record JSON file.
    #[arg(long)]
    pub file: PathBuf,

    /// Claimant share percentage (0-100).
    #[arg(long, default_value_t = 60)]
    pub claimant_percent: u8,
}

/// Analyze a case record file and print the recommendation as JSON.
pub fn run(args: &AnalyzeArgs) -> anyhow::Result<()> {
    let raw = fs::read_to_string(&args.file)
        .with_context(|| format!("reading case record {}", args.file.display()))?;
    let case: CaseRecord =
        serde_json::from_str(&raw).context("parsing case record JSON")?;

    let engine = SplitHeuristicEngine::new(args.claimant_percent);
    let recommendation = engine
        .analyze(&case)
        .context("analysis engine rejected the case")?;

    println!("{}", serde_json::to_string_pretty(&recommendation)?);
    Ok(())
}
