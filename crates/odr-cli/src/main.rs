//! # odr CLI Entry Point
//!
//! Assembles subcommands and dispatches to handler modules.

use clap::Parser;

/// ODR Stack CLI — guided online dispute resolution.
///
/// Runs scripted dispute walkthroughs, analyzes case records, and lists
/// the supported dispute types.
#[derive(Parser, Debug)]
#[command(name = "odr", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Scripted end-to-end dispute run.
    Demo(odr_cli::demo::DemoArgs),
    /// Analyze a case record JSON file.
    Analyze(odr_cli::analyze::AnalyzeArgs),
    /// List supported dispute types.
    Types(odr_cli::types::TypesArgs),
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Demo(args) => odr_cli::demo::run(&args),
        Commands::Analyze(args) => odr_cli::analyze::run(&args),
        Commands::Types(args) => odr_cli::types::run(&args),
    }
}
