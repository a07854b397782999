//! # Types Subcommand
//!
//! Lists the dispute types the platform mediates.

use clap::Args;

use odr_case::DisputeType;

/// Arguments for the types subcommand.
#[derive(Args, Debug)]
pub struct TypesArgs {
    /// Emit machine-readable JSON instead of a table.
    #[arg(long)]
    pub json: bool,
}

/// List the supported dispute types.
pub fn run(args: &TypesArgs) -> anyhow::Result<()> {
    if args.json {
        let rows: Vec<_> = DisputeType::all()
            .iter()
            .map(|t| serde_json::json!({ "id": t.as_str(), "label": t.label() }))
            .collect();
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else {
        for t in DisputeType::all() {
            println!("{:<12} {}", t.as_str(), t.label());
        }
    }
    Ok(())
}
