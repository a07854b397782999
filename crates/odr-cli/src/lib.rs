//! # odr-cli — ODR Stack Command-Line Interface
//!
//! A thin front end over the workflow crates, mainly for demos and
//! inspection.
//!
//! ## Subcommands
//!
//! - `demo` — scripted end-to-end dispute run through every stage
//! - `analyze` — run the analysis engine over a case record JSON file
//! - `types` — list the supported dispute types
//!
//! ## Crate Policy
//!
//! - CLI construction (argument parsing) is separated from business logic.
//! - Handler functions delegate to domain crates — no business logic here.

pub mod analyze;
pub mod demo;
pub mod types;
