//! # odr-analysis — Case Analysis
//!
//! The analysis stage of the dispute lifecycle: a small, deterministic
//! engine contract ([`AnalysisEngine`]) plus the recommendation types it
//! produces. Splits are exact in minor units; the respondent share is
//! always the exact remainder of the claimant share, so the two sum to
//! the disputed amount for every input.
//!
//! The built-in [`SplitHeuristicEngine`] recommends a fixed percentage
//! split (60/40 by default). Anything smarter plugs in behind the same
//! trait.

pub mod engine;
pub mod error;
pub mod recommendation;

pub use engine::{AnalysisEngine, SplitHeuristicEngine, ANALYSIS_STEPS};
pub use error::AnalysisError;
pub use recommendation::{ProposedSplit, Recommendation};
