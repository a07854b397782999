//! Errors raised by analysis engines.

use thiserror::Error;

/// Errors arising from case analysis.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    /// A case field the engine requires was absent or empty.
    #[error("insufficient data for analysis: {field}")]
    InsufficientData {
        /// The missing or empty field.
        field: &'static str,
    },
}
