//! # Core Error Types
//!
//! Errors produced by the foundational types. All errors use `thiserror`
//! for derive-based `Display` and `Error` implementations, and every
//! variant carries the offending input so callers can report it back to
//! the submitting user without inspecting logs.

use thiserror::Error;

/// Errors arising from core type construction.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A monetary amount string could not be parsed, or violated the
    /// amount invariants.
    #[error("invalid monetary amount {value:?}: {reason}")]
    InvalidAmount {
        /// The rejected input.
        value: String,
        /// Why it was rejected.
        reason: String,
    },

    /// A timestamp string could not be parsed as UTC RFC 3339.
    #[error("invalid timestamp: {0}")]
    InvalidTimestamp(String),
}
