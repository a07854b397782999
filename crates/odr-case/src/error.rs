//! # Case Validation Errors
//!
//! Structured errors for intake submission. Every variant names the
//! offending field; all are recoverable — the caller corrects the draft
//! and resubmits.

use thiserror::Error;

use odr_core::CoreError;

use crate::record::PartyRole;

/// Errors arising from case intake validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CaseError {
    /// The disputed amount failed to parse or was not strictly positive.
    #[error("invalid disputed amount: {0}")]
    InvalidAmount(#[from] CoreError),

    /// A required party field was left empty.
    #[error("missing {field} for {role}")]
    MissingPartyField {
        /// Which party the field belongs to.
        role: PartyRole,
        /// The empty field ("name" or "email").
        field: &'static str,
    },
}
