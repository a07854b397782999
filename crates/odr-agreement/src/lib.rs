//! # odr-agreement — Settlement Agreements
//!
//! Derives a settlement agreement from a case record and its
//! recommendation, and tracks per-party digital signatures through to
//! execution.
//!
//! ## Key Design Principles
//!
//! - Generation is a total operation: given a case and a recommendation
//!   it cannot fail. The workflow layer guards *whether* an agreement
//!   may be generated; this crate only derives it.
//! - Signing is idempotent per party. Re-signing returns the original
//!   timestamp rather than erroring, so double-submission is harmless.
//! - Case numbers are unique for the process lifetime, not merely
//!   time-derived.

pub mod agreement;
pub mod number;

pub use agreement::{
    FinancialTerms, SettlementAgreement, Signatures, ADDITIONAL_TERMS, PAYMENT_WINDOW,
};
pub use number::CaseNumber;
