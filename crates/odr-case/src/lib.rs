//! # odr-case — Case Intake and the Case Record
//!
//! Models a dispute as submitted by a user: the dispute type, the two
//! parties, the disputed amount, evidence references, and an optional
//! timeline.
//!
//! Intake is a three-sub-step form ([`CaseDraft`]) with free navigation —
//! no field is mandatory to move between sub-steps. Validation of the
//! aggregate happens exactly once, at [`CaseDraft::submit`], producing an
//! immutable [`CaseRecord`]. After submission the record never changes
//! except for evidence appended from the mediation session.
//!
//! ## Crate Policy
//!
//! - Validation errors name the failing field ([`CaseError`]) so the
//!   submitting user can correct and retry.
//! - No business logic beyond intake and validation; the workflow crate
//!   sequences stages.

pub mod error;
pub mod intake;
pub mod record;

pub use error::CaseError;
pub use intake::{CaseDraft, IntakeStep};
pub use record::{CaseRecord, DisputeType, EvidenceRef, Parties, Party, PartyRole};
