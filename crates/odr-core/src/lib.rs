//! # odr-core — Foundational Types for the ODR Stack
//!
//! This crate is the bedrock of the ODR Stack. It defines the primitives
//! shared by every stage of the dispute-resolution workflow. Every other
//! crate in the workspace depends on `odr-core`; it depends on nothing
//! internal.
//!
//! ## Key Design Principles
//!
//! 1. **Newtype wrappers for domain primitives.** `CaseId`, `SessionId`,
//!    `Amount`, `Timestamp` — all newtypes with validated constructors.
//!    No bare strings or floats for identifiers and money.
//!
//! 2. **No floating point for money.** `Amount` parses decimal strings into
//!    exact minor units. Settlement splits must sum to the disputed total
//!    exactly; floats cannot guarantee that.
//!
//! 3. **UTC-only timestamps.** The `Timestamp` type enforces UTC with Z
//!    suffix and seconds precision. Ordering guarantees inside the stack
//!    never rely on the wall clock alone — sequenced data carries its own
//!    monotonic counters.
//!
//! 4. **External collaborators enter through plain data.** The identity
//!    provider supplies a [`User`]; the file transport supplies
//!    [`FileMetadata`]. The core never handles credentials or file bytes.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `odr-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public types derive `Debug`, `Clone`, and implement
//!   `Serialize`/`Deserialize`.

pub mod error;
pub mod files;
pub mod identity;
pub mod money;
pub mod temporal;

// Re-export primary types for ergonomic imports.
pub use error::CoreError;
pub use files::FileMetadata;
pub use identity::{CaseId, SessionId, User};
pub use money::Amount;
pub use temporal::Timestamp;
