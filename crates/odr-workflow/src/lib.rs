//! # odr-workflow — The Dispute Lifecycle
//!
//! The workflow controller sequences a guided dispute through its six
//! stages (`home → form → analysis → mediation → agreement → complete`,
//! looping back to home) and gates every transition behind an explicit
//! guard.
//!
//! ## Key Design Principles
//!
//! - One controller instance per dispute, passed by ownership — never a
//!   process singleton. Fresh instances make tests trivial.
//! - A failed guard changes nothing. The error names the guard so the
//!   caller can fix the precondition and retry the same transition.
//! - Scheduled side effects (assistant replies, simulated counterparty
//!   messages) hold a [`StageToken`] and are suppressed if the
//!   controller has moved on before they fire.

pub mod controller;
pub mod error;
pub mod stage;

pub use controller::{Delivery, StageToken, WorkflowController};
pub use error::{Guard, WorkflowError};
pub use stage::{Stage, StageTransitionRecord};
