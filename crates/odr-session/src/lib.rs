//! # odr-session — The Mediation Room
//!
//! State for one live mediation session: an append-only message log
//! ordered by a monotonic sequence counter, an evidence store bucketed
//! by dispute side, and a participant roster.
//!
//! ## Key Design Principles
//!
//! - Message ordering never depends on wall-clock time. Ids come from a
//!   per-session counter; timestamps are display metadata.
//! - The session holds no conversational content of its own. Automated
//!   replies come from an external [`ResponseGenerator`] and enter
//!   through the same `post_message` path as user messages.
//! - Evidence ids derive from upload time plus file name; same-second
//!   same-name collisions are a documented degradation, not an error.

pub mod error;
pub mod evidence;
pub mod message;
pub mod roster;
pub mod session;

pub use error::SessionError;
pub use evidence::{EvidenceId, EvidenceItem, EvidenceStore, OwnerSide};
pub use message::{Message, MessageId, MessageKind, MessageLog, MessageSender};
pub use roster::{Participant, Presence, Roster};
pub use session::{MediationSession, ResponseGenerator, SUGGESTED_REPLIES};
