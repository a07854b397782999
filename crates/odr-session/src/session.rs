//! # The Mediation Session
//!
//! One session per in-progress dispute, owning its message log, evidence
//! store, and participant roster. The session accepts externally
//! supplied messages for any sender through the same entry point; it
//! carries no canned conversation of its own. Automated replies are a
//! caller concern, abstracted behind [`ResponseGenerator`].

use serde::{Deserialize, Serialize};

use odr_core::{FileMetadata, SessionId};

use crate::error::SessionError;
use crate::evidence::{EvidenceItem, EvidenceStore, OwnerSide};
use crate::message::{Message, MessageId, MessageKind, MessageLog, MessageSender};
use crate::roster::Roster;

/// Canned reply texts offered to the user as one-tap shortcuts.
///
/// Static reference data only; selecting one pre-fills the next
/// [`MediationSession::post_message`] call. The session never auto-sends
/// these.
pub const SUGGESTED_REPLIES: &[&str] = &[
    "I'm open to discussing a compromise.",
    "Can you share more details about your position?",
    "I'd like to review the evidence before responding.",
    "That proposal works for me.",
];

/// A source of automated replies, consulted by an external scheduler.
///
/// Implementations inspect the transcript so far and may produce a reply
/// attributed to the assistant or the counterparty. Returning `None`
/// means no automated reply is due. The session itself never invokes
/// this; a controller or scheduler does, feeding the result back through
/// [`MediationSession::post_message`].
pub trait ResponseGenerator {
    /// Produce the next automated reply, if one is due.
    fn next_reply(&mut self, log: &MessageLog) -> Option<(MessageSender, MessageKind, String)>;
}

/// A live mediation session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediationSession {
    /// Unique session identifier.
    pub id: SessionId,
    log: MessageLog,
    evidence: EvidenceStore,
    roster: Roster,
}

impl MediationSession {
    /// Open a fresh session with an empty transcript, an empty evidence
    /// store, and the seeded roster.
    pub fn new() -> Self {
        Self {
            id: SessionId::new(),
            log: MessageLog::new(),
            evidence: EvidenceStore::new(),
            roster: Roster::seeded(),
        }
    }

    /// Append a message to the transcript.
    ///
    /// All senders go through this single entry point, including
    /// automated assistant and counterparty replies supplied by the
    /// caller.
    pub fn post_message(
        &mut self,
        sender: MessageSender,
        kind: MessageKind,
        body: &str,
    ) -> Result<MessageId, SessionError> {
        self.log.append(sender, kind, body)
    }

    /// Attach evidence files for one side, returning the created items.
    pub fn attach_evidence(
        &mut self,
        files: impl IntoIterator<Item = FileMetadata>,
        side: OwnerSide,
    ) -> &[EvidenceItem] {
        self.evidence.attach(files, side)
    }

    /// Evidence supplied by one side, in attachment order.
    pub fn evidence_by_side(&self, side: OwnerSide) -> impl Iterator<Item = &EvidenceItem> {
        self.evidence.by_side(side)
    }

    /// All evidence in attachment order.
    pub fn evidence(&self) -> impl Iterator<Item = &EvidenceItem> {
        self.evidence.iter()
    }

    /// Add a participant to the roster, returning the display name used.
    pub fn add_participant(&mut self, name: Option<&str>) -> String {
        self.roster.add(name)
    }

    /// The transcript in append order.
    pub fn messages(&self) -> impl Iterator<Item = &Message> {
        self.log.iter()
    }

    /// The message log itself, for response generators.
    pub fn log(&self) -> &MessageLog {
        &self.log
    }

    /// The participant roster.
    pub fn roster(&self) -> &Roster {
        &self.roster
    }
}

impl Default for MediationSession {
    fn default() -> Self {
        Self::new()
    }
}
