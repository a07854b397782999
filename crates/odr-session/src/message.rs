//! # The Message Log
//!
//! An append-only, totally ordered transcript of the mediation room.
//! Ordering comes from a monotonic per-session sequence counter, never
//! from wall-clock time: two messages appended in the same second still
//! carry distinct, ordered identifiers.

use serde::{Deserialize, Serialize};

use odr_core::Timestamp;

use crate::error::SessionError;

// ─── Identity and Classification ─────────────────────────────────────

/// Position of a message within its session transcript.
///
/// Assigned by [`MessageLog::append`] from a monotonic counter; ordering
/// of ids is ordering of messages.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct MessageId(pub u64);

impl std::fmt::Display for MessageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "msg:{}", self.0)
    }
}

/// Who authored a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageSender {
    /// The local user (the submitting party).
    User,
    /// The automated mediation assistant.
    Assistant,
    /// The other party to the dispute.
    Counterparty,
}

impl MessageSender {
    /// The snake_case string identifier for this sender.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Assistant => "assistant",
            Self::Counterparty => "counterparty",
        }
    }
}

impl std::fmt::Display for MessageSender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a message should be rendered and treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageKind {
    /// An ordinary conversational message.
    Message,
    /// A settlement suggestion from the assistant.
    Suggestion,
    /// A system notice (joins, stage changes, evidence uploads).
    System,
}

// ─── Messages ────────────────────────────────────────────────────────

/// One entry in the session transcript.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    /// Position in the transcript.
    pub id: MessageId,
    /// Who authored it.
    pub sender: MessageSender,
    /// How it is classified.
    pub kind: MessageKind,
    /// The message body. Never empty.
    pub body: String,
    /// When it was appended. Display metadata only; ordering comes
    /// from [`Message::id`].
    pub at: Timestamp,
}

// ─── The Log ─────────────────────────────────────────────────────────

/// The append-only transcript of one session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MessageLog {
    messages: Vec<Message>,
    next_seq: u64,
}

impl MessageLog {
    /// An empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a message, assigning it the next sequence id.
    ///
    /// The body is trimmed; an empty or whitespace-only body is rejected
    /// with [`SessionError::EmptyMessage`] and consumes no sequence
    /// number.
    pub fn append(
        &mut self,
        sender: MessageSender,
        kind: MessageKind,
        body: &str,
    ) -> Result<MessageId, SessionError> {
        let body = body.trim();
        if body.is_empty() {
            return Err(SessionError::EmptyMessage);
        }
        let id = MessageId(self.next_seq);
        self.next_seq += 1;
        self.messages.push(Message {
            id,
            sender,
            kind,
            body: body.to_string(),
            at: Timestamp::now(),
        });
        Ok(id)
    }

    /// Messages in append order.
    pub fn iter(&self) -> impl Iterator<Item = &Message> {
        self.messages.iter()
    }

    /// Number of messages in the log.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Whether the log is empty.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// The most recent message, if any.
    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }
}
