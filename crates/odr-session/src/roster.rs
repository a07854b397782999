//! # The Participant Roster
//!
//! Who is in the mediation room and their presence state. Every session
//! is seeded with the same three participants; late joiners without a
//! name receive a positional placeholder recomputed at join time.

use serde::{Deserialize, Serialize};

// ─── Presence ────────────────────────────────────────────────────────

/// Presence state of a participant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Presence {
    /// Connected and idle.
    Online,
    /// Connected and composing a message.
    Typing,
    /// Disconnected.
    Offline,
}

impl Presence {
    /// The snake_case string identifier for this state.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Online => "online",
            Self::Typing => "typing",
            Self::Offline => "offline",
        }
    }
}

impl std::fmt::Display for Presence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ─── Participants ────────────────────────────────────────────────────

/// One participant in the mediation room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    /// Display name.
    pub name: String,
    /// Current presence state.
    pub presence: Presence,
}

/// The room's participant list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    participants: Vec<Participant>,
}

impl Roster {
    /// The roster every session starts with.
    pub fn seeded() -> Self {
        let names = ["Mediator", "Other party", "You"];
        Self {
            participants: names
                .iter()
                .map(|name| Participant {
                    name: (*name).to_string(),
                    presence: Presence::Online,
                })
                .collect(),
        }
    }

    /// Add a participant, defaulting an absent name to "Participant N"
    /// where N is the position they will occupy. Returns the display
    /// name actually used.
    pub fn add(&mut self, name: Option<&str>) -> String {
        let name = match name {
            Some(n) if !n.trim().is_empty() => n.trim().to_string(),
            _ => format!("Participant {}", self.participants.len() + 1),
        };
        self.participants.push(Participant {
            name: name.clone(),
            presence: Presence::Online,
        });
        name
    }

    /// Set a participant's presence by name. Unknown names are ignored.
    pub fn set_presence(&mut self, name: &str, presence: Presence) {
        if let Some(p) = self.participants.iter_mut().find(|p| p.name == name) {
            p.presence = presence;
        }
    }

    /// Participants in join order.
    pub fn iter(&self) -> impl Iterator<Item = &Participant> {
        self.participants.iter()
    }

    /// Number of participants.
    pub fn len(&self) -> usize {
        self.participants.len()
    }

    /// Whether the roster is empty.
    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }
}

impl Default for Roster {
    fn default() -> Self {
        Self::seeded()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_roster() {
        let roster = Roster::seeded();
        let names: Vec<_> = roster.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Mediator", "Other party", "You"]);
        assert!(roster.iter().all(|p| p.presence == Presence::Online));
    }

    #[test]
    fn test_add_named_participant() {
        let mut roster = Roster::seeded();
        let used = roster.add(Some("Observer"));
        assert_eq!(used, "Observer");
        assert_eq!(roster.len(), 4);
    }

    #[test]
    fn test_add_unnamed_gets_positional_placeholder() {
        let mut roster = Roster::seeded();
        assert_eq!(roster.add(None), "Participant 4");
        assert_eq!(roster.add(Some("   ")), "Participant 5");
    }

    #[test]
    fn test_set_presence() {
        let mut roster = Roster::seeded();
        roster.set_presence("Mediator", Presence::Typing);
        assert_eq!(
            roster.iter().find(|p| p.name == "Mediator").unwrap().presence,
            Presence::Typing
        );
        roster.set_presence("Nobody", Presence::Offline); // ignored
        assert_eq!(roster.len(), 3);
    }
}
