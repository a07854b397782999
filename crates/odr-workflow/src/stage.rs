//! # Lifecycle Stages
//!
//! The six stages of a guided dispute, in order: home, form, analysis,
//! mediation, agreement, complete. `complete → home` closes the loop
//! for the next dispute. Stage transitions are recorded in an audit
//! trail on the controller.

use serde::{Deserialize, Serialize};

use odr_core::Timestamp;

/// A stage of the dispute lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    /// Landing state; no active dispute.
    Home,
    /// Case intake form.
    Form,
    /// Automated case analysis.
    Analysis,
    /// Live mediation session.
    Mediation,
    /// Settlement agreement awaiting signatures.
    Agreement,
    /// Resolved; terminal except for the loop back to home.
    Complete,
}

impl Stage {
    /// All stages in lifecycle order.
    pub fn all() -> &'static [Stage] {
        &[
            Self::Home,
            Self::Form,
            Self::Analysis,
            Self::Mediation,
            Self::Agreement,
            Self::Complete,
        ]
    }

    /// The snake_case string identifier for this stage.
    ///
    /// Must match the serde serialization format.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Form => "form",
            Self::Analysis => "analysis",
            Self::Mediation => "mediation",
            Self::Agreement => "agreement",
            Self::Complete => "complete",
        }
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry in the controller's transition audit trail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageTransitionRecord {
    /// The stage left.
    pub from: Stage,
    /// The stage entered.
    pub to: Stage,
    /// When the transition happened.
    pub at: Timestamp,
}
