//! # Workflow Errors
//!
//! Every failed transition names the guard that was not satisfied, so
//! the caller can correct the precondition and retry. Nothing here is
//! fatal; the controller's state is unchanged by any failure.

use thiserror::Error;

use odr_analysis::AnalysisError;
use odr_case::CaseError;
use odr_session::SessionError;

use crate::stage::Stage;

/// The precondition a transition requires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Guard {
    /// An authenticated user must be present.
    Authentication,
    /// A validated case record must be active.
    ValidCaseRecord,
    /// A recommendation must have been computed for the active case.
    RecommendationReady,
    /// Both parties must have signed the agreement.
    FullyExecuted,
    /// The operation was invoked from the wrong stage.
    StageOrder,
}

impl Guard {
    /// A short description of the unmet precondition.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Authentication => "authenticated user required",
            Self::ValidCaseRecord => "valid case record required",
            Self::RecommendationReady => "recommendation not yet computed",
            Self::FullyExecuted => "agreement not fully executed",
            Self::StageOrder => "operation not available in current stage",
        }
    }
}

impl std::fmt::Display for Guard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors arising from workflow operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum WorkflowError {
    /// A transition was attempted without its guard satisfied.
    #[error("invalid transition {from} -> {to}: {guard}")]
    InvalidTransition {
        /// The current stage, unchanged by the failure.
        from: Stage,
        /// The stage the transition targeted.
        to: Stage,
        /// The unmet guard.
        guard: Guard,
    },

    /// Case intake validation failed.
    #[error(transparent)]
    Case(#[from] CaseError),

    /// The analysis engine rejected the case.
    #[error(transparent)]
    Analysis(#[from] AnalysisError),

    /// A mediation session operation failed.
    #[error(transparent)]
    Session(#[from] SessionError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_transition_names_the_guard() {
        let err = WorkflowError::InvalidTransition {
            from: Stage::Home,
            to: Stage::Form,
            guard: Guard::Authentication,
        };
        let msg = format!("{err}");
        assert!(msg.contains("home"));
        assert!(msg.contains("form"));
        assert!(msg.contains("authenticated user"));
    }

    #[test]
    fn test_nested_errors_surface_transparently() {
        let err: WorkflowError = SessionError::EmptyMessage.into();
        assert_eq!(format!("{err}"), "message body is empty");
    }
}
