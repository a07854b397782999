//! # Case Intake — The Three-Step Draft
//!
//! Intake mirrors the submission form: three sequential sub-steps
//! (details, parties & description, evidence & timeline) with free
//! navigation between them. No field is mandatory to move between
//! sub-steps; the aggregate is validated exactly once, at
//! [`CaseDraft::submit`].

use serde::{Deserialize, Serialize};

use odr_core::{Amount, CaseId, CoreError, FileMetadata, Timestamp};

use crate::error::CaseError;
use crate::record::{CaseRecord, DisputeType, EvidenceRef, Parties, Party, PartyRole};

// ─── Intake Steps ────────────────────────────────────────────────────

/// The three sub-steps of the intake form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntakeStep {
    /// Step 1: dispute type, title, amount.
    Details,
    /// Step 2: parties and description.
    Parties,
    /// Step 3: evidence and timeline.
    Evidence,
}

impl IntakeStep {
    /// The next sub-step, if any.
    pub fn next(&self) -> Option<IntakeStep> {
        match self {
            Self::Details => Some(Self::Parties),
            Self::Parties => Some(Self::Evidence),
            Self::Evidence => None,
        }
    }

    /// The previous sub-step, if any.
    pub fn previous(&self) -> Option<IntakeStep> {
        match self {
            Self::Details => None,
            Self::Parties => Some(Self::Details),
            Self::Evidence => Some(Self::Parties),
        }
    }

    /// The 1-based step number shown in the form header.
    pub fn number(&self) -> u8 {
        match self {
            Self::Details => 1,
            Self::Parties => 2,
            Self::Evidence => 3,
        }
    }

    /// The step title shown in the form header.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Details => "Case Details",
            Self::Parties => "Parties & Description",
            Self::Evidence => "Evidence & Timeline",
        }
    }
}

// ─── Draft Party ─────────────────────────────────────────────────────

/// In-progress fields for one party. All optional until submission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftParty {
    /// Full name, possibly still empty.
    pub name: String,
    /// Email, possibly still empty.
    pub email: String,
}

impl DraftParty {
    fn validate(&self, role: PartyRole) -> Result<Party, CaseError> {
        if self.name.trim().is_empty() {
            return Err(CaseError::MissingPartyField {
                role,
                field: "name",
            });
        }
        if self.email.trim().is_empty() {
            return Err(CaseError::MissingPartyField {
                role,
                field: "email",
            });
        }
        Ok(Party::new(self.name.trim(), self.email.trim(), role))
    }
}

// ─── The Draft ───────────────────────────────────────────────────────

/// An in-progress dispute submission.
///
/// Holds raw form input (the amount stays a string until submission) and
/// the current sub-step. Navigation is unvalidated; [`CaseDraft::submit`]
/// enforces the full-record invariants and produces the immutable
/// [`CaseRecord`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseDraft {
    /// Selected dispute category, if any yet.
    pub dispute_type: Option<DisputeType>,
    /// Case title.
    pub title: String,
    /// Detailed description.
    pub description: String,
    /// Raw amount input, validated at submission.
    pub amount: String,
    /// Claimant fields.
    pub claimant: DraftParty,
    /// Respondent fields.
    pub respondent: DraftParty,
    /// Uploaded evidence metadata.
    pub evidence: Vec<FileMetadata>,
    /// Free-text timeline.
    pub timeline: String,
    step: Option<IntakeStep>,
}

impl CaseDraft {
    /// Start an empty draft at the first sub-step.
    pub fn new() -> Self {
        Self {
            step: Some(IntakeStep::Details),
            ..Self::default()
        }
    }

    /// The current sub-step.
    pub fn step(&self) -> IntakeStep {
        self.step.unwrap_or(IntakeStep::Details)
    }

    /// Move to the next sub-step. No-op on the last step.
    pub fn advance(&mut self) {
        if let Some(next) = self.step().next() {
            self.step = Some(next);
        }
    }

    /// Move to the previous sub-step. No-op on the first step.
    pub fn back(&mut self) {
        if let Some(prev) = self.step().previous() {
            self.step = Some(prev);
        }
    }

    /// Record an uploaded evidence file.
    pub fn add_evidence(&mut self, file: FileMetadata) {
        self.evidence.push(file);
    }

    /// Remove an uploaded evidence file by index. Out-of-range is a no-op.
    pub fn remove_evidence(&mut self, index: usize) {
        if index < self.evidence.len() {
            self.evidence.remove(index);
        }
    }

    /// Validate the aggregate draft and produce the immutable case record.
    ///
    /// This is the single validation point of intake:
    /// - the amount must parse and be strictly positive
    ///   ([`CaseError::InvalidAmount`]);
    /// - both parties need a non-empty name and email
    ///   ([`CaseError::MissingPartyField`]).
    ///
    /// An unselected dispute type defaults to [`DisputeType::Other`].
    pub fn submit(self) -> Result<CaseRecord, CaseError> {
        let amount = Amount::parse(&self.amount)?;
        if !amount.is_positive() {
            return Err(CaseError::InvalidAmount(CoreError::InvalidAmount {
                value: self.amount.clone(),
                reason: "disputed amount must be greater than zero".to_string(),
            }));
        }

        let claimant = self.claimant.validate(PartyRole::Claimant)?;
        let respondent = self.respondent.validate(PartyRole::Respondent)?;

        let timeline = {
            let trimmed = self.timeline.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        };

        Ok(CaseRecord {
            id: CaseId::new(),
            dispute_type: self.dispute_type.unwrap_or(DisputeType::Other),
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            amount,
            parties: Parties {
                claimant,
                respondent,
            },
            evidence: self.evidence.into_iter().map(EvidenceRef::from).collect(),
            timeline,
            submitted_at: Timestamp::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_draft() -> CaseDraft {
        let mut draft = CaseDraft::new();
        draft.dispute_type = Some(DisputeType::Freelance);
        draft.title = "Unpaid web development invoice".to_string();
        draft.description = "Client refuses to pay for delivered work".to_string();
        draft.amount = "4000".to_string();
        draft.claimant = DraftParty {
            name: "Alice".to_string(),
            email: "a@x.com".to_string(),
        };
        draft.respondent = DraftParty {
            name: "Bob".to_string(),
            email: "b@x.com".to_string(),
        };
        draft
    }

    // ── Step navigation ──────────────────────────────────────────────

    #[test]
    fn test_navigation_is_free_form() {
        let mut draft = CaseDraft::new();
        assert_eq!(draft.step(), IntakeStep::Details);
        // Nothing filled in, yet navigation succeeds.
        draft.advance();
        assert_eq!(draft.step(), IntakeStep::Parties);
        draft.advance();
        assert_eq!(draft.step(), IntakeStep::Evidence);
        draft.advance(); // no-op past the end
        assert_eq!(draft.step(), IntakeStep::Evidence);
        draft.back();
        assert_eq!(draft.step(), IntakeStep::Parties);
        draft.back();
        draft.back(); // no-op before the start
        assert_eq!(draft.step(), IntakeStep::Details);
    }

    #[test]
    fn test_step_numbers_and_titles() {
        assert_eq!(IntakeStep::Details.number(), 1);
        assert_eq!(IntakeStep::Evidence.number(), 3);
        assert_eq!(IntakeStep::Parties.title(), "Parties & Description");
    }

    // ── Evidence handling ────────────────────────────────────────────

    #[test]
    fn test_add_and_remove_evidence() {
        let mut draft = CaseDraft::new();
        draft.add_evidence(FileMetadata::new("a.pdf", 10));
        draft.add_evidence(FileMetadata::new("b.pdf", 20));
        draft.remove_evidence(0);
        assert_eq!(draft.evidence.len(), 1);
        assert_eq!(draft.evidence[0].name, "b.pdf");
        draft.remove_evidence(5); // out of range: no-op
        assert_eq!(draft.evidence.len(), 1);
    }

    // ── Submission ───────────────────────────────────────────────────

    #[test]
    fn test_submit_valid_draft() {
        let record = filled_draft().submit().unwrap();
        assert_eq!(record.dispute_type, DisputeType::Freelance);
        assert_eq!(record.amount.minor_units(), 400_000);
        assert_eq!(record.parties.claimant.name, "Alice");
        assert_eq!(record.parties.claimant.role, PartyRole::Claimant);
        assert_eq!(record.parties.respondent.role, PartyRole::Respondent);
        assert!(record.timeline.is_none());
    }

    #[test]
    fn test_submit_unparseable_amount() {
        let mut draft = filled_draft();
        draft.amount = "a lot".to_string();
        assert!(matches!(
            draft.submit(),
            Err(CaseError::InvalidAmount(_))
        ));
    }

    #[test]
    fn test_submit_zero_amount_is_invalid() {
        // Non-positive amounts share the InvalidAmount taxonomy with
        // unparseable input; the reason string distinguishes them.
        let mut draft = filled_draft();
        draft.amount = "0".to_string();
        match draft.submit() {
            Err(CaseError::InvalidAmount(CoreError::InvalidAmount { value, reason })) => {
                assert_eq!(value, "0");
                assert!(reason.contains("greater than zero"));
            }
            other => panic!("expected InvalidAmount, got {other:?}"),
        }
    }

    #[test]
    fn test_submit_missing_claimant_name() {
        let mut draft = filled_draft();
        draft.claimant.name = "   ".to_string();
        match draft.submit() {
            Err(CaseError::MissingPartyField { role, field }) => {
                assert_eq!(role, PartyRole::Claimant);
                assert_eq!(field, "name");
            }
            other => panic!("expected MissingPartyField, got {other:?}"),
        }
    }

    #[test]
    fn test_submit_missing_respondent_email() {
        let mut draft = filled_draft();
        draft.respondent.email = String::new();
        match draft.submit() {
            Err(CaseError::MissingPartyField { role, field }) => {
                assert_eq!(role, PartyRole::Respondent);
                assert_eq!(field, "email");
            }
            other => panic!("expected MissingPartyField, got {other:?}"),
        }
    }

    #[test]
    fn test_submit_defaults_dispute_type() {
        let mut draft = filled_draft();
        draft.dispute_type = None;
        let record = draft.submit().unwrap();
        assert_eq!(record.dispute_type, DisputeType::Other);
    }

    #[test]
    fn test_submit_carries_evidence_and_timeline() {
        let mut draft = filled_draft();
        draft.add_evidence(FileMetadata::new("contract.pdf", 9000));
        draft.timeline = "Contract signed Jan 1, work delivered Jan 15".to_string();
        let record = draft.submit().unwrap();
        assert_eq!(record.evidence.len(), 1);
        assert_eq!(record.evidence[0].size, Some(9000));
        assert!(record.timeline.is_some());
    }
}
