//! # The Analysis Engine Contract
//!
//! An engine turns a case record into a settlement recommendation. The
//! contract is deliberately small: `analyze` must be a deterministic
//! pure function of its input, so the same case always yields the same
//! recommendation. Concrete scoring is pluggable; the built-in
//! [`SplitHeuristicEngine`] recommends a fixed percentage split.

use odr_case::CaseRecord;

use crate::error::AnalysisError;
use crate::recommendation::{ProposedSplit, Recommendation};

/// Progress step labels surfaced while an analysis is running.
///
/// Static reference data for callers that display progress; engines
/// complete synchronously and do not pace themselves against this list.
pub const ANALYSIS_STEPS: &[&str] = &[
    "Analyzing uploaded evidence...",
    "Identifying key dispute points...",
    "Researching similar cases...",
    "Generating settlement recommendations...",
];

/// Turns a case record into a settlement recommendation.
pub trait AnalysisEngine {
    /// Analyze a case.
    ///
    /// Must be deterministic: identical input yields an identical
    /// recommendation. Fails with [`AnalysisError::InsufficientData`]
    /// when a required case field is absent or empty.
    fn analyze(&self, case: &CaseRecord) -> Result<Recommendation, AnalysisError>;
}

/// The built-in heuristic: a fixed percentage of the disputed amount to
/// the claimant, the exact remainder to the respondent.
#[derive(Debug, Clone, Copy)]
pub struct SplitHeuristicEngine {
    claimant_percent: u8,
}

impl SplitHeuristicEngine {
    /// An engine recommending `claimant_percent`% to the claimant.
    /// Percentages above 100 are clamped.
    pub fn new(claimant_percent: u8) -> Self {
        Self {
            claimant_percent: claimant_percent.min(100),
        }
    }

    /// The claimant's percentage.
    pub fn claimant_percent(&self) -> u8 {
        self.claimant_percent
    }

    fn require(case: &CaseRecord) -> Result<(), AnalysisError> {
        let missing = |field| AnalysisError::InsufficientData { field };
        if case.parties.claimant.name.trim().is_empty() {
            return Err(missing("claimant name"));
        }
        if case.parties.claimant.email.trim().is_empty() {
            return Err(missing("claimant email"));
        }
        if case.parties.respondent.name.trim().is_empty() {
            return Err(missing("respondent name"));
        }
        if case.parties.respondent.email.trim().is_empty() {
            return Err(missing("respondent email"));
        }
        if !case.amount.is_positive() {
            return Err(missing("disputed amount"));
        }
        Ok(())
    }
}

impl Default for SplitHeuristicEngine {
    /// The 60/40 split the platform recommends by default.
    fn default() -> Self {
        Self::new(60)
    }
}

impl AnalysisEngine for SplitHeuristicEngine {
    fn analyze(&self, case: &CaseRecord) -> Result<Recommendation, AnalysisError> {
        Self::require(case)?;

        let split = ProposedSplit::by_percent(case.amount, self.claimant_percent);
        let claimant = &case.parties.claimant.name;
        let respondent = &case.parties.respondent.name;
        let pct = self.claimant_percent;

        Ok(Recommendation {
            summary: format!(
                "Based on evidence analysis and similar case outcomes, \
                 a {pct}-{} settlement split is recommended.",
                100 - pct
            ),
            rationale: format!(
                "{claimant} delivered value that {respondent} made use of, \
                 indicating substantial performance, while the disputed \
                 concerns suggest partial shared responsibility."
            ),
            proposed_split: split,
            terms: vec![
                format!(
                    "{claimant} retains ${} ({pct}% of the disputed value)",
                    split.claimant_share
                ),
                format!(
                    "{respondent} receives ${} in settlement of the remaining claims",
                    split.respondent_share
                ),
                format!("All deliverables and work product transfer to {respondent}"),
                "Mutual non-disclosure and non-disparagement clause".to_string(),
            ],
            alternatives: vec![
                {
                    let alt = ProposedSplit::by_percent(case.amount, 70);
                    format!(
                        "70-30 split favoring the claimant (${} / ${})",
                        alt.claimant_share, alt.respondent_share
                    )
                },
                {
                    let alt = ProposedSplit::by_percent(case.amount, 50);
                    format!(
                        "50-50 split with shared responsibility (${} / ${})",
                        alt.claimant_share, alt.respondent_share
                    )
                },
                "Revised scope completion with an additional payment".to_string(),
            ],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use odr_case::{CaseDraft, DisputeType};
    use odr_case::intake::DraftParty;

    fn sample_case() -> CaseRecord {
        let mut draft = CaseDraft::new();
        draft.dispute_type = Some(DisputeType::Freelance);
        draft.title = "Unpaid invoice".to_string();
        draft.description = "Work delivered, payment withheld".to_string();
        draft.amount = "4000".to_string();
        draft.claimant = DraftParty {
            name: "Alice".to_string(),
            email: "a@x.com".to_string(),
        };
        draft.respondent = DraftParty {
            name: "Bob".to_string(),
            email: "b@x.com".to_string(),
        };
        draft.submit().unwrap()
    }

    #[test]
    fn test_default_split_is_60_40() {
        let rec = SplitHeuristicEngine::default()
            .analyze(&sample_case())
            .unwrap();
        assert_eq!(
            rec.proposed_split.claimant_share.minor_units(),
            240_000
        );
        assert_eq!(
            rec.proposed_split.respondent_share.minor_units(),
            160_000
        );
    }

    #[test]
    fn test_shares_sum_to_disputed_amount() {
        let case = sample_case();
        let rec = SplitHeuristicEngine::default().analyze(&case).unwrap();
        assert_eq!(
            rec.proposed_split.claimant_share.minor_units()
                + rec.proposed_split.respondent_share.minor_units(),
            case.amount.minor_units()
        );
    }

    #[test]
    fn test_analysis_is_deterministic() {
        let case = sample_case();
        let engine = SplitHeuristicEngine::default();
        assert_eq!(engine.analyze(&case).unwrap(), engine.analyze(&case).unwrap());
    }

    #[test]
    fn test_recommendation_prose_names_parties() {
        let rec = SplitHeuristicEngine::default()
            .analyze(&sample_case())
            .unwrap();
        assert!(rec.rationale.contains("Alice"));
        assert!(rec.rationale.contains("Bob"));
        assert!(rec.terms.iter().any(|t| t.contains("$2400.00")));
        assert_eq!(rec.alternatives.len(), 3);
    }

    #[test]
    fn test_blank_party_name_is_insufficient_data() {
        let mut case = sample_case();
        case.parties.respondent.name = "  ".to_string();
        assert_eq!(
            SplitHeuristicEngine::default().analyze(&case),
            Err(AnalysisError::InsufficientData {
                field: "respondent name"
            })
        );
    }

    #[test]
    fn test_zero_amount_is_insufficient_data() {
        let mut case = sample_case();
        case.amount = odr_core::Amount::ZERO;
        assert_eq!(
            SplitHeuristicEngine::default().analyze(&case),
            Err(AnalysisError::InsufficientData {
                field: "disputed amount"
            })
        );
    }

    #[test]
    fn test_percent_is_clamped() {
        assert_eq!(SplitHeuristicEngine::new(250).claimant_percent(), 100);
    }

    #[test]
    fn test_analysis_steps_are_ordered_reference_data() {
        assert_eq!(ANALYSIS_STEPS.len(), 4);
        assert!(ANALYSIS_STEPS[0].starts_with("Analyzing"));
    }
}
