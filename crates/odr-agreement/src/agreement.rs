//! # The Settlement Agreement
//!
//! The document derived from a case record and its recommendation:
//! financial terms copied from the proposed split, deliverables from the
//! recommendation, the standard boilerplate, and per-party signature
//! state. Signing is idempotent per party; execution is the terminal
//! condition where both parties have signed.

use serde::{Deserialize, Serialize};

use odr_analysis::Recommendation;
use odr_case::{CaseRecord, Parties, PartyRole};
use odr_core::{Amount, Timestamp};

use crate::number::CaseNumber;

/// Standard payment window clause.
pub const PAYMENT_WINDOW: &str =
    "Payment to be made within 7 business days of agreement execution";

/// Boilerplate terms appended to every agreement.
pub const ADDITIONAL_TERMS: &[&str] = &[
    "Neither party admits wrongdoing or liability",
    "This agreement resolves all claims between the parties",
    "Any modifications must be in writing and signed by both parties",
];

// ─── Financial Terms ─────────────────────────────────────────────────

/// The monetary settlement, copied exactly from the proposed split.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinancialTerms {
    /// The total disputed amount.
    pub total: Amount,
    /// Amount to the claimant.
    pub to_claimant: Amount,
    /// Amount to the respondent.
    pub to_respondent: Amount,
    /// The payment window clause.
    pub payment_window: String,
}

// ─── Signatures ──────────────────────────────────────────────────────

/// Per-party signature state.
///
/// A party is signed iff its timestamp is present. Timestamps are set
/// once; repeated signing returns the stored value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signatures {
    /// When the claimant signed, if they have.
    pub claimant: Option<Timestamp>,
    /// When the respondent signed, if they have.
    pub respondent: Option<Timestamp>,
}

impl Signatures {
    fn slot(&mut self, party: PartyRole) -> &mut Option<Timestamp> {
        match party {
            PartyRole::Claimant => &mut self.claimant,
            PartyRole::Respondent => &mut self.respondent,
        }
    }

    /// Whether both parties have signed.
    pub fn fully_executed(&self) -> bool {
        self.claimant.is_some() && self.respondent.is_some()
    }
}

// ─── The Agreement ───────────────────────────────────────────────────

/// A settlement agreement awaiting or carrying signatures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SettlementAgreement {
    /// Process-unique case number.
    pub case_number: CaseNumber,
    /// When the agreement was generated.
    pub date: Timestamp,
    /// The parties bound by the agreement.
    pub parties: Parties,
    /// The monetary settlement.
    pub financial: FinancialTerms,
    /// Deliverables and actions, taken from the recommendation terms.
    pub deliverables: Vec<String>,
    /// Standard boilerplate terms.
    pub additional_terms: Vec<String>,
    /// Per-party signature state.
    pub signatures: Signatures,
}

impl SettlementAgreement {
    /// Derive an agreement from a case and its recommendation.
    ///
    /// The derivation is total: financial terms copy the proposed split,
    /// deliverables copy the recommendation terms, and both signature
    /// slots start empty.
    pub fn generate(case: &CaseRecord, recommendation: &Recommendation) -> Self {
        Self {
            case_number: CaseNumber::next(),
            date: Timestamp::now(),
            parties: case.parties.clone(),
            financial: FinancialTerms {
                total: case.amount,
                to_claimant: recommendation.proposed_split.claimant_share,
                to_respondent: recommendation.proposed_split.respondent_share,
                payment_window: PAYMENT_WINDOW.to_string(),
            },
            deliverables: recommendation.terms.clone(),
            additional_terms: ADDITIONAL_TERMS.iter().map(|t| (*t).to_string()).collect(),
            signatures: Signatures::default(),
        }
    }

    /// Record a party's signature, returning the signed timestamp.
    ///
    /// Idempotent: signing an already-signed party returns the stored
    /// timestamp unchanged.
    pub fn sign(&mut self, party: PartyRole) -> Timestamp {
        let slot = self.signatures.slot(party);
        match slot {
            Some(at) => *at,
            None => {
                let at = Timestamp::now();
                *slot = Some(at);
                at
            }
        }
    }

    /// Whether both parties have signed.
    pub fn is_executed(&self) -> bool {
        self.signatures.fully_executed()
    }
}
