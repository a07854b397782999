//! # Settlement Recommendations
//!
//! The output of an analysis engine: a proposed monetary split plus the
//! prose around it. Immutable once produced; the agreement stage
//! consumes it as-is.

use serde::{Deserialize, Serialize};

use odr_core::Amount;

/// The proposed division of the disputed amount.
///
/// Invariant: `claimant_share + respondent_share` equals the case's
/// disputed amount exactly. Engines derive the respondent share as the
/// exact remainder so rounding can never break the sum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProposedSplit {
    /// Amount the claimant keeps or receives.
    pub claimant_share: Amount,
    /// Amount the respondent keeps or receives.
    pub respondent_share: Amount,
}

impl ProposedSplit {
    /// Split `total` giving the claimant `claimant_percent` (floored to
    /// minor units) and the respondent the exact remainder.
    pub fn by_percent(total: Amount, claimant_percent: u8) -> Self {
        let claimant_share = total.percent_of(claimant_percent);
        Self {
            claimant_share,
            respondent_share: total.saturating_sub(claimant_share),
        }
    }

    /// The total the split divides.
    pub fn total(&self) -> Amount {
        // Shares are constructed as share + remainder, so this addition
        // cannot overflow for any amount that fit in the original total.
        Amount::from_minor_units(
            self.claimant_share.minor_units() + self.respondent_share.minor_units(),
        )
        .unwrap_or(Amount::ZERO)
    }
}

/// A settlement recommendation for one case.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    /// One-paragraph summary of the recommendation.
    pub summary: String,
    /// Why the engine recommends this outcome.
    pub rationale: String,
    /// The proposed monetary division.
    pub proposed_split: ProposedSplit,
    /// Ordered settlement terms.
    pub terms: Vec<String>,
    /// Ordered alternative outcomes the parties may prefer.
    pub alternatives: Vec<String>,
}
