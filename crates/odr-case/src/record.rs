//! # The Case Record
//!
//! The structured description of a dispute: type, title, amount, the two
//! parties, evidence references, and an optional timeline. Created once
//! at intake submission and treated as immutable downstream, with a
//! single exception — evidence gathered during mediation is appended
//! through [`CaseRecord::append_evidence`].

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use odr_core::{Amount, CaseId, FileMetadata, Timestamp};

// ─── Dispute Types ───────────────────────────────────────────────────

/// The categories of dispute the platform mediates.
///
/// One definition, five variants, exhaustive `match` everywhere — adding
/// a category forces every consumer to handle it at compile time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisputeType {
    /// Buyer/seller disputes over online purchases.
    Ecommerce,
    /// Unpaid or contested freelance work.
    Freelance,
    /// Landlord-tenant disputes.
    Rental,
    /// Disputes with service providers.
    Service,
    /// Anything that does not fit the other categories.
    Other,
}

impl DisputeType {
    /// All dispute types in canonical order.
    pub fn all() -> &'static [DisputeType] {
        &[
            Self::Ecommerce,
            Self::Freelance,
            Self::Rental,
            Self::Service,
            Self::Other,
        ]
    }

    /// The snake_case string identifier for this type.
    ///
    /// Must match the serde serialization format.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ecommerce => "ecommerce",
            Self::Freelance => "freelance",
            Self::Rental => "rental",
            Self::Service => "service",
            Self::Other => "other",
        }
    }

    /// The human-readable label shown by intake UIs.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Ecommerce => "E-commerce Dispute",
            Self::Freelance => "Freelance Payment",
            Self::Rental => "Landlord-Tenant",
            Self::Service => "Service Provider",
            Self::Other => "Other",
        }
    }
}

impl std::fmt::Display for DisputeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DisputeType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ecommerce" => Ok(Self::Ecommerce),
            "freelance" => Ok(Self::Freelance),
            "rental" => Ok(Self::Rental),
            "service" => Ok(Self::Service),
            "other" => Ok(Self::Other),
            other => Err(format!("unknown dispute type: {other:?}")),
        }
    }
}

// ─── Parties ─────────────────────────────────────────────────────────

/// The role a party plays in the dispute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PartyRole {
    /// The party bringing the dispute.
    Claimant,
    /// The party responding to it.
    Respondent,
}

impl PartyRole {
    /// The snake_case string identifier for this role.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Claimant => "claimant",
            Self::Respondent => "respondent",
        }
    }
}

impl std::fmt::Display for PartyRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named party to the dispute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Party {
    /// Full name.
    pub name: String,
    /// Contact email.
    pub email: String,
    /// Role in the dispute.
    pub role: PartyRole,
}

impl Party {
    /// Create a party record.
    pub fn new(name: impl Into<String>, email: impl Into<String>, role: PartyRole) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            role,
        }
    }
}

/// Both parties to the dispute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parties {
    /// The claimant.
    pub claimant: Party,
    /// The respondent.
    pub respondent: Party,
}

// ─── Evidence References ─────────────────────────────────────────────

/// A reference to an evidence artifact attached to the case.
///
/// Form uploads carry a size reported by the file transport; items
/// carried over from the mediation session carry only a name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvidenceRef {
    /// Display name of the artifact.
    pub name: String,
    /// Size in bytes, when known.
    pub size: Option<u64>,
}

impl From<FileMetadata> for EvidenceRef {
    fn from(file: FileMetadata) -> Self {
        Self {
            name: file.name,
            size: Some(file.size),
        }
    }
}

impl EvidenceRef {
    /// Reference an artifact by name only (mediation carry-over).
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size: None,
        }
    }
}

// ─── The Case Record ─────────────────────────────────────────────────

/// The validated, immutable record of a submitted dispute.
///
/// Constructed only by [`CaseDraft::submit`](crate::CaseDraft::submit),
/// which enforces the record invariants: the amount is strictly positive
/// and both parties carry a non-empty name and email.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseRecord {
    /// Unique case identifier.
    pub id: CaseId,
    /// Category of the dispute.
    pub dispute_type: DisputeType,
    /// Short case title.
    pub title: String,
    /// Detailed description of the dispute.
    pub description: String,
    /// The disputed amount.
    pub amount: Amount,
    /// The two parties.
    pub parties: Parties,
    /// Ordered evidence references.
    pub evidence: Vec<EvidenceRef>,
    /// Free-text timeline of events, if provided.
    pub timeline: Option<String>,
    /// When the case was submitted.
    pub submitted_at: Timestamp,
}

impl CaseRecord {
    /// Append evidence gathered during mediation.
    ///
    /// This is the only mutation permitted after submission.
    pub fn append_evidence(&mut self, refs: impl IntoIterator<Item = EvidenceRef>) {
        self.evidence.extend(refs);
    }
}
