//! # Session Evidence
//!
//! Evidence attached during mediation, bucketed by which side of the
//! dispute supplied it. Items are identified by upload time plus file
//! name; two uploads of the same file name within the same second share
//! an id, and the later one wins anywhere ids are used as keys.

use serde::{Deserialize, Serialize};

use odr_core::{FileMetadata, Timestamp};

// ─── Sides ───────────────────────────────────────────────────────────

/// Which side of the dispute supplied an evidence item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OwnerSide {
    /// The party who submitted the case.
    Submitter,
    /// The other party.
    Counterparty,
}

impl OwnerSide {
    /// The snake_case string identifier for this side.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Submitter => "submitter",
            Self::Counterparty => "counterparty",
        }
    }
}

impl std::fmt::Display for OwnerSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ─── Items ───────────────────────────────────────────────────────────

/// Identifier for an evidence item: upload epoch seconds plus file name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EvidenceId(String);

impl EvidenceId {
    fn derive(at: Timestamp, name: &str) -> Self {
        Self(format!("{}-{}", at.epoch_secs(), name))
    }

    /// The id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for EvidenceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// One evidence item attached during the session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvidenceItem {
    /// Derived identifier.
    pub id: EvidenceId,
    /// Uploaded file metadata.
    pub file: FileMetadata,
    /// Which side supplied it.
    pub side: OwnerSide,
    /// When it was attached.
    pub at: Timestamp,
}

// ─── The Store ───────────────────────────────────────────────────────

/// Session-scoped evidence, in attachment order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EvidenceStore {
    items: Vec<EvidenceItem>,
}

impl EvidenceStore {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a batch of files for one side, returning the new items.
    ///
    /// An empty batch is a no-op and returns an empty slice.
    pub fn attach(
        &mut self,
        files: impl IntoIterator<Item = FileMetadata>,
        side: OwnerSide,
    ) -> &[EvidenceItem] {
        let start = self.items.len();
        let at = Timestamp::now();
        for file in files {
            self.items.push(EvidenceItem {
                id: EvidenceId::derive(at, &file.name),
                file,
                side,
                at,
            });
        }
        &self.items[start..]
    }

    /// All items in attachment order.
    pub fn iter(&self) -> impl Iterator<Item = &EvidenceItem> {
        self.items.iter()
    }

    /// Items supplied by one side, in attachment order.
    pub fn by_side(&self, side: OwnerSide) -> impl Iterator<Item = &EvidenceItem> {
        self.items.iter().filter(move |item| item.side == side)
    }

    /// Number of items in the store.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attach_returns_new_items_only() {
        let mut store = EvidenceStore::new();
        store.attach([FileMetadata::new("a.pdf", 1)], OwnerSide::Submitter);
        let new = store.attach(
            [FileMetadata::new("b.pdf", 2), FileMetadata::new("c.pdf", 3)],
            OwnerSide::Counterparty,
        );
        assert_eq!(new.len(), 2);
        assert_eq!(new[0].file.name, "b.pdf");
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_attach_empty_batch_is_noop() {
        let mut store = EvidenceStore::new();
        let new = store.attach(std::iter::empty(), OwnerSide::Submitter);
        assert!(new.is_empty());
        assert!(store.is_empty());
    }

    #[test]
    fn test_by_side_filters_and_preserves_order() {
        let mut store = EvidenceStore::new();
        store.attach([FileMetadata::new("ours-1.pdf", 1)], OwnerSide::Submitter);
        store.attach([FileMetadata::new("theirs.pdf", 2)], OwnerSide::Counterparty);
        store.attach([FileMetadata::new("ours-2.pdf", 3)], OwnerSide::Submitter);
        let ours: Vec<_> = store
            .by_side(OwnerSide::Submitter)
            .map(|i| i.file.name.as_str())
            .collect();
        assert_eq!(ours, vec!["ours-1.pdf", "ours-2.pdf"]);
        assert_eq!(store.by_side(OwnerSide::Counterparty).count(), 1);
    }

    #[test]
    fn test_id_embeds_name() {
        let mut store = EvidenceStore::new();
        let new = store.attach([FileMetadata::new("contract.pdf", 9)], OwnerSide::Submitter);
        assert!(new[0].id.as_str().ends_with("-contract.pdf"));
    }

    #[test]
    fn test_same_name_same_second_shares_id() {
        // Both files land in one attach call, so they share the derived
        // timestamp and therefore the id.
        let mut store = EvidenceStore::new();
        let new = store.attach(
            [FileMetadata::new("dup.pdf", 1), FileMetadata::new("dup.pdf", 2)],
            OwnerSide::Submitter,
        );
        assert_eq!(new[0].id, new[1].id);
    }
}
