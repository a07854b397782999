//! # File Transport Surface
//!
//! The external file transport (browser upload, object store, whatever
//! the embedding chooses) delivers file *metadata* into the core. File
//! content is opaque and never crosses this boundary.

use serde::{Deserialize, Serialize};

/// Metadata for an uploaded file, as reported by the file transport.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileMetadata {
    /// Original file name.
    pub name: String,
    /// File size in bytes.
    pub size: u64,
}

impl FileMetadata {
    /// Create file metadata.
    pub fn new(name: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serde_roundtrip() {
        let f = FileMetadata::new("contract.pdf", 52_428);
        let json = serde_json::to_string(&f).unwrap();
        let parsed: FileMetadata = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, f);
    }
}
