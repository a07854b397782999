//! # Case Numbers
//!
//! Human-facing agreement identifiers of the form `ODR-SSSSSS-NNN`: a
//! six-digit seed fixed at first use plus a monotonic counter. Unique
//! within the process lifetime; a wall-clock slice alone is not, since
//! two agreements generated in the same millisecond would collide.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::OnceLock;

use odr_core::Timestamp;

static SEED: OnceLock<u64> = OnceLock::new();
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// A process-unique case number, e.g. `ODR-493817-001`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CaseNumber(String);

impl CaseNumber {
    /// Issue the next case number.
    ///
    /// The seed is derived from the time of the first issuance and fixed
    /// for the life of the process; the counter then guarantees
    /// uniqueness no matter how quickly numbers are issued.
    pub fn next() -> Self {
        let seed = SEED.get_or_init(|| (Timestamp::now().epoch_secs() as u64) % 1_000_000);
        let n = COUNTER.fetch_add(1, Ordering::Relaxed);
        Self(format!("ODR-{seed:06}-{n:03}"))
    }

    /// The number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CaseNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
