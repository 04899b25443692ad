//! Duplicate detection over the merged value stream
//!
//! The detector owns the seen-set outright. All concurrent sources funnel
//! through one channel into one detector, so membership checks and inserts
//! never race and the set needs no locking.

use ahash::AHashSet;

/// Accumulating set of previously observed values
#[derive(Debug, Default)]
pub struct DuplicateDetector {
    seen: AHashSet<String>,
}

impl DuplicateDetector {
    /// Create an empty detector
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one value. Returns `true` on first sight, `false` on a repeat.
    ///
    /// Repeats past the second occurrence are indistinguishable from the
    /// second; any repeat is the same fatal signal.
    pub fn observe(&mut self, value: &str) -> bool {
        if self.seen.contains(value) {
            false
        } else {
            self.seen.insert(value.to_string());
            true
        }
    }

    /// Number of distinct values observed so far
    pub fn unique_count(&self) -> usize {
        self.seen.len()
    }
}
