//! Merge candidate ordering.
//!
//! A pair is identified by the concatenation of its two token strings. The
//! best candidate has the highest weighted count; among equal counts the
//! lexicographically smallest concatenation wins, so selection never depends
//! on hash map iteration order.

use ahash::AHashMap;
use compact_str::CompactString;
use std::cmp::Ordering;

/// Concatenated pair string -> weighted count.
pub type PairCounts = AHashMap<CompactString, u64>;

/// A merge candidate during BPE training.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeCandidate {
    /// Concatenation of the two adjacent tokens
    pub token: CompactString,
    /// Frequency-weighted count of this pair
    pub count: u64,
}

impl MergeCandidate {
    /// Create a new merge candidate.
    pub fn new(token: impl Into<CompactString>, count: u64) -> Self {
        Self {
            token: token.into(),
            count,
        }
    }

    /// Pick the highest priority candidate out of a full set of pair counts.
    pub fn best(pairs: &PairCounts) -> Option<Self> {
        pairs
            .iter()
            .map(|(token, &count)| (token, count))
            .max_by(|a, b| Self::priority(a.1, a.0, b.1, b.0))
            .map(|(token, count)| Self::new(token.clone(), count))
    }

    fn priority(count: u64, token: &str, other_count: u64, other_token: &str) -> Ordering {
        // Reversed on the token so the smaller string ranks higher.
        count
            .cmp(&other_count)
            .then_with(|| other_token.cmp(token))
    }
}

// Higher count = higher priority, then smaller concatenation
impl Ord for MergeCandidate {
    fn cmp(&self, other: &Self) -> Ordering {
        Self::priority(self.count, &self.token, other.count, &other.token)
    }
}

impl PartialOrd for MergeCandidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
