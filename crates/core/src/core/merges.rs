//! Merge history for BPE training.
//!
//! Every applied merge is recorded in the order it was learned. The history
//! is informational: encoding works from the vocabulary alone.

/// One applied merge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeRecord {
    /// Position in the merge sequence (0 = first merge)
    pub rank: u32,
    /// The merged token (concatenation of the pair)
    pub token: String,
    /// Weighted count of the pair when it was selected
    pub pair_count: u64,
    /// Weighted number of non-overlapping replacements performed
    pub applied: u64,
}

/// Ordered collection of applied merges.
#[derive(Debug, Clone, Default)]
pub struct MergeHistory {
    records: Vec<MergeRecord>,
}

impl MergeHistory {
    /// Create an empty history.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Append a merge, assigning it the next rank.
    pub fn push(&mut self, token: &str, pair_count: u64, applied: u64) -> &MergeRecord {
        let rank = self.records.len() as u32;
        self.records.push(MergeRecord {
            rank,
            token: token.to_string(),
            pair_count,
            applied,
        });
        &self.records[rank as usize]
    }

    /// Get the number of merges.
    #[inline]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in rank order.
    pub fn records(&self) -> &[MergeRecord] {
        &self.records
    }

    /// Look up the rank at which `token` was learned.
    pub fn rank_of(&self, token: &str) -> Option<u32> {
        self.records
            .iter()
            .find(|record| record.token == token)
            .map(|record| record.rank)
    }
}
