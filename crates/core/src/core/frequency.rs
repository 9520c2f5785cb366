//! Aggregate token frequencies.
//!
//! The table holds, for every token string ever produced, the sum over all
//! training words of `word frequency * occurrences of the token in the word's
//! current sequence`. It is updated incrementally by the merge step and never
//! recomputed from scratch.

use ahash::AHashMap;
use compact_str::CompactString;

/// Token string -> aggregate frequency.
#[derive(Debug, Clone, Default)]
pub struct TokenFrequencyTable {
    counts: AHashMap<CompactString, u64>,
}

impl TokenFrequencyTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self {
            counts: AHashMap::new(),
        }
    }

    /// Add `amount` occurrences of `token`, registering it if unseen.
    pub fn credit(&mut self, token: &str, amount: u64) {
        match self.counts.get_mut(token) {
            Some(count) => *count += amount,
            None => {
                self.counts.insert(CompactString::new(token), amount);
            }
        }
    }

    /// Remove `amount` occurrences of `token`.
    ///
    /// Saturates at zero. The token stays registered even when its count
    /// reaches zero so that it still receives a vocabulary id.
    pub fn debit(&mut self, token: &str, amount: u64) {
        if let Some(count) = self.counts.get_mut(token) {
            *count = count.saturating_sub(amount);
        }
    }

    /// Current frequency of `token`, if it has ever been registered.
    #[inline]
    pub fn get(&self, token: &str) -> Option<u64> {
        self.counts.get(token).copied()
    }

    /// Whether `token` has ever been registered.
    #[inline]
    pub fn contains(&self, token: &str) -> bool {
        self.counts.contains_key(token)
    }

    /// Number of distinct registered tokens.
    #[inline]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Number of tokens whose frequency is strictly positive.
    pub fn live_tokens(&self) -> usize {
        self.counts.values().filter(|&&count| count > 0).count()
    }

    /// Iterate over `(token, frequency)` in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(token, &count)| (token.as_str(), count))
    }

    /// All entries ordered by descending frequency, ties by ascending token.
    ///
    /// This is the enumeration order used to assign vocabulary ids.
    pub fn ranked(&self) -> Vec<(&str, u64)> {
        let mut entries: Vec<(&str, u64)> = self.iter().collect();
        entries.sort_unstable_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        entries
    }

    /// Remove every entry.
    pub fn clear(&mut self) {
        self.counts.clear();
    }
}
