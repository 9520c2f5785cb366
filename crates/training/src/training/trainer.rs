//! BPE trainer implementation.
//!
//! Each step recounts every adjacent pair across the word store, picks the
//! best one (see [`MergeCandidate`]) and folds it into a single token.
//! Training ends when the step budget is spent or the best pair occurs fewer
//! than `min_frequency` times.

use super::store::WordStore;
use log::{debug, info};
use std::fmt;
use subtok_core::{MergeCandidate, MergeHistory, MergeRecord, Result, TokenizerError};

/// Default early-stop threshold: a pair seen once has nothing to generalize.
pub const DEFAULT_MIN_FREQUENCY: u64 = 2;

/// Configuration for BPE training.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrainingConfig {
    /// Minimum weighted count for a pair to be merged
    pub min_frequency: u64,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            min_frequency: DEFAULT_MIN_FREQUENCY,
        }
    }
}

impl TrainingConfig {
    /// Check the configuration for values training cannot honour.
    pub fn validate(&self) -> Result<()> {
        if self.min_frequency == 0 {
            return Err(TokenizerError::InvalidConfig(
                "min_frequency must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Why a training run stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// All requested steps were applied
    StepsExhausted,
    /// The best remaining pair fell under `min_frequency`
    BelowMinFrequency { best: u64 },
    /// No word has two or more tokens left
    NoPairs,
}

impl fmt::Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StopReason::StepsExhausted => write!(f, "step budget exhausted"),
            StopReason::BelowMinFrequency { best } => {
                write!(f, "best pair count {} below minimum frequency", best)
            }
            StopReason::NoPairs => write!(f, "no adjacent pairs left"),
        }
    }
}

/// Result of one training run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrainingOutcome {
    /// Number of merges applied during this run
    pub merges_applied: usize,
    /// Why the run ended
    pub stop_reason: StopReason,
}

/// BPE trainer.
///
/// Trains by iteratively merging the most frequent adjacent token pair in a
/// [`WordStore`], recording each merge in a [`MergeHistory`].
#[derive(Debug, Clone, Default)]
pub struct BpeTrainer {
    /// Configuration
    config: TrainingConfig,
}

impl BpeTrainer {
    /// Create a new BPE trainer with the given configuration.
    pub fn new(config: TrainingConfig) -> Self {
        Self { config }
    }

    /// Create a new BPE trainer with a custom early-stop threshold.
    pub fn with_min_frequency(min_frequency: u64) -> Self {
        Self::new(TrainingConfig { min_frequency })
    }

    pub fn config(&self) -> &TrainingConfig {
        &self.config
    }

    /// Run up to `steps` merges over `store`.
    pub fn train(
        &self,
        store: &mut WordStore,
        history: &mut MergeHistory,
        steps: usize,
    ) -> TrainingOutcome {
        info!(
            "train: {} unique words ({} occurrences), up to {} merges",
            store.word_count(),
            store.total_word_occurrences(),
            steps
        );

        let mut merges_applied = 0;
        let mut stop_reason = StopReason::StepsExhausted;

        for _ in 0..steps {
            match self.merge_step(store, history) {
                Ok(record) => {
                    debug!(
                        "merge {}: {:?} (pair count {}, applied {})",
                        record.rank, record.token, record.pair_count, record.applied
                    );
                    merges_applied += 1;
                }
                Err(reason) => {
                    stop_reason = reason;
                    break;
                }
            }
        }

        info!(
            "train: {} merges applied, stopped: {}",
            merges_applied, stop_reason
        );

        TrainingOutcome {
            merges_applied,
            stop_reason,
        }
    }

    /// Perform a single merge step.
    ///
    /// Returns the applied merge, or the reason no merge was possible.
    pub fn merge_step<'h>(
        &self,
        store: &mut WordStore,
        history: &'h mut MergeHistory,
    ) -> std::result::Result<&'h MergeRecord, StopReason> {
        let pair_counts = store.count_pairs();

        let candidate = MergeCandidate::best(&pair_counts).ok_or(StopReason::NoPairs)?;
        if candidate.count < self.config.min_frequency {
            return Err(StopReason::BelowMinFrequency {
                best: candidate.count,
            });
        }

        let applied = store.merge_pair(&candidate.token);
        Ok(history.push(&candidate.token, candidate.count, applied))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(store: &WordStore, word: &str) -> Vec<String> {
        store
            .get(word)
            .unwrap()
            .tokens()
            .iter()
            .map(|t| t.to_string())
            .collect()
    }

    #[test]
    fn test_basic_training() {
        let mut store = WordStore::new("_");
        store.add_word("aaabdaaabac");
        let mut history = MergeHistory::new();

        let outcome = BpeTrainer::default().train(&mut store, &mut history, 3);

        assert_eq!(outcome.merges_applied, 3);
        assert_eq!(outcome.stop_reason, StopReason::StepsExhausted);

        let merged: Vec<&str> = history.records().iter().map(|r| r.token.as_str()).collect();
        assert_eq!(merged, vec!["aa", "aaa", "aaab"]);
        assert_eq!(history.records()[0].pair_count, 4);
        assert_eq!(history.records()[0].applied, 2);
        assert_eq!(
            tokens(&store, "_aaabdaaabac"),
            vec!["_", "aaab", "d", "aaab", "a", "c"]
        );
    }

    #[test]
    fn test_early_stop_below_min_frequency() {
        let mut store = WordStore::new("_");
        store.add_words(["ab", "cd"]);
        let mut history = MergeHistory::new();

        let outcome = BpeTrainer::default().train(&mut store, &mut history, 10);

        assert_eq!(outcome.merges_applied, 0);
        assert_eq!(outcome.stop_reason, StopReason::BelowMinFrequency { best: 1 });
        assert!(history.is_empty());
    }

    #[test]
    fn test_stops_when_no_pairs_left() {
        let mut store = WordStore::new("");
        store.add_words(["ab", "ab"]);
        let mut history = MergeHistory::new();

        let outcome = BpeTrainer::default().train(&mut store, &mut history, 5);

        assert_eq!(outcome.merges_applied, 1);
        assert_eq!(outcome.stop_reason, StopReason::NoPairs);
    }

    #[test]
    fn test_zero_steps_is_noop() {
        let mut store = WordStore::new("_");
        store.add_words(["low", "low", "lower"]);
        let mut history = MergeHistory::new();

        let outcome = BpeTrainer::default().train(&mut store, &mut history, 0);

        assert_eq!(outcome.merges_applied, 0);
        assert_eq!(outcome.stop_reason, StopReason::StepsExhausted);
        assert_eq!(tokens(&store, "_low"), vec!["_", "l", "o", "w"]);
    }

    #[test]
    fn test_empty_store() {
        let mut store = WordStore::new("_");
        let mut history = MergeHistory::new();

        let outcome = BpeTrainer::default().train(&mut store, &mut history, 4);

        assert_eq!(outcome.stop_reason, StopReason::NoPairs);
        assert!(store.frequencies().is_empty());
    }

    #[test]
    fn test_min_frequency_one_merges_singletons() {
        let mut store = WordStore::new("");
        store.add_word("abc");
        let mut history = MergeHistory::new();

        let outcome = BpeTrainer::with_min_frequency(1).train(&mut store, &mut history, 10);

        assert_eq!(outcome.merges_applied, 2);
        assert_eq!(tokens(&store, "abc"), vec!["abc"]);
    }

    #[test]
    fn test_merged_frequency_matches_pair_count() {
        let mut store = WordStore::new("_");
        store.add_words("low low low lower lowest newer wider".split_whitespace());
        let mut history = MergeHistory::new();
        let trainer = BpeTrainer::default();

        for _ in 0..4 {
            let before = store.count_pairs();
            let record = trainer.merge_step(&mut store, &mut history).unwrap().clone();

            assert_eq!(before.get(record.token.as_str()), Some(&record.pair_count));
            // No pair occurrence overlaps another in this corpus.
            assert_eq!(record.applied, record.pair_count);
            assert_eq!(store.frequencies().get(&record.token), Some(record.pair_count));
        }
    }

    #[test]
    fn test_each_merge_shrinks_token_occurrences() {
        let mut store = WordStore::new("_");
        store.add_word("aaabdaaabac");
        let mut history = MergeHistory::new();
        let trainer = BpeTrainer::default();
        let occurrences =
            |store: &WordStore| -> u64 { store.frequencies().iter().map(|(_, c)| c).sum() };

        // "_aaabdaaabac" starts as 12 single-codepoint tokens.
        assert_eq!(occurrences(&store), 12);

        for _ in 0..3 {
            let before = occurrences(&store);
            let live_before = store.frequencies().live_tokens();
            let applied = trainer.merge_step(&mut store, &mut history).unwrap().applied;

            assert!(applied > 0);
            assert_eq!(occurrences(&store), before - applied);
            assert!(store.frequencies().live_tokens() <= live_before + 1);
        }
    }

    #[test]
    fn test_codepoint_mass_is_conserved() {
        let mut store = WordStore::new("_");
        store.add_words("aaab aab abab bbba aaab".split_whitespace());
        let total_chars = |store: &WordStore| -> u64 {
            store
                .frequencies()
                .iter()
                .map(|(token, count)| token.chars().count() as u64 * count)
                .sum()
        };
        let initial = total_chars(&store);
        let mut history = MergeHistory::new();

        BpeTrainer::default().train(&mut store, &mut history, 6);

        assert!(!history.is_empty());
        assert_eq!(total_chars(&store), initial);
    }

    #[test]
    fn test_training_is_deterministic() {
        let corpus = "the quick brown fox jumps over the lazy dog the end";
        let run = || {
            let mut store = WordStore::new("_");
            store.add_words(corpus.split_whitespace());
            let mut history = MergeHistory::new();
            BpeTrainer::default().train(&mut store, &mut history, 20);
            history.records().to_vec()
        };

        assert_eq!(run(), run());
    }

    #[test]
    fn test_validate() {
        assert!(TrainingConfig::default().validate().is_ok());
        assert!(TrainingConfig { min_frequency: 0 }.validate().is_err());
    }
}
