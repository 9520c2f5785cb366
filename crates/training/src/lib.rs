//! subtok-training - BPE training infrastructure
//!
//! This crate provides the training algorithm for learning BPE merges
//! from whitespace-delimited words.
//!
//! # Features
//!
//! - Word store keeping each distinct word's count and current tokens
//! - Incremental token frequency bookkeeping during merges
//! - Deterministic merge selection with an early-stop threshold
//!
//! # Example
//!
//! ```rust
//! use subtok_core::MergeHistory;
//! use subtok_training::{BpeTrainer, WordStore};
//!
//! let mut store = WordStore::new("_");
//! store.add_words("low low lower".split_whitespace());
//!
//! let mut history = MergeHistory::new();
//! let outcome = BpeTrainer::default().train(&mut store, &mut history, 10);
//! assert_eq!(history.len(), outcome.merges_applied);
//! ```

pub use subtok_core::{Result, TokenizerError};

// Training infrastructure
pub mod training;
pub use training::{
    BpeTrainer, StopReason, TrainingConfig, TrainingOutcome, WordEntry, WordStore,
    DEFAULT_MIN_FREQUENCY,
};
