//! Training infrastructure for BPE tokenizers.
//!
//! This module provides the word store that training mutates and the
//! merge loop that drives it.

pub mod store;
pub mod trainer;

pub use store::{WordEntry, WordStore};
pub use trainer::{BpeTrainer, StopReason, TrainingConfig, TrainingOutcome, DEFAULT_MIN_FREQUENCY};
