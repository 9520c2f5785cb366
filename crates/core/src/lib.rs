//! subtok-core - Core BPE data structures
//!
//! This crate provides the tables and lookup structures shared by BPE
//! training and encoding, independent of how the corpus is prepared.
//!
//! # Features
//!
//! - Incrementally maintained token frequency table
//! - Deterministic vocabulary construction with a reserved unknown id
//! - Deterministic merge candidate selection
//! - Trie-backed greedy longest-match segmentation
//!
//! # Example
//!
//! ```rust
//! use subtok_core::{CharLevelEncoder, TokenFrequencyTable, Vocabulary};
//!
//! let mut table = TokenFrequencyTable::new();
//! table.credit("ab", 3);
//! table.credit("c", 1);
//!
//! let vocab = Vocabulary::build("<unk>", &table)?;
//! let encoder = CharLevelEncoder::new(vocab);
//! assert_eq!(encoder.encode_word("abcx"), vec![1, 2, 0]);
//! # Ok::<(), subtok_core::TokenizerError>(())
//! ```

pub mod error;
pub use error::{Result, TokenizerError};

// Core BPE data structures
pub mod core;
pub use core::{
    MergeCandidate, MergeHistory, MergeRecord, PairCounts, TokenFrequencyTable, Vocab,
    Vocabulary, UNKNOWN_ID,
};

// Segmentation and decoding
pub mod encoding;
pub use encoding::CharLevelEncoder;
