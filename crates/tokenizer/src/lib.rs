//! subtok-tokenizer - High-level BPE tokenizer API
//!
//! This crate provides the [`BytePairEncoder`]: it learns a subword
//! vocabulary from a corpus and maps text to token ids and back.
//!
//! # Features
//!
//! - Whitespace pre-tokenization with a word-start marker during training
//! - Deterministic merges and vocabulary ids
//! - Greedy longest-match encoding that never fails
//! - Builder-based configuration and a diagnostic dump of all tables
//!
//! # Example
//!
//! ```rust
//! use subtok_tokenizer::BytePairEncoder;
//!
//! let mut encoder = BytePairEncoder::new("_", " ");
//! encoder.train("aaabdaaabac", 3)?;
//!
//! let ids = encoder.encode("aaabdaaabac");
//! let tokens = encoder.decode(&ids);
//! assert_eq!(tokens.concat(), "aaabdaaabac");
//! # Ok::<(), subtok_tokenizer::TokenizerError>(())
//! ```

// Re-export core types
pub use subtok_core::{MergeRecord, Result, TokenizerError, Vocabulary, UNKNOWN_ID};
pub use subtok_training::StopReason;

// Tokenizer API
pub mod tokenizer;
pub use tokenizer::{
    BytePairEncoder, EncodeMarker, TokenizerBuilder, TokenizerConfig, TrainingSummary,
    DEFAULT_UNKNOWN_TOKEN, DEFAULT_WORD_START_MARKER,
};

// Pre-tokenization
pub mod pre_tokenizer;
pub use pre_tokenizer::Splitter;

// Diagnostics
pub mod dump;
pub use dump::EncoderDump;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
