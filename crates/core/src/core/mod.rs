//! Core BPE data structures.
//!
//! This module contains the tables shared by training and encoding:
//! token frequencies, the vocabulary, merge candidates and merge history.

pub mod frequency;
pub mod merges;
pub mod priority;
pub mod vocab;

pub use frequency::TokenFrequencyTable;
pub use merges::{MergeHistory, MergeRecord};
pub use priority::{MergeCandidate, PairCounts};
pub use vocab::{Vocab, Vocabulary, UNKNOWN_ID};
