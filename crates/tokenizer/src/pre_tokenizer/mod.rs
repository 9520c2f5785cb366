//! Pre-tokenization.
//!
//! Splits raw text into the words that training and encoding operate on.

pub mod split;

pub use split::Splitter;
