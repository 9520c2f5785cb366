//! Encoding over a trained vocabulary.
//!
//! Segmentation is codepoint-level greedy longest match; decoding maps ids
//! back to token strings.

pub mod char_level;

pub use char_level::CharLevelEncoder;
