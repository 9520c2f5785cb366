//! Vocabulary storage and lookup.
//!
//! The vocabulary is a bijection between token strings and dense ids in
//! `[0, N)`. Id 0 always belongs to the unknown-token sentinel. It is built
//! once from a [`TokenFrequencyTable`] and only read afterwards.

use crate::core::frequency::TokenFrequencyTable;
use crate::error::{Result, TokenizerError};
use ahash::AHashMap;
use compact_str::CompactString;

/// Forward mapping: token string -> ID
pub type Vocab = AHashMap<CompactString, u32>;

/// Id reserved for the unknown-token sentinel.
pub const UNKNOWN_ID: u32 = 0;

/// Vocabulary with forward and reverse mappings.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    /// Forward mapping: token string -> ID
    vocab: Vocab,
    /// Reverse mapping, indexed by ID
    vocab_r: Vec<CompactString>,
}

impl Vocabulary {
    /// Create a vocabulary holding only the unknown-token sentinel.
    pub fn new(unknown_token: &str) -> Self {
        let unknown = CompactString::new(unknown_token);
        let mut vocab = Vocab::new();
        vocab.insert(unknown.clone(), UNKNOWN_ID);

        Self {
            vocab,
            vocab_r: vec![unknown],
        }
    }

    /// Build the vocabulary from the final token frequency table.
    ///
    /// Ids are assigned in [`TokenFrequencyTable::ranked`] order starting at 1.
    /// A token equal to the sentinel keeps id 0 and is not added twice.
    pub fn build(unknown_token: &str, table: &TokenFrequencyTable) -> Result<Self> {
        let mut vocabulary = Self::new(unknown_token);
        vocabulary.vocab.reserve(table.len());
        vocabulary.vocab_r.reserve(table.len());

        for (token, count) in table.ranked() {
            let id = vocabulary.add_token(token)?;
            log::trace!("vocab: {:?} -> {} (frequency {})", token, id, count);
        }

        Ok(vocabulary)
    }

    /// Add a token to the vocabulary.
    ///
    /// Returns the ID assigned to the token, or its existing ID.
    fn add_token(&mut self, token: &str) -> Result<u32> {
        if let Some(&id) = self.vocab.get(token) {
            return Ok(id);
        }

        let next = self.vocab_r.len();
        let id = u32::try_from(next).map_err(|_| TokenizerError::VocabularyOverflow {
            max: u32::MAX as usize,
            tried: next,
        })?;

        let token = CompactString::new(token);
        self.vocab_r.push(token.clone());
        self.vocab.insert(token, id);

        Ok(id)
    }

    /// Get the ID for a token string.
    #[inline]
    pub fn get_id(&self, token: &str) -> Option<u32> {
        self.vocab.get(token).copied()
    }

    /// Get the token string for an ID.
    #[inline]
    pub fn get_token(&self, id: u32) -> Option<&str> {
        self.vocab_r.get(id as usize).map(|s| s.as_str())
    }

    /// The unknown-token sentinel (id 0).
    #[inline]
    pub fn unknown_token(&self) -> &str {
        self.vocab_r[UNKNOWN_ID as usize].as_str()
    }

    /// Get the size of the vocabulary, sentinel included.
    #[inline]
    pub fn len(&self) -> usize {
        self.vocab_r.len()
    }

    /// Always false: the sentinel is present from construction.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vocab_r.is_empty()
    }

    /// Iterate over `(id, token)` in id order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, &str)> {
        self.vocab_r
            .iter()
            .enumerate()
            .map(|(id, token)| (id as u32, token.as_str()))
    }

    /// Forward map, used to build lookup structures.
    pub fn tokens(&self) -> &Vocab {
        &self.vocab
    }
}
