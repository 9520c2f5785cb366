//! Codepoint-level greedy segmentation and decoding.
//!
//! Words are segmented by repeatedly taking the longest leading run of
//! codepoints that is a vocabulary token. A codepoint that starts no token at
//! all is consumed on its own and encoded as the unknown id.

use crate::core::vocab::{Vocabulary, UNKNOWN_ID};
use crate::error::{Result, TokenizerError};
use ahash::AHashMap;

/// Trie node for efficient longest-match tokenization.
#[derive(Debug, Clone, Default)]
struct CharTrieNode {
    /// Child nodes indexed by codepoint
    children: AHashMap<char, CharTrieNode>,
    /// Token ID if this node represents a complete token
    token_id: Option<u32>,
}

/// Trie structure for fast prefix lookup of tokens at codepoint level.
#[derive(Debug, Clone, Default)]
struct CharVocabTrie {
    root: CharTrieNode,
}

impl CharVocabTrie {
    /// Insert a token string into the trie.
    fn insert(&mut self, token: &str, token_id: u32) {
        let mut node = &mut self.root;

        for ch in token.chars() {
            node = node.children.entry(ch).or_default();
        }

        node.token_id = Some(token_id);
    }

    /// Build a trie from a vocabulary.
    fn from_vocab(vocab: &Vocabulary) -> Self {
        let mut trie = Self::default();

        for (token_id, token) in vocab.iter() {
            // An empty token would match without consuming anything.
            if !token.is_empty() {
                trie.insert(token, token_id);
            }
        }

        trie
    }

    /// Find the longest token that is a prefix of `chars[pos..]`.
    ///
    /// Returns the token ID and its length in codepoints.
    fn find_longest_match(&self, chars: &[char], pos: usize) -> Option<(u32, usize)> {
        let mut node = &self.root;
        let mut best_match: Option<(u32, usize)> = None;

        for (offset, ch) in chars[pos..].iter().enumerate() {
            match node.children.get(ch) {
                Some(child) => {
                    node = child;

                    if let Some(token_id) = node.token_id {
                        best_match = Some((token_id, offset + 1));
                    }
                }
                None => break,
            }
        }

        best_match
    }
}

/// Greedy longest-match encoder over a frozen vocabulary.
#[derive(Debug, Clone)]
pub struct CharLevelEncoder {
    /// Vocabulary for token lookups and decoding
    vocab: Vocabulary,
    /// Trie for efficient longest-match tokenization
    vocab_trie: CharVocabTrie,
}

impl CharLevelEncoder {
    /// Create a new encoder over `vocab`.
    pub fn new(vocab: Vocabulary) -> Self {
        let vocab_trie = CharVocabTrie::from_vocab(&vocab);

        Self { vocab, vocab_trie }
    }

    /// The vocabulary this encoder reads from.
    pub fn vocab(&self) -> &Vocabulary {
        &self.vocab
    }

    /// Segment one word, appending token ids to `out`.
    ///
    /// Always consumes at least one codepoint per emitted id, so every input
    /// terminates and every codepoint is covered.
    pub fn encode_word_into(&self, word: &str, out: &mut Vec<u32>) {
        let chars: Vec<char> = word.chars().collect();
        let mut pos = 0;

        while pos < chars.len() {
            match self.vocab_trie.find_longest_match(&chars, pos) {
                Some((token_id, length)) => {
                    out.push(token_id);
                    pos += length;
                }
                None => {
                    out.push(UNKNOWN_ID);
                    pos += 1;
                }
            }
        }
    }

    /// Segment one word into token ids.
    pub fn encode_word(&self, word: &str) -> Vec<u32> {
        let mut ids = Vec::new();
        self.encode_word_into(word, &mut ids);
        ids
    }

    /// Decode ids to token strings; unassigned ids become empty strings.
    pub fn decode(&self, ids: &[u32]) -> Vec<String> {
        ids.iter()
            .map(|&id| self.vocab.get_token(id).unwrap_or_default().to_string())
            .collect()
    }

    /// Decode ids to token strings, failing on the first unassigned id.
    pub fn decode_strict(&self, ids: &[u32]) -> Result<Vec<String>> {
        ids.iter()
            .map(|&id| {
                self.vocab
                    .get_token(id)
                    .map(str::to_string)
                    .ok_or(TokenizerError::UnknownTokenId(id))
            })
            .collect()
    }
}
