//! Main tokenizer implementation.
//!
//! This module provides the high-level [`BytePairEncoder`] that ties the
//! word splitter, the training state and the greedy encoder together.

use crate::dump::EncoderDump;
use crate::pre_tokenizer::Splitter;
use subtok_core::{CharLevelEncoder, MergeHistory, MergeRecord, Result, TokenizerError, Vocabulary};
use subtok_training::{BpeTrainer, StopReason, TrainingConfig, WordStore, DEFAULT_MIN_FREQUENCY};

/// Default word-start marker.
pub const DEFAULT_WORD_START_MARKER: &str = "_";

/// Default unknown-token sentinel.
pub const DEFAULT_UNKNOWN_TOKEN: &str = " ";

/// Whether `encode` prefixes words with the word-start marker.
///
/// Training always prefixes words. Encoding historically does not, which
/// leaves most marker-initial tokens unreachable from `encode`; `Omit` keeps
/// that behaviour and `Prefix` segments words exactly as training saw them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EncodeMarker {
    /// Segment raw words
    #[default]
    Omit,
    /// Segment marker + word
    Prefix,
}

/// Configuration for building a tokenizer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenizerConfig {
    /// Prefix marking the start of each word during training
    pub word_start_marker: String,
    /// Sentinel string owning id 0
    pub unknown_token: String,
    /// Minimum weighted pair count for a merge
    pub min_frequency: u64,
    /// Marker handling at encode time
    pub encode_marker: EncodeMarker,
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        Self {
            word_start_marker: DEFAULT_WORD_START_MARKER.to_string(),
            unknown_token: DEFAULT_UNKNOWN_TOKEN.to_string(),
            min_frequency: DEFAULT_MIN_FREQUENCY,
            encode_marker: EncodeMarker::Omit,
        }
    }
}

impl TokenizerConfig {
    /// Check the configuration for values the encoder cannot honour.
    pub fn validate(&self) -> Result<()> {
        if self.unknown_token.is_empty() {
            return Err(TokenizerError::InvalidConfig(
                "unknown_token must not be empty".to_string(),
            ));
        }
        self.training().validate()
    }

    fn training(&self) -> TrainingConfig {
        TrainingConfig {
            min_frequency: self.min_frequency,
        }
    }
}

/// Builder for creating a tokenizer.
#[derive(Debug, Clone, Default)]
pub struct TokenizerBuilder {
    config: TokenizerConfig,
}

impl TokenizerBuilder {
    /// Create a new tokenizer builder with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the word-start marker.
    pub fn word_start_marker(mut self, marker: impl Into<String>) -> Self {
        self.config.word_start_marker = marker.into();
        self
    }

    /// Set the unknown-token sentinel.
    pub fn unknown_token(mut self, token: impl Into<String>) -> Self {
        self.config.unknown_token = token.into();
        self
    }

    /// Set the minimum frequency for merges.
    pub fn min_frequency(mut self, freq: u64) -> Self {
        self.config.min_frequency = freq;
        self
    }

    /// Set the marker handling used by `encode`.
    pub fn encode_marker(mut self, policy: EncodeMarker) -> Self {
        self.config.encode_marker = policy;
        self
    }

    /// Build the tokenizer.
    pub fn build(self) -> Result<BytePairEncoder> {
        BytePairEncoder::from_config(self.config)
    }
}

/// Summary of a `train` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrainingSummary {
    /// Merges applied by this call
    pub merges_applied: usize,
    /// Why the merge loop ended
    pub stop_reason: StopReason,
    /// Vocabulary size after the call, sentinel included
    pub vocab_size: usize,
}

/// Byte pair encoder.
///
/// Learns merges from a corpus and maps text to token ids and back.
/// Calling [`train`](Self::train) again continues from the current state;
/// construct a new encoder for a clean retrain.
#[derive(Debug, Clone)]
pub struct BytePairEncoder {
    /// Configuration
    config: TokenizerConfig,
    /// Text splitter
    splitter: Splitter,
    /// Merge loop
    trainer: BpeTrainer,
    /// Words, their token sequences and token frequencies
    store: WordStore,
    /// Applied merges in order
    history: MergeHistory,
    /// Greedy encoder over the frozen vocabulary
    encoder: CharLevelEncoder,
}

impl Default for BytePairEncoder {
    fn default() -> Self {
        Self::new(DEFAULT_WORD_START_MARKER, DEFAULT_UNKNOWN_TOKEN)
    }
}

impl BytePairEncoder {
    /// Create an encoder with the given marker and unknown token.
    pub fn new(word_start_marker: &str, unknown_token: &str) -> Self {
        Self::with_config(TokenizerConfig {
            word_start_marker: word_start_marker.to_string(),
            unknown_token: unknown_token.to_string(),
            ..TokenizerConfig::default()
        })
    }

    /// Create an encoder from a validated configuration.
    pub fn from_config(config: TokenizerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::with_config(config))
    }

    fn with_config(config: TokenizerConfig) -> Self {
        Self {
            splitter: Splitter::whitespace(),
            trainer: BpeTrainer::new(config.training()),
            store: WordStore::new(&config.word_start_marker),
            history: MergeHistory::new(),
            encoder: CharLevelEncoder::new(Vocabulary::new(&config.unknown_token)),
            config,
        }
    }

    /// Create a tokenizer builder.
    pub fn builder() -> TokenizerBuilder {
        TokenizerBuilder::new()
    }

    /// Train on `text` for up to `steps` merges, then rebuild the vocabulary.
    pub fn train(&mut self, text: &str, steps: usize) -> Result<TrainingSummary> {
        self.store.add_words(self.splitter.words(text));

        let outcome = self.trainer.train(&mut self.store, &mut self.history, steps);

        let vocab = Vocabulary::build(&self.config.unknown_token, self.store.frequencies())?;
        log::info!("vocabulary built: {} tokens", vocab.len());
        self.encoder = CharLevelEncoder::new(vocab);

        Ok(TrainingSummary {
            merges_applied: outcome.merges_applied,
            stop_reason: outcome.stop_reason,
            vocab_size: self.vocab_size(),
        })
    }

    /// Encode text to token ids.
    ///
    /// Total over all input: codepoints no token covers encode to id 0.
    pub fn encode(&self, text: &str) -> Vec<u32> {
        let mut ids = Vec::new();

        for word in self.splitter.words(text) {
            match self.config.encode_marker {
                EncodeMarker::Omit => self.encoder.encode_word_into(word, &mut ids),
                EncodeMarker::Prefix => {
                    let marked = self.store.training_form(word);
                    self.encoder.encode_word_into(&marked, &mut ids);
                }
            }
        }

        ids
    }

    /// Greedily segment a single word as given, without splitting or marking.
    pub fn segment_word(&self, word: &str) -> Vec<u32> {
        self.encoder.encode_word(word)
    }

    /// Decode ids to token strings; unassigned ids decode to `""`.
    pub fn decode(&self, ids: &[u32]) -> Vec<String> {
        self.encoder.decode(ids)
    }

    /// Decode ids to token strings, failing with
    /// [`TokenizerError::UnknownTokenId`] on an unassigned id.
    pub fn decode_strict(&self, ids: &[u32]) -> Result<Vec<String>> {
        self.encoder.decode_strict(ids)
    }

    /// Get the vocabulary size, sentinel included.
    pub fn vocab_size(&self) -> usize {
        self.encoder.vocab().len()
    }

    /// Get a reference to the vocabulary.
    pub fn vocab(&self) -> &Vocabulary {
        self.encoder.vocab()
    }

    pub fn token_to_id(&self, token: &str) -> Option<u32> {
        self.encoder.vocab().get_id(token)
    }

    pub fn id_to_token(&self, id: u32) -> Option<&str> {
        self.encoder.vocab().get_token(id)
    }

    /// Current aggregate frequency of `token` in the training state.
    pub fn token_frequency(&self, token: &str) -> Option<u64> {
        self.store.frequencies().get(token)
    }

    /// Number of distinct training words.
    pub fn word_count(&self) -> usize {
        self.store.word_count()
    }

    /// Applied merges in order.
    pub fn merges(&self) -> &[MergeRecord] {
        self.history.records()
    }

    pub fn config(&self) -> &TokenizerConfig {
        &self.config
    }

    /// Snapshot every internal table for debugging.
    pub fn dump(&self) -> EncoderDump {
        EncoderDump::capture(&self.store, &self.history, self.encoder.vocab())
    }
}
