//! Corpus and encoder options shared by every command.

use anyhow::{Context, Result as AnyhowResult};
use clap::Args;
use std::fs;
use std::path::PathBuf;
use std::time::Instant;
use subtok_tokenizer::{BytePairEncoder, EncodeMarker, TrainingSummary};

/// Training corpus and encoder configuration.
#[derive(Args)]
pub struct CorpusArgs {
    /// Path to the training corpus
    #[arg(short, long, default_value = "./data.txt")]
    pub corpus: PathBuf,

    /// Maximum number of merge steps
    #[arg(short, long, default_value_t = 50)]
    pub steps: usize,

    /// Word-start marker prefixed to training words
    #[arg(long, default_value = subtok_tokenizer::DEFAULT_WORD_START_MARKER)]
    pub marker: String,

    /// Unknown-token sentinel (id 0)
    #[arg(long, default_value = subtok_tokenizer::DEFAULT_UNKNOWN_TOKEN)]
    pub unk: String,

    /// Stop once the best pair occurs fewer times than this
    #[arg(long, default_value_t = 2)]
    pub min_frequency: u64,

    /// Prefix words with the marker at encode time as well
    #[arg(long, default_value_t = false)]
    pub prefix_marker: bool,
}

impl CorpusArgs {
    /// Read the corpus and train a fresh encoder on it.
    pub fn train(&self) -> AnyhowResult<(BytePairEncoder, TrainingSummary)> {
        let policy = if self.prefix_marker {
            EncodeMarker::Prefix
        } else {
            EncodeMarker::Omit
        };

        let mut encoder = BytePairEncoder::builder()
            .word_start_marker(self.marker.as_str())
            .unknown_token(self.unk.as_str())
            .min_frequency(self.min_frequency)
            .encode_marker(policy)
            .build()?;

        let start = Instant::now();
        let text = fs::read_to_string(&self.corpus)
            .with_context(|| format!("failed to read corpus {}", self.corpus.display()))?;
        log::info!(
            "read {} bytes from {} in {:.2}s",
            text.len(),
            self.corpus.display(),
            start.elapsed().as_secs_f64()
        );

        let start = Instant::now();
        let summary = encoder.train(&text, self.steps)?;
        log::info!(
            "training completed in {:.2}s ({} merges, {})",
            start.elapsed().as_secs_f64(),
            summary.merges_applied,
            summary.stop_reason
        );

        Ok((encoder, summary))
    }
}
