//! Diagnostic snapshot of the encoder's internal tables.
//!
//! Not part of the encoding contract; tables are emitted in a stable order
//! so two dumps of equal state compare equal.

use serde::Serialize;
use std::fmt;
use subtok_core::{MergeHistory, Vocabulary};
use subtok_training::WordStore;

/// A training word with its count and current token sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordDump {
    pub word: String,
    pub count: u64,
    pub tokens: Vec<String>,
}

/// A token and its aggregate frequency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenCountDump {
    pub token: String,
    pub count: u64,
}

/// A vocabulary entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VocabEntryDump {
    pub id: u32,
    pub token: String,
}

/// An applied merge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MergeDump {
    pub rank: u32,
    pub token: String,
    pub pair_count: u64,
    pub applied: u64,
}

/// Snapshot of all encoder tables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EncoderDump {
    /// Words in first-seen order
    pub words: Vec<WordDump>,
    /// Tokens by descending frequency, then token string
    pub token_counts: Vec<TokenCountDump>,
    /// Vocabulary in id order
    pub vocabulary: Vec<VocabEntryDump>,
    /// Merges in rank order
    pub merges: Vec<MergeDump>,
}

impl EncoderDump {
    pub(crate) fn capture(store: &WordStore, history: &MergeHistory, vocab: &Vocabulary) -> Self {
        let words = store
            .words()
            .iter()
            .map(|entry| WordDump {
                word: entry.word().to_string(),
                count: entry.count(),
                tokens: entry.tokens().iter().map(|t| t.to_string()).collect(),
            })
            .collect();

        let token_counts = store
            .frequencies()
            .ranked()
            .into_iter()
            .map(|(token, count)| TokenCountDump {
                token: token.to_string(),
                count,
            })
            .collect();

        let vocabulary = vocab
            .iter()
            .map(|(id, token)| VocabEntryDump {
                id,
                token: token.to_string(),
            })
            .collect();

        let merges = history
            .records()
            .iter()
            .map(|record| MergeDump {
                rank: record.rank,
                token: record.token.clone(),
                pair_count: record.pair_count,
                applied: record.applied,
            })
            .collect();

        Self {
            words,
            token_counts,
            vocabulary,
            merges,
        }
    }
}

impl fmt::Display for EncoderDump {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "== words ({}) ==", self.words.len())?;
        for word in &self.words {
            writeln!(f, "{:?} x{} => {:?}", word.word, word.count, word.tokens)?;
        }

        writeln!(f, "== token counts ({}) ==", self.token_counts.len())?;
        for entry in &self.token_counts {
            writeln!(f, "{:?} => {}", entry.token, entry.count)?;
        }

        writeln!(f, "== vocabulary ({}) ==", self.vocabulary.len())?;
        for entry in &self.vocabulary {
            writeln!(f, "{} => {:?}", entry.id, entry.token)?;
        }

        writeln!(f, "== merges ({}) ==", self.merges.len())?;
        for merge in &self.merges {
            writeln!(
                f,
                "#{} {:?} pair_count={} applied={}",
                merge.rank, merge.token, merge.pair_count, merge.applied
            )?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::BytePairEncoder;

    #[test]
    fn test_dump_tables() {
        let mut encoder = BytePairEncoder::default();
        encoder.train("ab ab c", 1).unwrap();

        let dump = encoder.dump();
        assert_eq!(dump.words.len(), 2);
        assert_eq!(dump.words[0].word, "_ab");
        assert_eq!(dump.words[0].count, 2);
        assert_eq!(dump.words[0].tokens, vec!["_a", "b"]);
        assert_eq!(dump.vocabulary.len(), encoder.vocab_size());
        assert_eq!(dump.vocabulary[0].token, " ");
        assert_eq!(dump.merges.len(), 1);
        assert_eq!(dump.merges[0].token, "_a");
        assert_eq!(dump.token_counts[0].count, 2);
    }

    #[test]
    fn test_dump_display() {
        let mut encoder = BytePairEncoder::default();
        encoder.train("ab ab", 1).unwrap();

        let text = encoder.dump().to_string();
        assert!(text.contains("== words (1) =="));
        assert!(text.contains("\"_ab\" x2 => [\"_a\", \"b\"]"));
        assert!(text.contains("#0 \"_a\" pair_count=2 applied=2"));
    }

    #[test]
    fn test_dump_serializes() {
        let mut encoder = BytePairEncoder::default();
        encoder.train("ab ab", 1).unwrap();

        let value = serde_json::to_value(encoder.dump()).unwrap();
        assert_eq!(value["words"][0]["word"], "_ab");
        assert_eq!(value["merges"][0]["applied"], 2);
        assert_eq!(value["vocabulary"][0]["id"], 0);
    }

    #[test]
    fn test_dump_is_stable() {
        let corpus = "one two three two three three";
        let mut first = BytePairEncoder::default();
        first.train(corpus, 5).unwrap();
        let mut second = BytePairEncoder::default();
        second.train(corpus, 5).unwrap();

        assert_eq!(first.dump(), second.dump());
    }
}
