//! Word–token store for BPE training.
//!
//! Holds every distinct training word with its occurrence count and current
//! token sequence, together with the aggregate token frequency table. Both
//! are only ever mutated together, so the frequency invariant
//! `freq(t) = sum over words of count(w) * occurrences(t, w)` holds after
//! every call.

use ahash::AHashMap;
use compact_str::CompactString;
use subtok_core::{PairCounts, TokenFrequencyTable};

/// One distinct training word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordEntry {
    /// Training form (marker + raw word)
    word: CompactString,
    /// Number of occurrences in the corpus
    count: u64,
    /// Current token sequence; concatenates back to `word`
    tokens: Vec<CompactString>,
}

impl WordEntry {
    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn tokens(&self) -> &[CompactString] {
        &self.tokens
    }
}

/// Word -> (count, token sequence) plus token frequencies.
#[derive(Debug, Clone)]
pub struct WordStore {
    /// Prefix applied to every raw word
    word_start_marker: CompactString,
    /// Training form -> position in `words`
    index: AHashMap<CompactString, usize>,
    /// Words in first-seen order
    words: Vec<WordEntry>,
    /// Aggregate token frequencies
    frequencies: TokenFrequencyTable,
}

/// Whether `left` followed by `right` spells exactly `target`.
#[inline]
fn forms_pair(left: &str, right: &str, target: &str) -> bool {
    left.len() + right.len() == target.len()
        && target.starts_with(left)
        && target.ends_with(right)
}

impl WordStore {
    /// Create an empty store that prefixes words with `word_start_marker`.
    pub fn new(word_start_marker: &str) -> Self {
        Self {
            word_start_marker: CompactString::new(word_start_marker),
            index: AHashMap::new(),
            words: Vec::new(),
            frequencies: TokenFrequencyTable::new(),
        }
    }

    /// The prefix applied to raw words.
    pub fn word_start_marker(&self) -> &str {
        &self.word_start_marker
    }

    /// Build the training form of a raw word.
    pub fn training_form(&self, raw: &str) -> CompactString {
        let mut word = CompactString::with_capacity(self.word_start_marker.len() + raw.len());
        word.push_str(&self.word_start_marker);
        word.push_str(raw);
        word
    }

    /// Add every raw word in `words`.
    pub fn add_words<'a>(&mut self, words: impl IntoIterator<Item = &'a str>) {
        for word in words {
            self.add_word(word);
        }
    }

    /// Add one occurrence of a raw word.
    ///
    /// A new word starts as one token per codepoint. A word already seen keeps
    /// its current (possibly merged) sequence; only its count grows, and its
    /// current tokens are credited once more.
    pub fn add_word(&mut self, raw: &str) {
        let word = self.training_form(raw);

        let pos = match self.index.get(&word) {
            Some(&pos) => {
                self.words[pos].count += 1;
                pos
            }
            None => {
                let mut buf = [0u8; 4];
                let tokens: Vec<CompactString> = word
                    .chars()
                    .map(|ch| CompactString::new(ch.encode_utf8(&mut buf)))
                    .collect();

                let pos = self.words.len();
                self.index.insert(word.clone(), pos);
                self.words.push(WordEntry {
                    word,
                    count: 1,
                    tokens,
                });
                pos
            }
        };

        for token in &self.words[pos].tokens {
            self.frequencies.credit(token, 1);
        }
    }

    /// Count every adjacent pair, weighted by word count.
    ///
    /// Pairs are keyed by their concatenation.
    pub fn count_pairs(&self) -> PairCounts {
        let mut pair_counts = PairCounts::new();

        for entry in &self.words {
            for window in entry.tokens.windows(2) {
                let mut pair = CompactString::with_capacity(window[0].len() + window[1].len());
                pair.push_str(&window[0]);
                pair.push_str(&window[1]);
                *pair_counts.entry(pair).or_insert(0) += entry.count;
            }
        }

        pair_counts
    }

    /// Replace every non-overlapping adjacent pair spelling `target`.
    ///
    /// Scans each word left to right and resumes right after a freshly merged
    /// token. Returns the weighted number of replacements, which is also the
    /// amount credited to `target` in the frequency table.
    pub fn merge_pair(&mut self, target: &str) -> u64 {
        let merged = CompactString::new(target);
        let mut applied = 0u64;

        for entry in &mut self.words {
            let mut merges_in_word = 0u64;
            let mut i = 0;

            while i + 1 < entry.tokens.len() {
                if forms_pair(&entry.tokens[i], &entry.tokens[i + 1], target) {
                    self.frequencies.debit(&entry.tokens[i], entry.count);
                    self.frequencies.debit(&entry.tokens[i + 1], entry.count);

                    entry.tokens[i] = merged.clone();
                    entry.tokens.remove(i + 1);
                    merges_in_word += 1;
                }
                i += 1;
            }

            applied += merges_in_word * entry.count;
        }

        if applied > 0 {
            self.frequencies.credit(target, applied);
        }

        applied
    }

    /// Aggregate token frequencies.
    pub fn frequencies(&self) -> &TokenFrequencyTable {
        &self.frequencies
    }

    /// Look up a word by its training form.
    pub fn get(&self, word: &str) -> Option<&WordEntry> {
        self.index.get(word).map(|&pos| &self.words[pos])
    }

    /// Words in first-seen order.
    pub fn words(&self) -> &[WordEntry] {
        &self.words
    }

    /// Get the number of unique words.
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// Get the total count of all word occurrences.
    pub fn total_word_occurrences(&self) -> u64 {
        self.words.iter().map(|entry| entry.count).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(store: &WordStore, word: &str) -> Vec<String> {
        store
            .get(word)
            .unwrap()
            .tokens()
            .iter()
            .map(|t| t.to_string())
            .collect()
    }

    #[test]
    fn test_add_word_splits_codepoints() {
        let mut store = WordStore::new("_");
        store.add_word("héllo");

        assert_eq!(store.word_count(), 1);
        assert_eq!(tokens(&store, "_héllo"), vec!["_", "h", "é", "l", "l", "o"]);
        assert_eq!(store.frequencies().get("l"), Some(2));
        assert_eq!(store.frequencies().get("_"), Some(1));
    }

    #[test]
    fn test_repeated_word_increments_count() {
        let mut store = WordStore::new("_");
        store.add_words(["ab", "ab", "ab", "b"]);

        assert_eq!(store.word_count(), 2);
        assert_eq!(store.total_word_occurrences(), 4);
        assert_eq!(store.get("_ab").unwrap().count(), 3);
        assert_eq!(store.frequencies().get("b"), Some(4));
        assert_eq!(store.frequencies().get("_"), Some(4));
    }

    #[test]
    fn test_count_pairs_with_frequency() {
        let mut store = WordStore::new("");
        store.add_words(["ab", "ab", "ab", "bc"]);

        let pairs = store.count_pairs();
        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs.get("ab"), Some(&3));
        assert_eq!(pairs.get("bc"), Some(&1));
    }

    #[test]
    fn test_count_pairs_overlapping() {
        let mut store = WordStore::new("");
        store.add_word("aaaa");

        assert_eq!(store.count_pairs().get("aa"), Some(&3));
    }

    #[test]
    fn test_merge_pair_non_overlapping() {
        let mut store = WordStore::new("");
        store.add_word("aaaaa");

        let applied = store.merge_pair("aa");

        assert_eq!(applied, 2);
        assert_eq!(tokens(&store, "aaaaa"), vec!["aa", "aa", "a"]);
        assert_eq!(store.frequencies().get("aa"), Some(2));
        assert_eq!(store.frequencies().get("a"), Some(1));
    }

    #[test]
    fn test_merge_pair_weighted_by_word_count() {
        let mut store = WordStore::new("_");
        store.add_words(["ab", "ab", "cab"]);

        let applied = store.merge_pair("ab");

        assert_eq!(applied, 3);
        assert_eq!(tokens(&store, "_ab"), vec!["_", "ab"]);
        assert_eq!(tokens(&store, "_cab"), vec!["_", "c", "ab"]);
        assert_eq!(store.frequencies().get("ab"), Some(3));
        assert_eq!(store.frequencies().get("a"), Some(0));
        assert_eq!(store.frequencies().get("b"), Some(0));
        assert_eq!(store.frequencies().get("c"), Some(1));
    }

    #[test]
    fn test_merge_pair_by_concatenation() {
        let mut store = WordStore::new("");
        store.add_words(["ab", "xab"]);
        store.merge_pair("ab");
        store.merge_pair("xab");

        assert_eq!(tokens(&store, "xab"), vec!["xab"]);
        assert_eq!(store.frequencies().get("x"), Some(0));
        assert_eq!(store.frequencies().get("ab"), Some(1));
        assert_eq!(store.frequencies().get("xab"), Some(1));
    }

    #[test]
    fn test_merge_absent_pair_is_noop() {
        let mut store = WordStore::new("_");
        store.add_word("abc");

        assert_eq!(store.merge_pair("zz"), 0);
        assert!(!store.frequencies().contains("zz"));
        assert_eq!(tokens(&store, "_abc"), vec!["_", "a", "b", "c"]);
    }

    #[test]
    fn test_readd_after_merge_keeps_sequence() {
        let mut store = WordStore::new("_");
        store.add_word("ab");
        store.merge_pair("_a");
        store.add_word("ab");

        assert_eq!(tokens(&store, "_ab"), vec!["_a", "b"]);
        assert_eq!(store.get("_ab").unwrap().count(), 2);
        assert_eq!(store.frequencies().get("_a"), Some(2));
        assert_eq!(store.frequencies().get("b"), Some(2));
        assert_eq!(store.frequencies().get("_"), Some(0));
    }

    #[test]
    fn test_sequences_reconstruct_words() {
        let mut store = WordStore::new("_");
        store.add_words("the cat sat on the mat".split_whitespace());
        store.merge_pair("at");
        store.merge_pair("_t");
        store.merge_pair("_th");

        for entry in store.words() {
            let joined: String = entry.tokens().iter().map(|t| t.as_str()).collect();
            assert_eq!(joined, entry.word());
        }
    }
}
