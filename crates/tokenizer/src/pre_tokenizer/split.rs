//! Text splitting for pre-tokenization.
//!
//! Corpus and input text are cut into words on runs of Unicode whitespace.
//! Leading and trailing whitespace never yields an empty word.

/// Whitespace word splitter.
#[derive(Debug, Clone, Copy, Default)]
pub struct Splitter;

impl Splitter {
    /// Create a whitespace splitter.
    pub fn whitespace() -> Self {
        Self
    }

    /// Split text into non-empty words, in order.
    pub fn split<'a>(&self, text: &'a str) -> Vec<&'a str> {
        self.words(text).collect()
    }

    /// Lazily iterate over the words of `text`.
    pub fn words<'a>(&self, text: &'a str) -> impl Iterator<Item = &'a str> {
        text.trim().split_whitespace()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whitespace_split() {
        let splitter = Splitter::whitespace();
        let result = splitter.split("hello world  test");
        assert_eq!(result, vec!["hello", "world", "test"]);
    }

    #[test]
    fn test_trims_and_collapses_runs() {
        let splitter = Splitter::whitespace();
        let result = splitter.split("\t  one\n\ntwo \r\n three   ");
        assert_eq!(result, vec!["one", "two", "three"]);
    }

    #[test]
    fn test_unicode_whitespace() {
        let splitter = Splitter::whitespace();
        // U+3000 ideographic space and U+00A0 no-break space
        let result = splitter.split("提取\u{3000}数据\u{a0}特征");
        assert_eq!(result, vec!["提取", "数据", "特征"]);
    }

    #[test]
    fn test_empty_string() {
        let splitter = Splitter::whitespace();
        assert_eq!(splitter.split(""), Vec::<&str>::new());
        assert_eq!(splitter.split("   \n\t "), Vec::<&str>::new());
    }
}
