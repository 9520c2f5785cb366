//! Error types for the subtok tokenizer library.

use thiserror::Error;

/// Main error type for the tokenizer library.
///
/// Training and encoding are total over their inputs, so the variants here
/// cover configuration mistakes and the strict decoding path only.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenizerError {
    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Token ID with no vocabulary entry
    #[error("Unknown token ID: {0}")]
    UnknownTokenId(u32),

    /// Vocabulary size exceeded the id space
    #[error("Vocabulary size exceeded maximum of {max} (tried to add {tried})")]
    VocabularyOverflow { max: usize, tried: usize },
}

/// Result type alias for tokenizer operations.
pub type Result<T> = std::result::Result<T, TokenizerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            TokenizerError::UnknownTokenId(42).to_string(),
            "Unknown token ID: 42"
        );
        assert_eq!(
            TokenizerError::InvalidConfig("empty unknown token".to_string()).to_string(),
            "Invalid configuration: empty unknown token"
        );
        assert_eq!(
            TokenizerError::VocabularyOverflow { max: 10, tried: 11 }.to_string(),
            "Vocabulary size exceeded maximum of 10 (tried to add 11)"
        );
    }
}
