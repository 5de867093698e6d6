//! # Error Types

/// Errors from bytemerge operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BytemergeError {
    /// The vocab size cannot hold the special tokens.
    #[error("vocab size ({vocab_size}) is smaller than the number of special tokens ({specials})")]
    InvalidConfig {
        /// The requested vocab size.
        vocab_size: usize,

        /// The number of special tokens.
        specials: usize,
    },

    /// Vocab size exceeds the capacity of the target token type.
    #[error("vocab size ({size}) exceeds token type capacity")]
    VocabSizeOverflow {
        /// The vocab size that exceeded the capacity.
        size: usize,
    },

    /// A special token has no bytes.
    #[error("special token #{index} is empty")]
    EmptySpecialToken {
        /// The position of the token in the special token list.
        index: usize,
    },

    /// A special token appears more than once.
    #[error("special token #{index} duplicates an earlier special token")]
    DuplicateSpecialToken {
        /// The position of the repeated token in the special token list.
        index: usize,
    },

    /// Token value out of range for the target type.
    #[error("token out of range")]
    TokenOutOfRange,

    /// Vocabulary data is inconsistent.
    #[error("{0}")]
    VocabConflict(String),

    /// Error from an external component.
    #[error("{0}")]
    External(String),
}

/// Result type for bytemerge operations.
pub type BMResult<T> = core::result::Result<T, BytemergeError>;
