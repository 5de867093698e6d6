//! Validators for trainer configuration.
use crate::{
    errors::{BMResult, BytemergeError},
    types::TokenType,
};

/// Validates and returns the vocabulary size, ensuring every id below it fits in `T`.
pub fn try_vocab_size<T: TokenType>(vocab_size: usize) -> BMResult<usize> {
    if vocab_size > 0 && T::from_usize(vocab_size - 1).is_none() {
        Err(BytemergeError::VocabSizeOverflow { size: vocab_size })
    } else {
        Ok(vocab_size)
    }
}

/// Validates that `vocab_size` leaves room for `specials` special tokens.
pub fn try_special_budget(
    vocab_size: usize,
    specials: usize,
) -> BMResult<usize> {
    vocab_size
        .checked_sub(specials)
        .ok_or(BytemergeError::InvalidConfig {
            vocab_size,
            specials,
        })
}
