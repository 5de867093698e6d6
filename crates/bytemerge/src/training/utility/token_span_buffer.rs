//! # Token Span Buffer

use crate::types::{Pair, TokenType};

/// A mutable token sequence.
///
/// Iteratively rewritten during BPE vocabulary training.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TokenSpanBuf<T: TokenType> {
    tokens: Vec<T>,
}

impl<T: TokenType> From<Vec<T>> for TokenSpanBuf<T> {
    fn from(tokens: Vec<T>) -> Self {
        Self { tokens }
    }
}

impl<T: TokenType> TokenSpanBuf<T> {
    /// View the tokens as a slice.
    pub fn tokens(&self) -> &[T] {
        &self.tokens
    }

    /// Get the length of the span.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Is this span empty?
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Merge all non-overlapping occurrences of `pair -> replacement`.
    ///
    /// Scans left to right; a match consumes both positions,
    /// so ``a a a`` merges only the leading ``(a, a)``.
    ///
    /// # Arguments
    /// * `pair` - the pair to merge.
    /// * `replacement` - the token to replace `pair` with.
    ///
    /// # Returns
    /// The number of replacements made.
    pub fn merge_pair(
        &mut self,
        pair: Pair<T>,
        replacement: T,
    ) -> usize {
        let n = self.tokens.len();

        if n < 2 {
            // Single-token spans have no pairs to merge.
            return 0;
        }

        let mut new_tokens: Vec<T> = Vec::with_capacity(n);
        let mut merged = 0;

        let mut i = 0;
        while i < n {
            let current = self.tokens[i];

            if i + 1 < n && pair == (current, self.tokens[i + 1]) {
                new_tokens.push(replacement);
                merged += 1;

                // Skip 'a' and 'b'.
                i += 2;
            } else {
                new_tokens.push(current);
                i += 1;
            }
        }

        self.tokens = new_tokens;
        merged
    }
}
