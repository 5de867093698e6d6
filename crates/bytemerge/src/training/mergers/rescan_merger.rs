//! # Rescan Merger

use crate::{
    training::{
        PairMerger,
        utility::{PairCountTable, TokenSpanBuf},
    },
    types::{Pair, TokenType},
};

/// Recounts every pair, and rewrites the whole sequence, each round.
///
/// Each round costs ``O(len)``.
#[derive(Debug, Clone)]
pub struct RescanMerger<T: TokenType> {
    span: TokenSpanBuf<T>,
}

impl<T: TokenType> RescanMerger<T> {
    /// Create a merger over an initial token sequence.
    pub fn new(tokens: Vec<T>) -> Self {
        Self {
            span: tokens.into(),
        }
    }

    /// The current token sequence.
    pub fn tokens(&self) -> &[T] {
        self.span.tokens()
    }
}

impl<T: TokenType> PairMerger<T> for RescanMerger<T> {
    fn merge_next(
        &mut self,
        replacement: T,
    ) -> Option<(Pair<T>, usize)> {
        let (pair, count) = PairCountTable::from_tokens(self.span.tokens()).most_frequent()?;

        self.span.merge_pair(pair, replacement);
        Some((pair, count))
    }

    fn token_count(&self) -> usize {
        self.span.len()
    }
}
