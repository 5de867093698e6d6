//! # Merge Records

use core::fmt::Display;

use crate::types::{Pair, TokenType};

/// One learned merge: ``pair -> token``.
///
/// The merge list is ordered; position in the list is the merge priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MergeRecord<T: TokenType> {
    /// The adjacent pair that was merged.
    pub pair: Pair<T>,

    /// The token allocated for the pair.
    pub token: T,
}

impl<T: TokenType> MergeRecord<T> {
    /// Create a new merge record.
    pub fn new(
        pair: Pair<T>,
        token: T,
    ) -> Self {
        Self { pair, token }
    }
}

impl<T: TokenType> Display for MergeRecord<T> {
    fn fmt(
        &self,
        f: &mut core::fmt::Formatter<'_>,
    ) -> core::fmt::Result {
        write!(f, "{} {} -> {}", self.pair.0, self.pair.1, self.token)
    }
}
