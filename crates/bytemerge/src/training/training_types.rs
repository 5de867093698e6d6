//! # Training Types
use core::{fmt::Display, str::FromStr};

use crate::types::{Pair, TokenType};

/// How the trainer finds and applies each round's merge.
///
/// Both strategies produce identical vocabularies and merge lists.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum MergeStrategy {
    /// Recount every adjacent pair and rewrite the whole sequence each round.
    Rescan,

    /// Track pair positions incrementally and pick merges from a max-heap.
    #[default]
    Heap,
}

impl MergeStrategy {
    /// The lowercase name of the strategy.
    pub fn as_str(&self) -> &'static str {
        match self {
            MergeStrategy::Rescan => "rescan",
            MergeStrategy::Heap => "heap",
        }
    }
}

impl Display for MergeStrategy {
    fn fmt(
        &self,
        f: &mut core::fmt::Formatter<'_>,
    ) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MergeStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "rescan" => Ok(MergeStrategy::Rescan),
            "heap" => Ok(MergeStrategy::Heap),
            _ => Err(format!(
                "invalid merge strategy: {s:?} (expected \"rescan\" or \"heap\")"
            )),
        }
    }
}

/// A source of merges for the training loop.
///
/// A merger owns the working token sequence. Each call to
/// [`PairMerger::merge_next`] is one round.
pub trait PairMerger<T: TokenType> {
    /// Select the most frequent adjacent pair and replace every
    /// non-overlapping occurrence, left to right, with `replacement`.
    ///
    /// Ties on frequency go to the pair whose first occurrence is leftmost.
    ///
    /// ## Returns
    /// The merged pair and its frequency; or `None` if no adjacent pair remains.
    fn merge_next(
        &mut self,
        replacement: T,
    ) -> Option<(Pair<T>, usize)>;

    /// The current length of the working token sequence.
    fn token_count(&self) -> usize;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strategy_names() {
        assert_eq!(MergeStrategy::default(), MergeStrategy::Heap);

        for strategy in [MergeStrategy::Rescan, MergeStrategy::Heap] {
            assert_eq!(strategy.to_string().parse::<MergeStrategy>(), Ok(strategy));
        }

        assert!("greedy".parse::<MergeStrategy>().is_err());
    }
}
