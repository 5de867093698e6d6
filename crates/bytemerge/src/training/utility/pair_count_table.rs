//! # Pair Count Table

use core::cmp::Reverse;

use crate::types::{CommonHashMap, Pair, TokenType};

/// Occurrence info for one [`Pair`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PairStats {
    /// The number of (overlapping) windows holding this pair.
    pub count: usize,

    /// The window index of the first occurrence.
    pub first_seen: usize,
}

/// A map from [`Pair`] to its [`PairStats`].
pub type PairStatsMap<T> = CommonHashMap<Pair<T>, PairStats>;

/// Adjacent pair frequencies for one token sequence.
///
/// Counts every overlapping window ``(tokens[i], tokens[i + 1])``,
/// so ``a a a`` counts ``(a, a)`` twice.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PairCountTable<T: TokenType> {
    pair_stats: PairStatsMap<T>,
}

impl<T: TokenType> PairCountTable<T> {
    /// Count the pairs of a token sequence.
    ///
    /// # Arguments
    /// * `tokens` - the sequence; fewer than 2 tokens yields an empty table.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(tokens)))]
    pub fn from_tokens(tokens: &[T]) -> Self {
        let mut pair_stats = PairStatsMap::with_capacity_and_hasher(
            tokens.len().saturating_sub(1).min(1 << 16),
            Default::default(),
        );

        for (first_seen, w) in tokens.windows(2).enumerate() {
            pair_stats
                .entry((w[0], w[1]))
                .or_insert(PairStats {
                    count: 0,
                    first_seen,
                })
                .count += 1;
        }

        Self { pair_stats }
    }

    /// The number of distinct pairs.
    pub fn len(&self) -> usize {
        self.pair_stats.len()
    }

    /// Is the table empty?
    pub fn is_empty(&self) -> bool {
        self.pair_stats.is_empty()
    }

    /// Get the count of a pair.
    pub fn get(
        &self,
        pair: Pair<T>,
    ) -> Option<usize> {
        self.pair_stats.get(&pair).map(|stats| stats.count)
    }

    /// Select the pair with the highest count.
    ///
    /// Ties go to the pair seen first; the `first_seen` index is unique
    /// per pair, so the result never depends on map iteration order.
    ///
    /// ## Returns
    /// The pair and its count; or `None` if the table is empty.
    pub fn most_frequent(&self) -> Option<(Pair<T>, usize)> {
        self.pair_stats
            .iter()
            .max_by_key(|&(_, stats)| (stats.count, Reverse(stats.first_seen)))
            .map(|(&pair, stats)| (pair, stats.count))
    }
}
