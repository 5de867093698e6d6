//! # Heap Merger

use core::cmp::{Ordering, Reverse};
use std::collections::BTreeSet;

use dary_heap::OctonaryHeap;

use crate::{
    training::{PairMerger, utility::TokenChain},
    types::{CommonHashMap, CommonHashSet, Pair, TokenType},
};

/// A map from [`Pair`] to the chain positions where it starts.
pub type PairPositionMap<T> = CommonHashMap<Pair<T>, BTreeSet<usize>>;

/// Info about a [`Pair`] that could be merged.
#[derive(Debug, Eq)]
pub struct MergeJob<T: TokenType> {
    /// The number of windows holding this pair.
    pub count: usize,

    /// The chain position of the leftmost window.
    pub first: usize,

    /// The pair to merge.
    pub pair: Pair<T>,
}

impl<T: TokenType> MergeJob<T> {
    /// The job key.
    ///
    /// Max-heap by count; tie-break to the leftmost first occurrence.
    pub fn heap_key(&self) -> (usize, Reverse<usize>, Pair<T>) {
        (self.count, Reverse(self.first), self.pair)
    }
}

impl<T: TokenType> PartialEq for MergeJob<T> {
    fn eq(
        &self,
        other: &Self,
    ) -> bool {
        self.heap_key() == other.heap_key()
    }
}

impl<T: TokenType> PartialOrd for MergeJob<T> {
    fn partial_cmp(
        &self,
        other: &Self,
    ) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: TokenType> Ord for MergeJob<T> {
    fn cmp(
        &self,
        other: &Self,
    ) -> Ordering {
        self.heap_key().cmp(&other.heap_key())
    }
}

/// Tracks pair positions incrementally and picks merges from a max-heap.
///
/// Heap entries are refreshed lazily: a popped job whose count or first
/// position no longer matches the position index is pushed back with
/// the current values. Entries only go stale by shrinking, and every pair
/// that grows is pushed fresh, so the heap top is always correct once
/// it matches the index.
#[derive(Debug)]
pub struct HeapMerger<T: TokenType> {
    chain: TokenChain<T>,
    positions: PairPositionMap<T>,
    heap: OctonaryHeap<MergeJob<T>>,
}

impl<T: TokenType> HeapMerger<T> {
    /// Create a merger over an initial token sequence.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(tokens)))]
    pub fn new(tokens: Vec<T>) -> Self {
        let chain = TokenChain::from_tokens(tokens);

        let mut positions: PairPositionMap<T> = Default::default();
        for (pos, pair) in chain.pairs() {
            positions.entry(pair).or_default().insert(pos);
        }

        log::debug!("Building heap with {} unique pairs", positions.len());
        let mut heap = OctonaryHeap::with_capacity(positions.len());
        for (&pair, pair_positions) in positions.iter() {
            if let Some(job) = Self::job_for(pair, pair_positions) {
                heap.push(job);
            }
        }

        Self {
            chain,
            positions,
            heap,
        }
    }

    /// The current token sequence.
    pub fn tokens(&self) -> Vec<T> {
        self.chain.to_tokens()
    }

    fn job_for(
        pair: Pair<T>,
        pair_positions: &BTreeSet<usize>,
    ) -> Option<MergeJob<T>> {
        let &first = pair_positions.first()?;
        Some(MergeJob {
            count: pair_positions.len(),
            first,
            pair,
        })
    }

    /// Pop until the heap top agrees with the position index.
    fn pop_current_job(&mut self) -> Option<MergeJob<T>> {
        while let Some(job) = self.heap.pop() {
            let Some(pair_positions) = self.positions.get(&job.pair) else {
                // No live windows.
                continue;
            };
            let Some(current) = Self::job_for(job.pair, pair_positions) else {
                continue;
            };

            if current.heap_key() == job.heap_key() {
                return Some(job);
            }

            // Lazy refresh the job.
            self.heap.push(current);
        }
        None
    }
}

impl<T: TokenType> PairMerger<T> for HeapMerger<T> {
    fn merge_next(
        &mut self,
        replacement: T,
    ) -> Option<(Pair<T>, usize)> {
        let job = self.pop_current_job()?;

        let Self {
            chain,
            positions,
            heap,
        } = self;

        let occurrences = positions.remove(&job.pair).unwrap_or_default();
        let mut grown: CommonHashSet<Pair<T>> = Default::default();

        // Ascending positions are left-to-right; a window consumed by
        // the previous merge (``a a a``) no longer holds the pair.
        for pos in occurrences {
            if chain.pair_at(pos) != Some(job.pair) {
                continue;
            }

            chain.merge_at(pos, replacement, &mut |left, pair, delta| {
                if delta < 0 {
                    let emptied = match positions.get_mut(&pair) {
                        Some(pair_positions) => {
                            pair_positions.remove(&left);
                            pair_positions.is_empty()
                        }
                        None => false,
                    };
                    if emptied {
                        positions.remove(&pair);
                    }
                } else {
                    positions.entry(pair).or_default().insert(left);
                    grown.insert(pair);
                }
            });
        }

        // Every grown pair holds `replacement`, and needs a fresh heap entry.
        for pair in grown {
            if let Some(job) = positions.get(&pair).and_then(|p| Self::job_for(pair, p)) {
                heap.push(job);
            }
        }

        Some((job.pair, job.count))
    }

    fn token_count(&self) -> usize {
        self.chain.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::training::mergers::RescanMerger;

    fn merge_all<M: PairMerger<u32>>(
        merger: &mut M,
        first_token: u32,
    ) -> Vec<(Pair<u32>, usize)> {
        let mut merges = vec![];
        let mut token = first_token;
        while let Some(merge) = merger.merge_next(token) {
            merges.push(merge);
            token += 1;
        }
        merges
    }

    #[test]
    fn test_merge_job_heap_key() {
        let job1: MergeJob<u32> = MergeJob {
            pair: (1, 2),
            count: 2,
            first: 5,
        };
        let job2 = MergeJob {
            pair: (2, 1),
            count: 1,
            first: 0,
        };
        let job3 = MergeJob {
            pair: (0, 0),
            count: 2,
            first: 3,
        };

        assert_eq!(&job1, &job1);
        assert_ne!(&job1, &job2);

        assert_eq!(job1.heap_key(), (2, Reverse(5), (1, 2)));

        // Count dominates.
        assert_eq!(job1.cmp(&job2), Ordering::Greater);

        // Then the leftmost first occurrence.
        assert_eq!(job3.cmp(&job1), Ordering::Greater);
        assert_eq!(job1.partial_cmp(&job3), Some(Ordering::Less));
    }

    #[test]
    fn test_heap_rounds() {
        // "abacaba"
        let mut merger = HeapMerger::<u32>::new(vec![0, 1, 0, 2, 0, 1, 0]);

        assert_eq!(merger.merge_next(3), Some(((0, 1), 2)));
        assert_eq!(merger.tokens(), vec![3, 0, 2, 3, 0]);

        assert_eq!(merger.merge_next(4), Some(((3, 0), 2)));
        assert_eq!(merger.tokens(), vec![4, 2, 4]);
        assert_eq!(merger.token_count(), 3);
    }

    #[test]
    fn test_heap_repeated_token_runs() {
        let mut merger = HeapMerger::<u32>::new(vec![0; 5]);

        assert_eq!(merger.merge_next(1), Some(((0, 0), 4)));
        assert_eq!(merger.tokens(), vec![1, 1, 0]);

        assert_eq!(merger.merge_next(2), Some(((1, 1), 1)));
        assert_eq!(merger.tokens(), vec![2, 0]);

        assert_eq!(merger.merge_next(3), Some(((2, 0), 1)));
        assert_eq!(merger.merge_next(4), None);
    }

    #[test]
    fn test_heap_matches_rescan() {
        let samples: [&[u32]; 5] = [
            &[0, 1, 2, 3, 4, 5, 6],
            &[0, 1, 0, 1, 0, 1, 1, 0, 0, 0, 1],
            &[3, 3, 3, 3, 1, 3, 3, 1, 3, 3, 3],
            &[0, 1, 2, 0, 1, 2, 1, 2, 0, 2, 0, 1, 2, 2, 2, 0],
            &[],
        ];

        for tokens in samples {
            let mut heap = HeapMerger::new(tokens.to_vec());
            let mut rescan = RescanMerger::new(tokens.to_vec());

            assert_eq!(merge_all(&mut heap, 10), merge_all(&mut rescan, 10));
            assert_eq!(heap.tokens(), rescan.tokens());
        }
    }
}
