//! # Token Chain

use crate::types::{Pair, TokenType};

const NIL: usize = usize::MAX;

/// A token sequence as a doubly-linked list over a fixed arena.
///
/// Nodes are addressed by their position in the original sequence.
/// Merging keeps the left node and unlinks the right node, so node
/// positions stay unique and keep their relative order; the node with
/// the smaller position is always further left.
#[derive(Debug, Clone)]
pub struct TokenChain<T: TokenType> {
    tokens: Vec<T>,
    prev: Vec<usize>,
    next: Vec<usize>,
    alive: Vec<bool>,
    live_len: usize,
}

impl<T: TokenType> TokenChain<T> {
    /// Build a chain over `tokens`.
    pub fn from_tokens(tokens: Vec<T>) -> Self {
        let n = tokens.len();
        Self {
            prev: (0..n).map(|i| if i == 0 { NIL } else { i - 1 }).collect(),
            next: (0..n).map(|i| if i + 1 == n { NIL } else { i + 1 }).collect(),
            alive: vec![true; n],
            live_len: n,
            tokens,
        }
    }

    /// The number of live tokens.
    pub fn len(&self) -> usize {
        self.live_len
    }

    /// Is the chain empty?
    pub fn is_empty(&self) -> bool {
        self.live_len == 0
    }

    /// The live token at `pos`.
    pub fn token(
        &self,
        pos: usize,
    ) -> Option<T> {
        match self.alive.get(pos) {
            Some(true) => Some(self.tokens[pos]),
            _ => None,
        }
    }

    /// The position of the live node after `pos`.
    pub fn next_of(
        &self,
        pos: usize,
    ) -> Option<usize> {
        self.token(pos)?;
        match self.next[pos] {
            NIL => None,
            n => Some(n),
        }
    }

    /// The pair starting at `pos`, if `pos` is live and has a successor.
    pub fn pair_at(
        &self,
        pos: usize,
    ) -> Option<Pair<T>> {
        let next = self.next_of(pos)?;
        Some((self.tokens[pos], self.tokens[next]))
    }

    /// Iterate over ``(pos, pair)`` for every adjacent pair, left to right.
    pub fn pairs(&self) -> impl Iterator<Item = (usize, Pair<T>)> + '_ {
        let mut pos = if self.is_empty() { NIL } else { 0 };
        core::iter::from_fn(move || {
            while pos != NIL {
                let current = pos;
                pos = self.next[current];
                if let Some(pair) = self.pair_at(current) {
                    return Some((current, pair));
                }
            }
            None
        })
    }

    /// Collect the live tokens, left to right.
    pub fn to_tokens(&self) -> Vec<T> {
        let mut tokens = Vec::with_capacity(self.live_len);
        let mut pos = if self.is_empty() { NIL } else { 0 };
        while pos != NIL {
            tokens.push(self.tokens[pos]);
            pos = self.next[pos];
        }
        tokens
    }

    /// Replace the pair at `pos` with `replacement`.
    ///
    /// The caller must check [`Self::pair_at`] first.
    ///
    /// # Arguments
    /// * `pos` - the left node of the pair; it keeps `replacement`.
    /// * `replacement` - the merged token.
    /// * `on_delta` - invoked for each changed window as `(left_pos, pair, delta)`;
    ///   `-1` for a removed window, `+1` for an added window.
    pub fn merge_at<F>(
        &mut self,
        pos: usize,
        replacement: T,
        on_delta: &mut F,
    ) where
        F: FnMut(usize, Pair<T>, i32),
    {
        let right = self.next[pos];
        let (a, b) = (self.tokens[pos], self.tokens[right]);
        let before = self.prev[pos];
        let after = self.next[right];

        if before != NIL {
            on_delta(before, (self.tokens[before], a), -1);
        }
        on_delta(pos, (a, b), -1);
        if after != NIL {
            on_delta(right, (b, self.tokens[after]), -1);
        }

        self.tokens[pos] = replacement;
        self.alive[right] = false;
        self.next[pos] = after;
        if after != NIL {
            self.prev[after] = pos;
        }
        self.live_len -= 1;

        if before != NIL {
            on_delta(before, (self.tokens[before], replacement), 1);
        }
        if after != NIL {
            on_delta(pos, (replacement, self.tokens[after]), 1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_tokens() {
        let chain = TokenChain::<u32>::from_tokens(vec![1, 2, 3]);
        assert_eq!(chain.len(), 3);
        assert_eq!(chain.to_tokens(), vec![1, 2, 3]);
        assert_eq!(chain.pair_at(0), Some((1, 2)));
        assert_eq!(chain.pair_at(2), None);
        assert_eq!(chain.next_of(2), None);
        assert_eq!(
            chain.pairs().collect::<Vec<_>>(),
            vec![(0, (1, 2)), (1, (2, 3))]
        );
    }

    #[test]
    fn test_empty() {
        let chain = TokenChain::<u32>::from_tokens(vec![]);
        assert!(chain.is_empty());
        assert_eq!(chain.pairs().count(), 0);
        assert!(chain.to_tokens().is_empty());
    }

    #[test]
    fn test_merge_at() {
        let mut chain = TokenChain::<u32>::from_tokens(vec![1, 2, 3, 4]);
        let mut deltas = vec![];

        chain.merge_at(1, 9, &mut |pos, pair, delta| deltas.push((pos, pair, delta)));

        assert_eq!(chain.to_tokens(), vec![1, 9, 4]);
        assert_eq!(chain.len(), 3);
        assert_eq!(chain.token(2), None);
        assert_eq!(chain.next_of(1), Some(3));
        assert_eq!(chain.next_of(2), None);

        assert_eq!(
            deltas,
            vec![
                (0, (1, 2), -1),
                (1, (2, 3), -1),
                (2, (3, 4), -1),
                (0, (1, 9), 1),
                (1, (9, 4), 1),
            ]
        );

        assert_eq!(
            chain.pairs().collect::<Vec<_>>(),
            vec![(0, (1, 9)), (1, (9, 4))]
        );
    }

    #[test]
    fn test_merge_at_edges() {
        let mut chain = TokenChain::<u32>::from_tokens(vec![5, 5]);
        let mut deltas = vec![];

        chain.merge_at(0, 6, &mut |pos, pair, delta| deltas.push((pos, pair, delta)));

        assert_eq!(chain.to_tokens(), vec![6]);
        assert_eq!(deltas, vec![(0, (5, 5), -1)]);
        assert_eq!(chain.pair_at(0), None);
    }
}
