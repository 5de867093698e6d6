//! # Token Vocabulary

use core::fmt::Debug;

use crate::{
    errors::{BMResult, BytemergeError},
    types::{Pair, TokenType},
    vocab::{SpanBuf, SpanTokenMap, TokenSpanMap},
};

/// A ``{ T <-> bytes }`` vocabulary.
///
/// Every assigned token has exactly one span. Tokens are only ever added.
///
/// The reverse ``{ bytes -> T }`` lookup keeps the first token inserted
/// for a span when two tokens carry equal spans; this can happen when two
/// different merge orders build the same bytes, or when a merge rebuilds
/// the bytes of a special token.
#[derive(Clone, Default, PartialEq)]
pub struct TokenVocab<T: TokenType> {
    token_spans: TokenSpanMap<T>,
    span_tokens: SpanTokenMap<T>,
}

impl<T: TokenType> Debug for TokenVocab<T> {
    fn fmt(
        &self,
        f: &mut core::fmt::Formatter<'_>,
    ) -> core::fmt::Result {
        f.debug_struct("TokenVocab")
            .field("len", &self.len())
            .field("max_token", &self.max_token())
            .finish()
    }
}

impl<T: TokenType> TokenVocab<T> {
    /// Create an empty vocabulary with room for `capacity` tokens.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            token_spans: TokenSpanMap::with_capacity_and_hasher(capacity, Default::default()),
            span_tokens: SpanTokenMap::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    /// Returns the number of tokens in the vocabulary.
    pub fn len(&self) -> usize {
        self.token_spans.len()
    }

    /// Returns true if the vocabulary is empty.
    pub fn is_empty(&self) -> bool {
        self.token_spans.is_empty()
    }

    /// Returns the number of distinct spans in the vocabulary.
    ///
    /// This is less than [`Self::len`] only when spans repeat.
    pub fn distinct_span_count(&self) -> usize {
        self.span_tokens.len()
    }

    /// Gets the highest token.
    pub fn max_token(&self) -> Option<T> {
        self.token_spans.keys().max().copied()
    }

    /// Returns a vector of all tokens, sorted.
    pub fn tokens(&self) -> Vec<T> {
        let mut tokens: Vec<T> = self.token_spans.keys().copied().collect();
        tokens.sort();
        tokens
    }

    /// Returns all ``(T, &[u8])`` entries, sorted by token.
    pub fn sorted_entries(&self) -> Vec<(T, &[u8])> {
        let mut entries: Vec<(T, &[u8])> = self
            .token_spans
            .iter()
            .map(|(&token, span)| (token, span.as_ref()))
            .collect();
        entries.sort_by_key(|&(token, _)| token);
        entries
    }

    /// Look up the span for a token.
    pub fn get_span(
        &self,
        token: T,
    ) -> Option<&[u8]> {
        self.token_spans.get(&token).map(|span| span.as_ref())
    }

    /// Look up the token for a span.
    pub fn get_token(
        &self,
        span: &[u8],
    ) -> Option<T> {
        self.span_tokens.get(span).copied()
    }

    /// Does the vocabulary contain this span?
    pub fn contains_span(
        &self,
        span: &[u8],
    ) -> bool {
        self.span_tokens.contains_key(span)
    }

    /// Does the vocabulary contain this token?
    pub fn contains_token(
        &self,
        token: T,
    ) -> bool {
        self.token_spans.contains_key(&token)
    }

    /// Assign `span` to `token`.
    ///
    /// ## Returns
    /// An error if `token` is already assigned.
    pub fn insert<S: Into<SpanBuf>>(
        &mut self,
        token: T,
        span: S,
    ) -> BMResult<()> {
        if self.token_spans.contains_key(&token) {
            return Err(BytemergeError::VocabConflict(format!(
                "token {token} is already assigned"
            )));
        }

        let span: SpanBuf = span.into();
        match self.span_tokens.get(&span) {
            Some(&existing) => {
                log::debug!("span {span:?} is shared by tokens {existing} and {token}");
            }
            None => {
                self.span_tokens.insert(span.clone(), token);
            }
        }
        self.token_spans.insert(token, span);

        Ok(())
    }

    /// Assign `token` to the concatenation of the spans of `pair`.
    ///
    /// ## Returns
    /// The new span; or an error if either half of `pair` is unassigned,
    /// or `token` is already assigned.
    pub fn insert_merge(
        &mut self,
        pair: Pair<T>,
        token: T,
    ) -> BMResult<SpanBuf> {
        let (a, b) = pair;
        let (Some(left), Some(right)) = (self.token_spans.get(&a), self.token_spans.get(&b)) else {
            return Err(BytemergeError::VocabConflict(format!(
                "merge ({a}, {b}) -> {token} references an unassigned token"
            )));
        };

        let mut buf = Vec::with_capacity(left.len() + right.len());
        buf.extend_from_slice(left);
        buf.extend_from_slice(right);
        let span: SpanBuf = buf.into();

        self.insert(token, span.clone())?;
        Ok(span)
    }

    /// Reduce the capacity of the internal maps to fit their contents.
    pub fn shrink_to_fit(&mut self) {
        self.token_spans.shrink_to_fit();
        self.span_tokens.shrink_to_fit();
    }
}
