//! # Special Token Splitter

use core::ops::Range;

use aho_corasick::{AhoCorasick, MatchKind};

use crate::{
    errors::{BMResult, BytemergeError},
    types::CommonHashSet,
};

/// A position-ordered span produced by [`SpecialSplitter::split`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum SplitSpan {
    /// Ordinary corpus bytes.
    Text(Range<usize>),

    /// An occurrence of a special token.
    Special {
        /// The position of the token in the special token list.
        index: usize,

        /// The byte range of the occurrence.
        range: Range<usize>,
    },
}

impl From<SplitSpan> for Range<usize> {
    fn from(span: SplitSpan) -> Self {
        match span {
            SplitSpan::Text(range) => range,
            SplitSpan::Special { range, .. } => range,
        }
    }
}

/// Cuts special token occurrences out of a corpus.
///
/// Matching is a single leftmost-longest pass over the union of all
/// special tokens: the earliest match wins, and among matches starting
/// at the same offset the longest wins.
#[derive(Clone, Debug)]
pub struct SpecialSplitter {
    specials: Vec<Vec<u8>>,
    matcher: Option<AhoCorasick>,
}

impl SpecialSplitter {
    /// Build a splitter for an ordered list of special tokens.
    ///
    /// ## Returns
    /// An error if any token is empty or repeated.
    pub fn new<S: AsRef<[u8]>>(specials: &[S]) -> BMResult<Self> {
        let mut seen: CommonHashSet<&[u8]> = Default::default();
        for (index, special) in specials.iter().enumerate() {
            let special = special.as_ref();
            if special.is_empty() {
                return Err(BytemergeError::EmptySpecialToken { index });
            }
            if !seen.insert(special) {
                return Err(BytemergeError::DuplicateSpecialToken { index });
            }
        }

        let specials: Vec<Vec<u8>> = specials.iter().map(|s| s.as_ref().to_vec()).collect();

        let matcher = if specials.is_empty() {
            None
        } else {
            Some(
                AhoCorasick::builder()
                    .match_kind(MatchKind::LeftmostLongest)
                    .build(&specials)
                    .map_err(|e| BytemergeError::External(e.to_string()))?,
            )
        };

        Ok(Self { specials, matcher })
    }

    /// The special tokens, in input order.
    pub fn specials(&self) -> &[Vec<u8>] {
        &self.specials
    }

    /// The number of special tokens.
    pub fn len(&self) -> usize {
        self.specials.len()
    }

    /// Are there no special tokens?
    pub fn is_empty(&self) -> bool {
        self.specials.is_empty()
    }

    /// Split `corpus` into position-ordered text and special spans.
    ///
    /// Empty text spans are omitted.
    pub fn split(
        &self,
        corpus: &[u8],
    ) -> Vec<SplitSpan> {
        let mut spans = Vec::new();
        let mut last = 0;

        if let Some(matcher) = &self.matcher {
            for mat in matcher.find_iter(corpus) {
                if mat.start() > last {
                    spans.push(SplitSpan::Text(last..mat.start()));
                }
                spans.push(SplitSpan::Special {
                    index: mat.pattern().as_usize(),
                    range: mat.range(),
                });
                last = mat.end();
            }
        }

        if last < corpus.len() {
            spans.push(SplitSpan::Text(last..corpus.len()));
        }

        spans
    }

    /// Remove every special token occurrence from `corpus`.
    ///
    /// No separator is left behind: the text on either side of a removed
    /// occurrence becomes adjacent, so ``a<|endoftext|>b`` strips to ``ab``
    /// and training may merge across it.
    ///
    /// ## Returns
    /// The concatenation of the remaining text spans.
    pub fn strip(
        &self,
        corpus: &[u8],
    ) -> Vec<u8> {
        if self.matcher.is_none() {
            return corpus.to_vec();
        }

        let mut stripped = Vec::with_capacity(corpus.len());
        for span in self.split(corpus) {
            if let SplitSpan::Text(range) = span {
                stripped.extend_from_slice(&corpus[range]);
            }
        }
        stripped
    }
}
