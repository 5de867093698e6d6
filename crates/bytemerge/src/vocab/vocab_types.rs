//! # Vocabulary Types

use std::sync::Arc;

use crate::types::CommonHashMap;

/// An immutable, shared byte span.
///
/// Merged spans are built by concatenating two existing spans;
/// a span is never modified once assigned to a token.
pub type SpanBuf = Arc<[u8]>;

/// `{ T -> SpanBuf }` map.
///
/// ## Style Hints
/// Instance names should prefer `token_spans`, or `token_span_map`.
pub type TokenSpanMap<T> = CommonHashMap<T, SpanBuf>;

/// `{ SpanBuf -> T }` map.
///
/// ## Style Hints
/// Instance names should prefer `span_tokens`, or `span_token_map`.
pub type SpanTokenMap<T> = CommonHashMap<SpanBuf, T>;
