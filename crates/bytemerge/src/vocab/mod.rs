//! # Vocabulary
//!
//! The products of training:
//! * [`TokenVocab`] - a ``{ T <-> bytes }`` vocabulary,
//! * [`MergeRecord`] - one entry of the ordered merge list.
//!
//! Both are plain data; persisting them is left to the caller.

pub mod merge_record;
pub mod token_vocab;
pub mod validators;
pub mod vocab_types;

#[doc(inline)]
pub use merge_record::MergeRecord;
#[doc(inline)]
pub use token_vocab::TokenVocab;
#[doc(inline)]
pub use vocab_types::{SpanBuf, SpanTokenMap, TokenSpanMap};
