//! # Trainer Implementation Utilities

mod byte_seed;
mod pair_count_table;
mod special_splitter;
mod token_chain;
mod token_span_buffer;

#[doc(inline)]
pub use byte_seed::ByteSeed;
#[doc(inline)]
pub use pair_count_table::{PairCountTable, PairStats, PairStatsMap};
#[doc(inline)]
pub use special_splitter::{SpecialSplitter, SplitSpan};
#[doc(inline)]
pub use token_chain::TokenChain;
#[doc(inline)]
pub use token_span_buffer::TokenSpanBuf;
