//! # Merge Loop Implementations
//!
//! Each [`crate::training::PairMerger`] owns the working token sequence
//! and performs one merge round per call.

mod heap_merger;
mod rescan_merger;

#[doc(inline)]
pub use heap_merger::{HeapMerger, MergeJob};
#[doc(inline)]
pub use rescan_merger::RescanMerger;
