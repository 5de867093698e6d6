//! # Vocabulary Training
//!
//! Support for training byte-level BPE vocabularies.
//!
//! Training runs as a single pipeline over one corpus:
//! * [`utility::SpecialSplitter`] removes special token occurrences;
//!   the remaining text is concatenated into one byte stream.
//! * [`utility::ByteSeed`] assigns ids ``0..k`` to the distinct bytes,
//!   in order of first appearance.
//! * A [`PairMerger`] repeatedly merges the most frequent adjacent pair;
//!   ties go to the pair whose first occurrence is leftmost.
//! * Special tokens take the top ids of the requested range.
//!
//! The number of merge rounds is fixed before the loop starts:
//! ``vocab_size - special_count - seeded_size``. The loop stops early
//! when the corpus collapses to a single token; the vocabulary is then
//! smaller than requested, which is not an error.
//!
//! ## Training Example
//!
//! ```rust
//! use bytemerge::training::{BytePairTrainerOptions, MergeStrategy};
//!
//! type T = u32;
//!
//! let trainer = BytePairTrainerOptions::new(5)
//!     .with_strategy(MergeStrategy::Rescan)
//!     .init::<T>()
//!     .expect("invalid trainer options");
//!
//! let results = trainer.train(b"abacaba").expect("training failed");
//!
//! assert_eq!(results.vocab.get_span(3), Some(b"ab".as_slice()));
//! assert_eq!(results.vocab.get_span(4), Some(b"aba".as_slice()));
//! ```

pub mod mergers;
pub mod utility;

mod bpe_trainer;
mod training_types;

#[doc(inline)]
pub use bpe_trainer::{BytePairTrainer, BytePairTrainerOptions, TrainResults, train_vocab};
#[doc(inline)]
pub use training_types::{MergeStrategy, PairMerger};
