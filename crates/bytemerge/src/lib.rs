//! # `bytemerge` Byte-Level BPE Vocabulary Training
//!
//! This crate learns a Byte-Pair-Encoding vocabulary from a raw byte corpus.
//!
//! Training proceeds in a single pipeline:
//! * special tokens are cut out of the corpus;
//! * the remaining distinct bytes are seeded as ids ``0..k``, in order of first appearance;
//! * the most frequent adjacent pair is merged into a new id, once per round;
//! * special tokens are placed at the top of the requested id range.
//!
//! See:
//! * [`training`] to configure and run a [`training::BytePairTrainer`].
//! * [`vocab`] for the resulting [`vocab::TokenVocab`] and [`vocab::MergeRecord`] list.
//!
//! ## Crate Features
//!
//! #### feature: ``ahash``
//!
//! Enabled by default.
//!
//! This swaps all ``HashMap``/``HashSet`` implementations for ``ahash``; which is a performance
//! win on many/(most?) modern CPUs.
//!
//! This is done by the ``types::CommonHash{*}`` type alias machinery.
//!
//! #### feature: ``foldhash``
//!
//! As ``ahash``, but with ``foldhash``. If both are enabled, ``ahash`` wins.
//!
//! #### feature: ``tracing``
//!
//! This enables a number of ``tracing`` instrumentation points.
//! This is only useful for timing tracing of the library itself.
//!
//! ## Training Example
//!
//! ```rust
//! use bytemerge::training::{BytePairTrainerOptions, MergeStrategy};
//!
//! let results = BytePairTrainerOptions::new(8)
//!     .with_special_tokens(["<|endoftext|>"])
//!     .with_strategy(MergeStrategy::Heap)
//!     .init::<u32>()
//!     .expect("invalid trainer options")
//!     .train(b"abacaba<|endoftext|>")
//!     .expect("training failed");
//!
//! assert_eq!(results.vocab.get_token(b"<|endoftext|>"), Some(7));
//! assert_eq!(results.merges[0].pair, (0, 1));
//! ```
#![warn(missing_docs, unused)]

pub mod errors;
pub mod training;
pub mod types;
pub mod vocab;

#[doc(inline)]
pub use errors::{BMResult, BytemergeError};
#[doc(inline)]
pub use training::{BytePairTrainer, BytePairTrainerOptions, MergeStrategy, TrainResults, train_vocab};
#[doc(inline)]
pub use types::{Pair, TokenType};
#[doc(inline)]
pub use vocab::{MergeRecord, TokenVocab};
