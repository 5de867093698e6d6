//! # Vocab Trainer

use core::marker::PhantomData;

use crate::{
    errors::BMResult,
    training::{
        MergeStrategy,
        PairMerger,
        mergers::{HeapMerger, RescanMerger},
        utility::{ByteSeed, SpecialSplitter},
    },
    types::{TokenType, token_from_usize},
    vocab::{
        MergeRecord,
        TokenVocab,
        validators::{try_special_budget, try_vocab_size},
    },
};

/// Options for [`BytePairTrainer`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BytePairTrainerOptions {
    /// The target vocab size, special tokens included.
    pub vocab_size: usize,

    /// The special tokens, in id order.
    pub special_tokens: Vec<Vec<u8>>,

    /// The merge loop implementation.
    pub strategy: MergeStrategy,
}

impl BytePairTrainerOptions {
    /// Create new options.
    ///
    /// ## Arguments
    /// * `vocab_size` - The target vocabulary size.
    ///
    /// ## Returns
    /// A new `BytePairTrainerOptions` instance, with no special tokens.
    pub fn new(vocab_size: usize) -> Self {
        Self {
            vocab_size,
            special_tokens: Vec::new(),
            strategy: MergeStrategy::default(),
        }
    }

    /// Sets the vocab size.
    pub fn with_vocab_size(
        self,
        vocab_size: usize,
    ) -> Self {
        Self { vocab_size, ..self }
    }

    /// Sets the special tokens.
    ///
    /// ## Arguments
    /// * `special_tokens` - The special tokens; they receive the top
    ///   ``special_tokens.len()`` ids, in this order.
    pub fn with_special_tokens<I, S>(
        self,
        special_tokens: I,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<[u8]>,
    {
        let special_tokens = special_tokens
            .into_iter()
            .map(|s| s.as_ref().to_vec())
            .collect();
        Self {
            special_tokens,
            ..self
        }
    }

    /// Sets the merge strategy.
    pub fn with_strategy(
        self,
        strategy: MergeStrategy,
    ) -> Self {
        Self { strategy, ..self }
    }

    /// Initializes a [`BytePairTrainer`] from these options.
    ///
    /// ## Returns
    /// An error if the vocab size cannot hold the special tokens,
    /// does not fit in `T`, or the special tokens are empty or repeated.
    pub fn init<T: TokenType>(self) -> BMResult<BytePairTrainer<T>> {
        BytePairTrainer::new(self)
    }
}

/// Basic binary pair train results.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainResults<T: TokenType> {
    /// The trained ``{ T <-> bytes }`` vocabulary.
    pub vocab: TokenVocab<T>,

    /// The learned merges, in the order they were applied.
    pub merges: Vec<MergeRecord<T>>,

    /// The number of byte tokens seeded before merging.
    pub seeded_size: usize,

    /// The merge budget fixed before the merge loop ran.
    pub planned_merges: usize,

    /// The requested vocab size.
    pub requested_size: usize,
}

impl<T: TokenType> TrainResults<T> {
    /// The number of tokens in the trained vocabulary.
    pub fn vocab_size(&self) -> usize {
        self.vocab.len()
    }

    /// Did the corpus run out of pairs before the merge budget was spent?
    pub fn is_underfilled(&self) -> bool {
        self.merges.len() < self.planned_merges
    }
}

/// Trainer for learning byte pair encodings.
///
/// # Parameters
/// * `T` - the token type of the trained vocabulary.
#[derive(Debug, Clone)]
pub struct BytePairTrainer<T: TokenType> {
    /// Trainer options.
    pub options: BytePairTrainerOptions,

    splitter: SpecialSplitter,
    _marker: PhantomData<T>,
}

impl<T: TokenType> BytePairTrainer<T> {
    /// Initializes a [`BytePairTrainer`].
    ///
    /// ## Arguments
    /// * `options` - The trainer options.
    ///
    /// ## Returns
    /// A new `BytePairTrainer` instance; or an error for invalid options.
    pub fn new(options: BytePairTrainerOptions) -> BMResult<Self> {
        try_vocab_size::<T>(options.vocab_size)?;
        try_special_budget(options.vocab_size, options.special_tokens.len())?;
        let splitter = SpecialSplitter::new(&options.special_tokens)?;

        Ok(Self {
            options,
            splitter,
            _marker: PhantomData,
        })
    }

    /// The special token splitter.
    pub fn splitter(&self) -> &SpecialSplitter {
        &self.splitter
    }

    /// Trains a [`TokenVocab<T>`] and merge list on `corpus`.
    ///
    /// The results will contain:
    /// * ids ``0..k`` for the ``k`` distinct non-special bytes, in order of first appearance,
    /// * one id per merge, following the byte ids,
    /// * the special tokens, at the top of the requested range.
    ///
    /// ## Arguments
    /// * `corpus` - the training bytes.
    ///
    /// ## Returns
    /// A `Result` containing the `TrainResults<T>` or an error.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, corpus)))]
    pub fn train(
        &self,
        corpus: &[u8],
    ) -> BMResult<TrainResults<T>> {
        let vocab_size = self.options.vocab_size;
        let specials = self.splitter.specials();
        let nonspecial_size = try_special_budget(vocab_size, specials.len())?;

        let stream = self.splitter.strip(corpus);
        log::info!(
            "Starting BPE training: {} corpus bytes, {} after removing special tokens",
            corpus.len(),
            stream.len()
        );

        let seed: ByteSeed<T> = ByteSeed::from_bytes(&stream)?;
        let seeded_size = seed.len();
        let planned_merges = nonspecial_size.saturating_sub(seeded_size);
        log::info!(
            "Seeded {} byte tokens: {} merges to compute",
            seeded_size,
            planned_merges
        );

        let mut vocab: TokenVocab<T> = TokenVocab::with_capacity(
            seeded_size + planned_merges.min(stream.len()) + specials.len(),
        );
        for (idx, &b) in seed.seen_bytes().iter().enumerate() {
            vocab.insert(token_from_usize(idx)?, vec![b])?;
        }

        // Specials sit at the top of the requested range; when the byte
        // seed alone overruns that range, they follow the byte tokens.
        let special_base = nonspecial_size.max(seeded_size);
        if special_base != nonspecial_size {
            log::warn!(
                "Vocab size {} is too small for {} byte tokens and {} special tokens; special tokens start at {}",
                vocab_size,
                seeded_size,
                specials.len(),
                special_base
            );
        }
        for (offset, special) in specials.iter().enumerate() {
            vocab.insert(token_from_usize(special_base + offset)?, special.as_slice())?;
        }

        let tokens = seed.into_tokens();
        let merges = match self.options.strategy {
            MergeStrategy::Rescan => run_merge_loop(
                &mut RescanMerger::new(tokens),
                &mut vocab,
                seeded_size,
                planned_merges,
            )?,
            MergeStrategy::Heap => run_merge_loop(
                &mut HeapMerger::new(tokens),
                &mut vocab,
                seeded_size,
                planned_merges,
            )?,
        };

        vocab.shrink_to_fit();

        log::info!(
            "Finished training: {} merges completed, vocab size {}",
            merges.len(),
            vocab.len()
        );

        Ok(TrainResults {
            vocab,
            merges,
            seeded_size,
            planned_merges,
            requested_size: vocab_size,
        })
    }
}

/// Run up to `planned_merges` rounds, stopping early once no pair remains.
fn run_merge_loop<T, M>(
    merger: &mut M,
    vocab: &mut TokenVocab<T>,
    first_token: usize,
    planned_merges: usize,
) -> BMResult<Vec<MergeRecord<T>>>
where
    T: TokenType,
    M: PairMerger<T>,
{
    let mut merges: Vec<MergeRecord<T>> =
        Vec::with_capacity(planned_merges.min(merger.token_count()));
    let mut last_log_percent = 0;

    for round in 0..planned_merges {
        let token: T = token_from_usize(first_token + round)?;

        let Some((pair, count)) = merger.merge_next(token) else {
            log::info!(
                "No adjacent pairs remain after {} of {} merges",
                round,
                planned_merges
            );
            break;
        };

        vocab.insert_merge(pair, token)?;
        merges.push(MergeRecord::new(pair, token));

        // Log progress every 1%
        let current_percent = ((round + 1) * 100) / planned_merges;
        if current_percent > last_log_percent {
            log::debug!(
                "Progress: {}% ({}/{} merges) - Last merge: {:?} -> {:?} (frequency: {})",
                current_percent,
                round + 1,
                planned_merges,
                pair,
                token,
                count
            );
            last_log_percent = current_percent;
        }
    }

    Ok(merges)
}

/// Train a vocabulary with the default [`MergeStrategy`].
///
/// ## Arguments
/// * `corpus` - the training bytes.
/// * `vocab_size` - the target vocab size, special tokens included.
/// * `special_tokens` - the special tokens, in id order.
pub fn train_vocab<T, S>(
    corpus: &[u8],
    vocab_size: usize,
    special_tokens: &[S],
) -> BMResult<TrainResults<T>>
where
    T: TokenType,
    S: AsRef<[u8]>,
{
    BytePairTrainerOptions::new(vocab_size)
        .with_special_tokens(special_tokens)
        .init::<T>()?
        .train(corpus)
}
