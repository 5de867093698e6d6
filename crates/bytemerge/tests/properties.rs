use bytemerge::{BytePairTrainerOptions, MergeStrategy, TrainResults};
use proptest::prelude::*;

const SPECIALS: [&str; 2] = ["<|eot|>", "<|pad|>"];

fn train(
    corpus: &[u8],
    vocab_size: usize,
    specials: &[&str],
    strategy: MergeStrategy,
) -> TrainResults<u32> {
    BytePairTrainerOptions::new(vocab_size)
        .with_special_tokens(specials)
        .with_strategy(strategy)
        .init::<u32>()
        .unwrap()
        .train(corpus)
        .unwrap()
}

/// Small-alphabet text, with special tokens mixed in.
fn corpus_strategy() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(
        prop_oneof![
            8 => "[abc ]{1,6}".prop_map(String::into_bytes),
            1 => Just(SPECIALS[0].as_bytes().to_vec()),
            1 => Just(SPECIALS[1].as_bytes().to_vec()),
        ],
        0..24,
    )
    .prop_map(|chunks| chunks.concat())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn proptest_training_is_deterministic(
        corpus in corpus_strategy(),
        vocab_size in 8usize..40,
    ) {
        let first = train(&corpus, vocab_size, &SPECIALS, MergeStrategy::Heap);
        let second = train(&corpus, vocab_size, &SPECIALS, MergeStrategy::Heap);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn proptest_heap_matches_rescan(
        corpus in corpus_strategy(),
        vocab_size in 8usize..40,
    ) {
        let heap = train(&corpus, vocab_size, &SPECIALS, MergeStrategy::Heap);
        let rescan = train(&corpus, vocab_size, &SPECIALS, MergeStrategy::Rescan);
        prop_assert_eq!(heap, rescan);
    }

    #[test]
    fn proptest_ids_are_dense_without_specials(
        corpus in prop::collection::vec(any::<u8>(), 0..200),
        vocab_size in 0usize..300,
    ) {
        let results = train(&corpus, vocab_size, &[], MergeStrategy::Heap);

        let expected: Vec<u32> = (0..results.vocab_size() as u32).collect();
        prop_assert_eq!(results.vocab.tokens(), expected);
        prop_assert_eq!(
            results.vocab_size(),
            results.seeded_size + results.merges.len()
        );
    }

    #[test]
    fn proptest_specials_take_top_ids(
        corpus in corpus_strategy(),
        vocab_size in 8usize..40,
    ) {
        let results = train(&corpus, vocab_size, &SPECIALS, MergeStrategy::Heap);

        let base = (vocab_size - SPECIALS.len()).max(results.seeded_size);
        for (offset, special) in SPECIALS.iter().enumerate() {
            prop_assert_eq!(
                results.vocab.get_token(special.as_bytes()),
                Some((base + offset) as u32)
            );
        }
    }

    #[test]
    fn proptest_merge_budget_law(
        corpus in corpus_strategy(),
        vocab_size in 8usize..40,
    ) {
        let results = train(&corpus, vocab_size, &SPECIALS, MergeStrategy::Heap);

        let planned = (vocab_size - SPECIALS.len()).saturating_sub(results.seeded_size);
        prop_assert_eq!(results.planned_merges, planned);
        prop_assert!(results.merges.len() <= planned);

        if results.is_underfilled() {
            prop_assert!(results.vocab_size() < vocab_size);
        } else {
            prop_assert_eq!(
                results.vocab_size(),
                vocab_size.max(results.seeded_size + SPECIALS.len())
            );
        }
    }

    #[test]
    fn proptest_specials_never_seeded(
        corpus in corpus_strategy(),
        vocab_size in 8usize..40,
    ) {
        let results = train(&corpus, vocab_size, &SPECIALS, MergeStrategy::Heap);

        // '<', '|', '>' only occur inside special tokens.
        for b in [b'<', b'|', b'>'] {
            prop_assert!(!results.vocab.contains_span(&[b]));
        }
    }

    #[test]
    fn proptest_merges_grow_spans(
        corpus in prop::collection::vec(0u8..4, 0..200),
        vocab_size in 0usize..64,
    ) {
        let results = train(&corpus, vocab_size, &[], MergeStrategy::Heap);

        for merge in &results.merges {
            let (a, b) = merge.pair;
            let span = results.vocab.get_span(merge.token).unwrap();
            let left = results.vocab.get_span(a).unwrap();
            let right = results.vocab.get_span(b).unwrap();

            prop_assert!(a < merge.token && b < merge.token);
            prop_assert_eq!(span.len(), left.len() + right.len());
            let joined = [left, right].concat();
            prop_assert_eq!(span, joined.as_slice());
        }
    }
}
