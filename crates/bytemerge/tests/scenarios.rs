use bytemerge::{
    BytePairTrainerOptions,
    BytemergeError,
    MergeRecord,
    MergeStrategy,
    TrainResults,
};

const STRATEGIES: [MergeStrategy; 2] = [MergeStrategy::Rescan, MergeStrategy::Heap];

fn train(
    corpus: &str,
    vocab_size: usize,
    specials: &[&str],
    strategy: MergeStrategy,
) -> TrainResults<u32> {
    BytePairTrainerOptions::new(vocab_size)
        .with_special_tokens(specials)
        .with_strategy(strategy)
        .init::<u32>()
        .expect("invalid options")
        .train(corpus.as_bytes())
        .expect("training failed")
}

#[test]
fn test_abacaba() {
    for strategy in STRATEGIES {
        let results = train("abacaba", 5, &[], strategy);

        assert_eq!(results.vocab_size(), 5);
        for span in ["a", "b", "c", "ab", "aba"] {
            assert!(results.vocab.contains_span(span.as_bytes()), "{span}");
        }
    }
}

#[test]
fn test_empty_corpus() {
    for strategy in STRATEGIES {
        let results = train("", 256, &[], strategy);

        assert_eq!(results.vocab_size(), 0);
        assert!(results.merges.is_empty());
        assert!(results.is_underfilled());
    }
}

#[test]
fn test_single_repeated_byte() {
    for strategy in STRATEGIES {
        let results = train("aaaaa", 2, &[], strategy);

        assert_eq!(results.vocab.sorted_entries(), vec![
            (0, b"a".as_slice()),
            (1, b"aa".as_slice())
        ]);
    }
}

#[test]
fn test_all_ties_merge_first_pair() {
    for strategy in STRATEGIES {
        let results = train("abcdefg", 8, &[], strategy);

        assert_eq!(results.vocab_size(), 8);
        assert_eq!(results.merges, vec![MergeRecord::new((0, 1), 7)]);
        assert!(results.vocab.contains_span(b"ab"));
        assert!(!results.vocab.contains_span(b"fg"));
    }
}

#[test]
fn test_special_token_takes_last_id() {
    for strategy in STRATEGIES {
        let results = train("abacaba<|endoftext|>", 8, &["<|endoftext|>"], strategy);

        assert_eq!(results.vocab_size(), 8);
        assert_eq!(results.vocab.get_token(b"<|endoftext|>"), Some(7));

        for (token, span) in results.vocab.sorted_entries() {
            if token != 7 {
                assert!(!span.contains(&b'<'));
                assert!(!span.contains(&b'|'));
            }
        }
    }
}

#[test]
fn test_vocab_size_equal_to_byte_count() {
    for strategy in STRATEGIES {
        let results = train("abc", 3, &[], strategy);

        assert_eq!(results.vocab_size(), 3);
        assert!(results.merges.is_empty());
        assert!(!results.vocab.contains_span(b"ab"));
    }
}

#[test]
fn test_one_merge_past_byte_count() {
    for strategy in STRATEGIES {
        assert_eq!(train("abc", 4, &[], strategy).vocab_size(), 4);
        assert_eq!(train("abcde", 6, &[], strategy).vocab_size(), 6);
    }
}

#[test]
fn test_multiple_special_tokens() {
    for strategy in STRATEGIES {
        let results = train(
            "a<|endoftext|>b<|padding|>",
            5,
            &["<|endoftext|>", "<|padding|>"],
            strategy,
        );

        assert_eq!(results.vocab_size(), 5);
        assert_eq!(results.vocab.get_token(b"<|endoftext|>"), Some(3));
        assert_eq!(results.vocab.get_token(b"<|padding|>"), Some(4));
        assert_eq!(results.vocab.get_token(b"ab"), Some(2));
    }
}

#[test]
fn test_special_token_between_text() {
    for strategy in STRATEGIES {
        let results = train("a<|endoftext|>b", 4, &["<|endoftext|>"], strategy);

        assert_eq!(results.vocab_size(), 4);
        assert_eq!(results.vocab.get_token(b"<|endoftext|>"), Some(3));
        assert!(results.vocab.contains_span(b"ab"));
    }
}

#[test]
fn test_repeated_specials_do_not_duplicate_text() {
    for strategy in STRATEGIES {
        let results = train("ab<s>ab<t>ab", 6, &["<s>", "<t>"], strategy);

        // "ababab" has 3 ``(a, b)`` windows, whatever the special count.
        assert_eq!(results.seeded_size, 2);
        assert_eq!(results.merges[0], MergeRecord::new((0, 1), 2));
        assert_eq!(results.vocab.get_span(3), Some(b"abab".as_slice()));
    }
}

#[test]
fn test_invalid_configuration() {
    let err = BytePairTrainerOptions::new(1)
        .with_special_tokens(["<a>", "<b>"])
        .init::<u32>()
        .unwrap_err();
    assert_eq!(err, BytemergeError::InvalidConfig {
        vocab_size: 1,
        specials: 2
    });

    let err = BytePairTrainerOptions::new(4)
        .with_special_tokens([""])
        .init::<u32>()
        .unwrap_err();
    assert_eq!(err, BytemergeError::EmptySpecialToken { index: 0 });
}

#[test]
fn test_vocab_size_below_byte_count_is_not_an_error() {
    for strategy in STRATEGIES {
        let results = train("abcdef", 2, &[], strategy);

        assert_eq!(results.planned_merges, 0);
        assert!(results.merges.is_empty());
        assert_eq!(results.vocab_size(), 6);
    }
}
