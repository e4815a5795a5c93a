use huffman::{build_tree, count_frequencies, decode, encode, generate_codes, Error, Malformed};
use proptest::prelude::*;

proptest! {
    #[test]
    fn test_huffman_roundtrip(input in prop::collection::vec(any::<u8>(), 1..200)) {
        let freqs = count_frequencies(input.iter().copied());
        let tree = build_tree(&freqs).unwrap();
        let codes = generate_codes(&tree);

        let bits = encode(&input, &codes).unwrap();
        prop_assert_eq!(bits.len() as u64, codes.encoded_len(&freqs));

        let decoded = decode(&bits, &tree).unwrap();
        prop_assert_eq!(input, decoded);
    }

    #[test]
    fn test_text_roundtrip(text in ".{1,64}") {
        let tree = build_tree(&count_frequencies(text.chars())).unwrap();
        let bits = encode(text.chars(), &generate_codes(&tree)).unwrap();
        let decoded: String = decode(&bits, &tree).unwrap().into_iter().collect();
        prop_assert_eq!(text, decoded);
    }

    #[test]
    fn test_frequency_sum(input in prop::collection::vec(0..16u8, 0..300)) {
        let freqs = count_frequencies(input.iter().copied());
        prop_assert_eq!(freqs.total(), input.len() as u64);
        for (symbol, n) in &freqs {
            prop_assert_eq!(n, input.iter().filter(|&&b| b == *symbol).count() as u64);
        }
    }

    #[test]
    fn test_prefix_free(input in prop::collection::vec(any::<u8>(), 1..200)) {
        let freqs = count_frequencies(input.iter().copied());
        let tree = build_tree(&freqs).unwrap();
        let codes = generate_codes(&tree);

        prop_assert_eq!(codes.len(), freqs.len());
        prop_assert_eq!(tree.leaf_count(), freqs.len());
        prop_assert!(codes.is_prefix_free());
        for (_, code) in &codes {
            prop_assert!(!code.is_empty());
            prop_assert!(code.chars().all(|c| c == '0' || c == '1'));
        }
    }

    #[test]
    fn test_deterministic(input in prop::collection::vec(0..8u8, 1..100)) {
        let first = build_tree(&count_frequencies(input.iter().copied())).unwrap();
        let second = build_tree(&count_frequencies(input.iter().copied())).unwrap();
        prop_assert_eq!(&first, &second);

        let a = encode(&input, &generate_codes(&first)).unwrap();
        let b = encode(&input, &generate_codes(&second)).unwrap();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn test_truncated_rejected(input in prop::collection::vec(0..4u8, 2..64)) {
        let freqs = count_frequencies(input.iter().copied());
        prop_assume!(freqs.len() > 1);
        let tree = build_tree(&freqs).unwrap();
        let codes = generate_codes(&tree);

        let last = codes.get(input.last().unwrap()).unwrap();
        prop_assume!(last.len() > 1);
        let bits = encode(&input, &codes).unwrap();
        let cut = &bits[..bits.len() - 1];

        let is_truncated = matches!(
            decode(cut, &tree),
            Err(Error::MalformedInput(Malformed::TruncatedCode { .. }))
        );
        prop_assert!(is_truncated);
    }
}
