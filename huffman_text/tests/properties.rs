//! Property-based tests of tree construction, code derivation and round trips.

use proptest::prelude::*;
use std::collections::BTreeMap;
use huffman_text::{
    decode, BitStream, CodeTable, Encoder, Error, FrequencyTable, Node, Tree, NEWLINE
};

/// Generate non-empty frequency tables over small alphabets, with many equal frequencies.
fn frequencies_strategy() -> impl Strategy<Value = FrequencyTable> {
    prop::collection::btree_map(
        prop_oneof![
            prop::char::range('a', 'z').prop_map(|c| c.to_string()),
            Just(" ".to_owned()),
            Just(NEWLINE.to_owned()),
            Just("ż".to_owned()),
        ],
        0u32..20,
        1..20
    ).prop_map(|m: BTreeMap<String, u32>| m.into_iter().collect())
}

/// Generate texts, their symbols (with escaped line breaks) are used as the alphabet.
fn text_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(prop_oneof![
        8 => prop::char::range('a', 'h'),
        1 => Just(' '),
        1 => Just('\n'),
        1 => Just('ł'),
    ], 1..300).prop_map(|chars| chars.into_iter().collect())
}

proptest! {
    #[test]
    fn tree_covers_alphabet(frequencies in frequencies_strategy()) {
        let tree = Tree::from_frequencies(&frequencies).unwrap();
        prop_assert_eq!(tree.leaves_count(), frequencies.len());
        prop_assert_eq!(tree.len(), 2 * frequencies.len() - 1);
        let leaves_sum: u64 = tree.nodes().iter().filter(|n| n.is_leaf()).map(Node::frequency).sum();
        prop_assert_eq!(tree.get(tree.root()).unwrap().frequency(), leaves_sum);
        prop_assert_eq!(leaves_sum, frequencies.total_count());
    }

    #[test]
    fn construction_is_deterministic(frequencies in frequencies_strategy()) {
        prop_assert_eq!(Tree::from_frequencies(&frequencies).unwrap(), Tree::from_frequencies(&frequencies.clone()).unwrap());
    }

    #[test]
    fn codes_are_prefix_free(frequencies in frequencies_strategy()) {
        let table = CodeTable::from_frequencies(&frequencies).unwrap();
        prop_assert_eq!(table.len(), frequencies.len());
        let codes: Vec<_> = table.iter().map(|(_, c)| c).collect();
        for a in &codes {
            for b in &codes {
                prop_assert!(!a.is_proper_prefix_of(b), "{} is a prefix of {}", a, b);
            }
        }
        let distinct: std::collections::HashSet<_> = codes.iter().collect();
        prop_assert_eq!(distinct.len(), codes.len());
    }

    #[test]
    fn more_frequent_gets_not_longer_code(frequencies in frequencies_strategy()) {
        let table = CodeTable::from_frequencies(&frequencies).unwrap();
        let codes = table.codes_for_symbols();
        for (s1, f1) in frequencies.iter() {
            for (s2, f2) in frequencies.iter() {
                if f1 > f2 { prop_assert!(codes[s1].len <= codes[s2].len); }
            }
        }
    }

    #[test]
    fn round_trip(text in text_strategy()) {
        let frequencies = FrequencyTable::with_counted_text(&text);
        let table = CodeTable::from_frequencies(&frequencies).unwrap();
        let bytes = Encoder::new(&table).encode_text(&text).unwrap();
        prop_assert_eq!(bytes.len() as u64, 1 + (table.encoded_bits(&frequencies) + 7) / 8);

        // decoder rebuilds the table from the frequencies only, read back from their text format
        let mut freq_file = Vec::new();
        frequencies.write(&mut freq_file).unwrap();
        let read_table = CodeTable::from_frequencies(&FrequencyTable::read(&freq_file[..]).unwrap()).unwrap();
        let bits = BitStream::from_padded_bytes(&bytes).unwrap();
        prop_assert_eq!(huffman_text::render(decode(&bits, &read_table).unwrap()), text);
    }

    #[test]
    fn truncated_stream_is_rejected(text in text_strategy()) {
        let compressed = huffman_text::compress(&text).unwrap();
        let bytes = &compressed.bytes[..compressed.bytes.len() - 1];
        // either the header declares more padding than remains, or the last codeword is cut
        match huffman_text::decompress(&compressed.frequencies, bytes) {
            Ok(decompressed) => prop_assert!(decompressed.len() < text.chars().count()),
            Err(Error::TruncatedStream { .. }) | Err(Error::UnknownCode { .. }) => {},
            Err(e) => prop_assert!(false, "unexpected error {}", e)
        }
    }

    #[test]
    fn single_symbol_decodes_zeros(frequency in 1u32..1000, count in 0usize..100) {
        let frequencies: FrequencyTable = [("a", frequency)].into_iter().collect();
        let table = CodeTable::from_frequencies(&frequencies).unwrap();
        prop_assert_eq!(table.len(), 1);
        let bits: BitStream = std::iter::repeat(false).take(count).collect();
        prop_assert_eq!(decode(&bits, &table).unwrap(), vec!["a"; count]);
    }
}
