//! Property tests for sentence extraction

use eoser_core::{SentenceExtractor, SymbolTable};
use proptest::prelude::*;

fn text_strategy() -> impl Strategy<Value = String> {
    // letters, spacing, terminals, pairs and some multibyte characters
    proptest::collection::vec(
        prop_oneof![
            4 => proptest::char::range('a', 'z'),
            2 => Just(' '),
            1 => Just('\n'),
            1 => prop::sample::select(vec!['.', '?', '!', '(', ')', '“', '”', '‘', '’', '1']),
            1 => prop::sample::select(vec!['。', '！', '「', '」', 'é', 'あ']),
        ],
        0..120,
    )
    .prop_map(|chars| chars.into_iter().collect())
}

proptest! {
    #[test]
    fn spans_tile_the_consumed_prefix(text in text_strategy()) {
        let extractor = SentenceExtractor::new(SymbolTable::english().unwrap()).unwrap();
        let extraction = extractor.extract(&text);

        let joined: String = extraction.sentences(&text).collect();
        prop_assert_eq!(joined.as_str(), &text[..extraction.last_position]);
        prop_assert!(text[extraction.last_position..].trim().is_empty());
    }

    #[test]
    fn spans_are_ordered_and_non_empty(text in text_strategy()) {
        let extractor = SentenceExtractor::new(SymbolTable::japanese().unwrap()).unwrap();
        let extraction = extractor.extract(&text);

        for boundary in &extraction {
            prop_assert!(boundary.end > boundary.start);
            prop_assert!(boundary.end <= text.len());
            prop_assert!(text.is_char_boundary(boundary.start));
            prop_assert!(text.is_char_boundary(boundary.end));
        }
        for pair in extraction.boundaries.windows(2) {
            prop_assert!(pair[0].end <= pair[1].start);
            prop_assert!(pair[0].start < pair[1].start);
        }
    }

    #[test]
    fn extraction_is_repeatable(text in text_strategy()) {
        let first = SentenceExtractor::new(SymbolTable::english().unwrap())
            .unwrap()
            .extract(&text);
        let second = SentenceExtractor::new(SymbolTable::english().unwrap())
            .unwrap()
            .extract(&text);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn blank_input_has_no_sentences(text in "[ \t\n]{0,40}") {
        let extractor = SentenceExtractor::new(SymbolTable::english().unwrap()).unwrap();
        let extraction = extractor.extract(&text);
        prop_assert!(extraction.is_empty());
        prop_assert_eq!(extraction.last_position, 0);
    }
}
