//! Tests for the prefix tree: insertion, wildcard queries and length lookup

#[cfg(test)]
mod tests {
    use crossfill::dictionary::WordIndex;

    fn sample() -> WordIndex {
        WordIndex::from_words(["DOG", "DAD", "GUM", "DIM"])
    }

    // Tests wildcard query visits children in insertion order
    #[test]
    fn test_query_all_wildcards_follows_insertion_order() {
        let index = sample();
        assert_eq!(index.matching("???"), vec!["DOG", "DAD", "DIM", "GUM"]);
    }

    // Tests fixed letters restrict matches
    #[test]
    fn test_query_with_fixed_letters() {
        let index = sample();
        assert_eq!(index.matching("D??"), vec!["DOG", "DAD", "DIM"]);
        assert_eq!(index.matching("?U?"), vec!["GUM"]);
        assert_eq!(index.matching("D?G"), vec!["DOG"]);
        assert!(index.matching("X??").is_empty());
    }

    // Tests matches must have exactly the pattern length
    #[test]
    fn test_query_is_length_exact() {
        let index = WordIndex::from_words(["DO", "DOG", "DOGS"]);
        assert_eq!(index.matching("D??"), vec!["DOG"]);
        assert_eq!(index.matching("??"), vec!["DO"]);
        assert!(index.matching("?????").is_empty());
    }

    // Tests every match agrees with the pattern at fixed positions
    #[test]
    fn test_query_results_agree_with_pattern() {
        let index = WordIndex::from_words(["CART", "CARD", "CORD", "WORD", "CAT"]);
        let pattern = "C?R?";
        let matches = index.matching(pattern);
        assert_eq!(matches, vec!["CART", "CARD", "CORD"]);
        for word in matches {
            for (expected, actual) in pattern.chars().zip(word.chars()) {
                assert!(expected == '?' || expected == actual);
            }
        }
    }

    // Tests repeated insertion keeps a single entry and id
    #[test]
    fn test_insert_is_idempotent() {
        let mut index = WordIndex::new();
        let first = index.insert("DOG");
        let second = index.insert("DOG");
        assert_eq!(first, second);
        assert_eq!(index.len(), 1);
        assert_eq!(index.matching("???"), vec!["DOG"]);
    }

    // Tests a word that is a prefix of another is still terminal
    #[test]
    fn test_prefix_words_are_distinct() {
        let index = WordIndex::from_words(["DOGS", "DOG"]);
        assert!(index.contains("DOG"));
        assert!(index.contains("DOGS"));
        assert!(!index.contains("DO"));
    }

    // Tests exact lookup treats the wildcard as an ordinary character
    #[test]
    fn test_contains_does_not_expand_wildcards() {
        let index = sample();
        assert!(index.contains("GUM"));
        assert!(!index.contains("G?M"));
        assert_eq!(index.id_of("DAD").map(|id| id.index()), Some(1));
    }

    // Tests ids resolve back to their text
    #[test]
    fn test_word_lookup_by_id() {
        let index = sample();
        let id = index.id_of("DIM");
        assert_eq!(id.and_then(|id| index.word(id)), Some("DIM"));
    }

    // Tests length buckets keep insertion order and cover missing lengths
    #[test]
    fn test_words_of_length() {
        let index = WordIndex::from_words(["DOG", "AT", "CAT", "ON"]);
        let threes: Vec<&str> = index
            .words_of_length(3)
            .iter()
            .filter_map(|&id| index.word(id))
            .collect();
        assert_eq!(threes, vec!["DOG", "CAT"]);
        assert_eq!(index.words_of_length(2).len(), 2);
        assert!(index.words_of_length(7).is_empty());
        assert_eq!(index.length_count(), 2);
    }

    // Tests an empty index answers every query with nothing
    #[test]
    fn test_empty_index() {
        let index = WordIndex::default();
        assert!(index.is_empty());
        assert!(index.query("???").is_empty());
        assert!(!index.contains("A"));
    }

    // Tests length is counted in characters, not bytes
    #[test]
    fn test_multibyte_words_use_character_length() {
        let index = WordIndex::from_words(["ÉTÉ", "ETE"]);
        assert_eq!(index.matching("???"), vec!["ÉTÉ", "ETE"]);
        assert_eq!(index.words_of_length(3).len(), 2);
    }
}
