use {
    pretty_assertions::assert_eq,
    rand::{rngs::StdRng, SeedableRng},
    scs_core::{random::RandomKeys, Alphabet, KeywordMatcher, LOWERCASE},
    std::collections::HashSet,
    test_log::test,
};

/// Reports every occurrence by comparing each key at each position.
fn naive_matches(keys: &[String], text: &str) -> HashSet<(String, usize, usize)> {
    let symbols: Vec<char> = text.chars().collect();
    let mut found = HashSet::new();
    for key in keys.iter().filter(|key| !key.is_empty()) {
        let key_symbols: Vec<char> = key.chars().collect();
        for (start, window) in symbols.windows(key_symbols.len()).enumerate() {
            if window == key_symbols.as_slice() {
                found.insert((key.clone(), start, start + key_symbols.len() - 1));
            }
        }
    }
    found
}

#[test]
fn matches_agree_with_naive_search() {
    let alphabet = Alphabet::from_symbols("abc".chars()).unwrap();
    let generator = RandomKeys::new(&alphabet, 1, 5);
    let texts = RandomKeys::new(&alphabet, 50, 200);

    for seed in 0..25 {
        let mut rng = StdRng::seed_from_u64(seed);
        let keys = generator.generate(&mut rng, 15);
        let text = texts.key(&mut rng);

        let matcher = KeywordMatcher::new(keys.iter().cloned(), &alphabet).unwrap();
        let found: HashSet<(String, usize, usize)> = matcher
            .match_text(&text)
            .unwrap()
            .into_iter()
            .map(|m| (m.key.to_string(), m.start, m.end))
            .collect();

        assert_eq!(found, naive_matches(&keys, &text));
    }
}

#[test]
fn matched_keys_over_lowercase() {
    let matcher = KeywordMatcher::new(["hello", "world", "is", "leiwand"], &LOWERCASE).unwrap();
    assert_eq!(matcher.matched_keys("sjkldfhelloalksdjis").unwrap(), HashSet::from(["hello", "is"]));
}

#[test_log::test(tokio::test)]
async fn match_reader_spans_lines() {
    let alphabet = Alphabet::from_symbols("abc\n".chars()).unwrap();
    let matcher = KeywordMatcher::new(["ab", "b\nc", "ca"], &alphabet).unwrap();
    let mut reader = &b"ab\nca\nab"[..];

    let matches: Vec<(&str, usize, usize)> =
        matcher.match_reader(&mut reader).await.unwrap().into_iter().map(|m| (m.key, m.start, m.end)).collect();
    assert_eq!(matches, vec![("ab", 0, 1), ("b\nc", 1, 3), ("ca", 3, 4), ("ab", 6, 7)]);
}
