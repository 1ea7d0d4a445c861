//! Property-Based Tests for Cache Module
//!
//! Uses proptest to check cache key canonicalization and store semantics.

use proptest::prelude::*;
use std::collections::HashMap;

use crate::cache::{cache_key, InMemoryStoryCache, StoryCache, KEY_SEPARATOR};

// == Strategies ==
/// Generates keyword-like strings (no separator characters)
fn keyword_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z ]{1,16}".prop_map(|s| s)
}

/// Generates a keyword list together with a shuffled, case-flipped copy
fn permuted_keywords_strategy() -> impl Strategy<Value = (Vec<String>, Vec<String>)> {
    prop::collection::vec(keyword_strategy(), 0..8).prop_flat_map(|keywords| {
        let original = keywords.clone();
        Just(keywords)
            .prop_shuffle()
            .prop_map(move |shuffled| {
                let flipped: Vec<String> = shuffled
                    .into_iter()
                    .enumerate()
                    .map(|(i, k)| if i % 2 == 0 { k.to_uppercase() } else { k })
                    .collect();
                (original.clone(), flipped)
            })
    })
}

#[derive(Debug, Clone)]
enum StoreOp {
    Put { key: String, story: String },
    Get { key: String },
}

fn store_op_strategy() -> impl Strategy<Value = StoreOp> {
    prop_oneof![
        ("[a-c]{1,2}", "[a-z ]{1,32}").prop_map(|(key, story)| StoreOp::Put { key, story }),
        "[a-c]{1,2}".prop_map(|key| StoreOp::Get { key }),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // Keyword sets that differ only in order or case share one key.
    #[test]
    fn prop_cache_key_ignores_order_and_case((original, permuted) in permuted_keywords_strategy()) {
        prop_assert_eq!(cache_key(&original), cache_key(&permuted));
    }

    // A key holds exactly one lowercased segment per keyword.
    #[test]
    fn prop_cache_key_segments(keywords in prop::collection::vec(keyword_strategy(), 1..8)) {
        let key = cache_key(&keywords);
        let segments: Vec<&str> = key.split(KEY_SEPARATOR).collect();
        prop_assert_eq!(segments.len(), keywords.len());

        let mut sorted = segments.clone();
        sorted.sort();
        prop_assert_eq!(&segments, &sorted);
        prop_assert!(segments.iter().all(|s| *s == s.to_lowercase()));
    }

    // The store behaves like a plain map with last-write-wins puts.
    #[test]
    fn prop_store_matches_model(ops in prop::collection::vec(store_op_strategy(), 1..50)) {
        let mut store = InMemoryStoryCache::new();
        let mut model: HashMap<String, String> = HashMap::new();

        for op in ops {
            match op {
                StoreOp::Put { key, story } => {
                    store.put(key.clone(), story.clone());
                    model.insert(key, story);
                }
                StoreOp::Get { key } => {
                    prop_assert_eq!(store.get(&key), model.get(&key).cloned());
                    prop_assert_eq!(store.has(&key), model.contains_key(&key));
                }
            }
            prop_assert_eq!(store.len(), model.len());
        }
    }
}
