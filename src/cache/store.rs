//! Story Store Module
//!
//! Keyed storage for generated stories.

use std::collections::HashMap;

// == Story Cache Trait ==
/// Storage for generated stories keyed by canonical cache key.
///
/// The service holds one behind a lock; tests inject a fresh instance each.
pub trait StoryCache: Send + Sync {
    /// Returns the story stored under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Returns true if a story is stored under `key`.
    fn has(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Stores `story` under `key`, replacing any previous value.
    fn put(&mut self, key: String, story: String);

    /// Number of distinct keys stored.
    fn len(&self) -> usize;

    /// Returns true if nothing has been stored.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// == In-Memory Story Cache ==
/// Unbounded, process-lifetime story cache backed by a `HashMap`.
///
/// Entries never expire and are never evicted.
#[derive(Debug, Default)]
pub struct InMemoryStoryCache {
    entries: HashMap<String, String>,
}

impl InMemoryStoryCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }
}

impl StoryCache for InMemoryStoryCache {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn has(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    fn put(&mut self, key: String, story: String) {
        self.entries.insert(key, story);
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}
