//! Cache Module
//!
//! Memoizes generated stories by canonical keyword-set key.

mod key;
mod store;

#[cfg(test)]
mod property_tests;

// Re-export public types
pub use key::{cache_key, KEY_SEPARATOR};
pub use store::{InMemoryStoryCache, StoryCache};
