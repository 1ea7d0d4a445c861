//! Cache Key Module
//!
//! Canonical keys for keyword sets.

/// Separator placed between keywords in a cache key.
pub const KEY_SEPARATOR: &str = "|";

/// Derives the canonical cache key for a keyword set.
///
/// Each keyword is lowercased, the list sorted ascending and joined with
/// `|`, so sets differing only in case or order share a key.
pub fn cache_key<S: AsRef<str>>(keywords: &[S]) -> String {
    let mut normalized: Vec<String> = keywords
        .iter()
        .map(|keyword| keyword.as_ref().to_lowercase())
        .collect();
    normalized.sort();
    normalized.join(KEY_SEPARATOR)
}
