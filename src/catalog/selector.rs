//! Random Keyword Selection
//!
//! Picks a themed keyword set when the caller does not supply one.

use rand::seq::SliceRandom;
use rand::Rng;

use super::KeywordCatalog;

/// Number of keywords picked when a request omits them.
pub const DEFAULT_RANDOM_KEYWORDS: usize = 3;

/// Picks one keyword from each of `count` randomly chosen categories.
///
/// Categories are shuffled uniformly and the first `count` are used, so the
/// result order follows the shuffle. `count` is clamped to the number of
/// categories; empty categories contribute nothing.
pub fn generate_random_keywords<R: Rng + ?Sized>(
    catalog: &KeywordCatalog,
    count: usize,
    rng: &mut R,
) -> Vec<String> {
    let mut categories: Vec<_> = catalog.categories().iter().collect();
    categories.shuffle(rng);

    categories
        .into_iter()
        .take(count)
        .filter_map(|category| category.keywords.choose(rng))
        .map(|keyword| keyword.to_string())
        .collect()
}
