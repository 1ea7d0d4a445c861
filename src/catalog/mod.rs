//! Keyword Catalog Module
//!
//! The fixed set of theme keywords a story may be built from, grouped by
//! category, plus random selection over it.

mod selector;

pub use selector::{generate_random_keywords, DEFAULT_RANDOM_KEYWORDS};

use serde::ser::{Serialize, SerializeMap, Serializer};

// == Reference Catalog ==
const GAMES: &[&str] = &["Minecraft", "Roblox", "Fortnite", "Among Us"];
const CHARACTERS: &[&str] = &["boy", "girl", "wizard", "warrior", "explorer"];
const ELEMENTS: &[&str] = &["magic", "adventure", "mystery", "friendship"];
const SETTINGS: &[&str] = &["castle", "forest", "space", "underwater"];

// == Keyword Category ==
/// A named group of allowed keywords.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeywordCategory {
    /// Category name (e.g. "games")
    pub name: &'static str,
    /// Keywords in this category, in catalog order
    pub keywords: &'static [&'static str],
}

// == Keyword Catalog ==
/// Ordered mapping of category name to allowed keywords.
///
/// Immutable once built. Serializes as a JSON object whose keys keep
/// catalog order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordCatalog {
    categories: Vec<KeywordCategory>,
}

impl KeywordCatalog {
    // == Constructor ==
    /// Creates a catalog from an explicit list of categories.
    pub fn new(categories: Vec<KeywordCategory>) -> Self {
        Self { categories }
    }

    /// Returns the catalog the service ships with: games, characters,
    /// elements and settings.
    pub fn reference() -> Self {
        Self::new(vec![
            KeywordCategory {
                name: "games",
                keywords: GAMES,
            },
            KeywordCategory {
                name: "characters",
                keywords: CHARACTERS,
            },
            KeywordCategory {
                name: "elements",
                keywords: ELEMENTS,
            },
            KeywordCategory {
                name: "settings",
                keywords: SETTINGS,
            },
        ])
    }

    /// Returns all categories in catalog order.
    pub fn categories(&self) -> &[KeywordCategory] {
        &self.categories
    }

    /// Total number of keywords across every category.
    pub fn total_keywords(&self) -> usize {
        self.categories.iter().map(|c| c.keywords.len()).sum()
    }

    /// Iterates every keyword in catalog order.
    pub fn all_keywords(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.categories.iter().flat_map(|c| c.keywords.iter().copied())
    }

    /// Returns true if `keyword` matches some catalog entry, ignoring case.
    pub fn contains(&self, keyword: &str) -> bool {
        let needle = keyword.to_lowercase();
        self.all_keywords().any(|k| k.to_lowercase() == needle)
    }
}

impl Default for KeywordCatalog {
    fn default() -> Self {
        Self::reference()
    }
}

impl Serialize for KeywordCatalog {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.categories.len()))?;
        for category in &self.categories {
            map.serialize_entry(category.name, category.keywords)?;
        }
        map.end()
    }
}
