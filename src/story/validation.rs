//! Request Validation
//!
//! Checks caller-supplied keywords, name and age before any generation work.

use serde_json::Value;

use crate::catalog::KeywordCatalog;
use crate::error::{ApiError, Result};

/// Youngest reader age accepted.
pub const MIN_AGE: u8 = 1;
/// Oldest reader age accepted.
pub const MAX_AGE: u8 = 16;

/// Returns every keyword that does not match the catalog, ignoring case.
///
/// Input order and duplicates are preserved in the returned list.
pub fn validate_keywords(catalog: &KeywordCatalog, keywords: &[String]) -> Vec<String> {
    keywords
        .iter()
        .filter(|keyword| !catalog.contains(keyword))
        .cloned()
        .collect()
}

/// Fails with [`ApiError::InvalidKeywords`] if any keyword is unknown.
pub fn ensure_known_keywords(catalog: &KeywordCatalog, keywords: &[String]) -> Result<()> {
    let invalid = validate_keywords(catalog, keywords);
    if invalid.is_empty() {
        Ok(())
    } else {
        Err(ApiError::InvalidKeywords(invalid))
    }
}

/// Coerces `age` to a whole number in `MIN_AGE..=MAX_AGE`.
///
/// JSON numbers and numeric strings are accepted; anything else is rejected.
pub fn validate_age(age: &Value) -> Result<u8> {
    let number = match age {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };

    match number {
        Some(n) if n.fract() == 0.0 && (f64::from(MIN_AGE)..=f64::from(MAX_AGE)).contains(&n) => {
            Ok(n as u8)
        }
        _ => Err(ApiError::InvalidAge),
    }
}

/// Reduces `name` to its first alphabetic word.
///
/// Characters that are neither ASCII letters nor whitespace are dropped
/// first, then the remainder is split on whitespace and the first segment
/// kept. "J0hn Smith" becomes "Jhn"; "123" is rejected.
pub fn sanitize_name(name: &Value) -> Result<String> {
    let Value::String(raw) = name else {
        return Err(ApiError::InvalidName);
    };

    let letters: String = raw
        .chars()
        .filter(|c| c.is_ascii_alphabetic() || c.is_whitespace())
        .collect();

    letters
        .split_whitespace()
        .next()
        .map(str::to_string)
        .ok_or(ApiError::InvalidName)
}
