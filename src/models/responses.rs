//! Response DTOs for the story server API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;

use crate::catalog::KeywordCatalog;

/// Response body for GET /keywords
#[derive(Debug, Clone, Serialize)]
pub struct KeywordsResponse {
    /// Allowed keywords grouped by category
    pub categories: KeywordCatalog,
    /// Number of keywords across all categories
    pub total_keywords: usize,
}

impl KeywordsResponse {
    /// Creates a KeywordsResponse describing `catalog`
    pub fn new(catalog: &KeywordCatalog) -> Self {
        Self {
            total_keywords: catalog.total_keywords(),
            categories: catalog.clone(),
        }
    }
}

/// Response body for POST /generate-story
#[derive(Debug, Clone, Serialize)]
pub struct StoryResponse {
    /// Generated (or cached) story text
    pub story: String,
    /// Keywords the story was built from, as supplied or picked
    pub keywords_used: Vec<String>,
    /// True when the story came from the cache
    pub cached: bool,
}

impl StoryResponse {
    pub fn fresh(story: String, keywords_used: Vec<String>) -> Self {
        Self {
            story,
            keywords_used,
            cached: false,
        }
    }

    pub fn cached(story: String, keywords_used: Vec<String>) -> Self {
        Self {
            story,
            keywords_used,
            cached: true,
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status, always "ok"
    pub status: String,
    /// Number of distinct keyword sets with a cached story
    pub cache_size: usize,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn ok(cache_size: usize) -> Self {
        Self {
            status: "ok".to_string(),
            cache_size,
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Short error code, e.g. "Invalid age"
    pub error: String,
    /// Human-readable detail
    pub message: String,
    /// Offending keywords, present only for keyword validation failures
    #[serde(rename = "invalidKeywords", skip_serializing_if = "Option::is_none")]
    pub invalid_keywords: Option<Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn test_keywords_response_total() {
        let resp = KeywordsResponse::new(&KeywordCatalog::reference());
        let json: Value = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["total_keywords"], 17);
        assert_eq!(json["categories"]["elements"][0], "magic");
    }

    #[test]
    fn test_story_response_serialize() {
        let resp = StoryResponse::cached("A tale".to_string(), vec!["space".to_string()]);
        let json: Value = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["story"], "A tale");
        assert_eq!(json["keywords_used"][0], "space");
        assert_eq!(json["cached"], true);
        assert!(!StoryResponse::fresh(String::new(), vec![]).cached);
    }

    #[test]
    fn test_health_response_serialize() {
        let resp = HealthResponse::ok(4);
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("\"status\":\"ok\""));
        assert!(json.contains("\"cache_size\":4"));
        assert!(json.contains("timestamp"));
    }

    #[test]
    fn test_error_response_omits_missing_keywords() {
        let resp = ErrorResponse {
            error: "Invalid name".to_string(),
            message: "Name must contain at least one letter.".to_string(),
            invalid_keywords: None,
        };
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("Invalid name"));
        assert!(!json.contains("invalidKeywords"));
    }
}
