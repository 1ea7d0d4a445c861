//! Request DTOs for the story server API
//!
//! Defines the structure of incoming HTTP request bodies.

use serde::Deserialize;
use serde_json::Value;

use crate::error::{ApiError, Result};

/// Request body for POST /generate-story
///
/// `name` and `age` stay loosely typed so validation can coerce and reject
/// them with the API's own error shape.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StoryRequest {
    /// Keywords to build the story from; random ones are picked when absent
    #[serde(default)]
    pub keywords: Option<Vec<String>>,
    /// Main character's name
    #[serde(default)]
    pub name: Option<Value>,
    /// Main character's age
    #[serde(default)]
    pub age: Option<Value>,
}

impl StoryRequest {
    /// Decodes a request body.
    ///
    /// An empty or whitespace-only body is a request with every field
    /// absent. Anything else must be a JSON story request.
    pub fn from_body(body: &[u8]) -> Result<Self> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::default());
        }
        serde_json::from_slice(body).map_err(|e| {
            ApiError::InvalidBody(format!("Failed to parse the request body as JSON: {e}"))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_story_request_deserialize_full() {
        let json = r#"{"keywords": ["Minecraft", "magic"], "name": "Alex", "age": 10}"#;
        let req: StoryRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.keywords.unwrap(), vec!["Minecraft", "magic"]);
        assert_eq!(req.name, Some(Value::from("Alex")));
        assert_eq!(req.age, Some(Value::from(10)));
    }

    #[test]
    fn test_story_request_empty_body() {
        let req: StoryRequest = serde_json::from_str("{}").unwrap();
        assert!(req.keywords.is_none());
        assert!(req.name.is_none());
        assert!(req.age.is_none());
    }

    #[test]
    fn test_null_fields_are_absent() {
        let json = r#"{"keywords": null, "name": null, "age": null}"#;
        let req: StoryRequest = serde_json::from_str(json).unwrap();
        assert!(req.keywords.is_none());
        assert!(req.name.is_none());
        assert!(req.age.is_none());
    }

    #[test]
    fn test_empty_keyword_list_is_kept() {
        let req: StoryRequest = serde_json::from_str(r#"{"keywords": []}"#).unwrap();
        assert_eq!(req.keywords, Some(vec![]));
    }

    #[test]
    fn test_from_body_empty_is_default() {
        for body in [&b""[..], b"  \n\t"] {
            let req = StoryRequest::from_body(body).unwrap();
            assert!(req.keywords.is_none());
            assert!(req.name.is_none());
            assert!(req.age.is_none());
        }
    }

    #[test]
    fn test_from_body_parses_json() {
        let req = StoryRequest::from_body(br#"{"keywords":["space"],"age":"9"}"#).unwrap();
        assert_eq!(req.keywords, Some(vec!["space".to_string()]));
        assert_eq!(req.age, Some(Value::from("9")));
    }

    #[test]
    fn test_from_body_malformed_is_invalid_body() {
        let result = StoryRequest::from_body(br#"{"keywords": "Minecraft""#);
        assert!(matches!(result, Err(ApiError::InvalidBody(_))));

        let result = StoryRequest::from_body(br#"{"keywords": "Minecraft"}"#);
        assert!(matches!(result, Err(ApiError::InvalidBody(_))));
    }

    #[test]
    fn test_keywords_must_be_strings() {
        let result = serde_json::from_str::<StoryRequest>(r#"{"keywords": [1, 2]}"#);
        assert!(result.is_err());
    }
}
