//! Error types for the story server
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use tracing::error;

use crate::generation::GenerationError;
use crate::models::ErrorResponse;

/// Hint attached to keyword validation failures.
pub const KEYWORDS_HINT: &str =
    "Please use only keywords from the available list. Use GET /keywords to see all available options.";

// == API Error Enum ==
/// Unified error type for request handling.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Name had no letters left after sanitization
    #[error("Invalid name")]
    InvalidName,

    /// Age missing the 1-16 whole number range
    #[error("Invalid age")]
    InvalidAge,

    /// One or more keywords are not in the catalog
    #[error("Invalid keywords provided")]
    InvalidKeywords(Vec<String>),

    /// Body could not be decoded as a story request
    #[error("Invalid request body")]
    InvalidBody(String),

    /// Generation API call failed
    #[error("Failed to generate story")]
    Generation(#[from] GenerationError),
}

impl ApiError {
    /// HTTP status for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Generation(_) => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::BAD_REQUEST,
        }
    }

    /// Human-readable detail sent as `message`.
    pub fn message(&self) -> String {
        match self {
            ApiError::InvalidName => "Name must contain at least one letter.".to_string(),
            ApiError::InvalidAge => "Invalid age. Age must be a whole number between 1 and 16."
                .to_string(),
            ApiError::InvalidKeywords(_) => KEYWORDS_HINT.to_string(),
            ApiError::InvalidBody(detail) => detail.clone(),
            ApiError::Generation(source) => source.to_string(),
        }
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Generation(source) = &self {
            error!(error = %source, "Error generating story");
        }

        let status = self.status();
        let body = ErrorResponse {
            error: self.to_string(),
            message: self.message(),
            invalid_keywords: match self {
                ApiError::InvalidKeywords(invalid) => Some(invalid),
                _ => None,
            },
        };

        (status, Json(body)).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for request handling.
pub type Result<T> = std::result::Result<T, ApiError>;
