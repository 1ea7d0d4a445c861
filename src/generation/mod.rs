//! Generation Module
//!
//! The text-generation collaborator that turns a prompt into a story.
//!
//! [`StoryGenerator`] is the seam: the server holds an `Arc<dyn StoryGenerator>`
//! so tests can substitute a double without touching the network.

mod openai;

pub use openai::{ApiMode, OpenAiClient, DEFAULT_BASE_URL, STORY_WRITER_SYSTEM_PROMPT};

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

/// Errors returned by a [`StoryGenerator`].
#[derive(Debug, Error)]
pub enum GenerationError {
    /// Request never produced an HTTP response
    #[error("Network error: {0}")]
    Network(String),

    /// API answered with a non-success status
    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    /// Response body could not be decoded
    #[error("Failed to parse response: {0}")]
    Parse(String),

    /// Response decoded but carried no text
    #[error("Generation API returned no story text")]
    EmptyResponse,
}

// == Generation Parameters ==
/// Sampling parameters sent with every generation call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GenerationParams {
    pub max_tokens: u32,
    pub temperature: f64,
    pub top_p: f64,
    pub frequency_penalty: f64,
    pub presence_penalty: f64,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            max_tokens: 300,
            temperature: 0.7,
            top_p: 0.9,
            frequency_penalty: 0.5,
            presence_penalty: 0.5,
        }
    }
}

// == Story Generator Trait ==
/// Produces story text from a prompt.
///
/// One attempt per call; implementations do not retry.
#[async_trait]
pub trait StoryGenerator: Send + Sync {
    async fn generate(
        &self,
        prompt: &str,
        params: &GenerationParams,
    ) -> Result<String, GenerationError>;
}
