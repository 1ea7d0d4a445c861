//! OpenAI-compatible [`StoryGenerator`].
//!
//! Speaks either the legacy completions endpoint or the chat completions
//! endpoint, chosen by [`ApiMode`].

use std::fmt;
use std::str::FromStr;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{GenerationError, GenerationParams, StoryGenerator};

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// System message sent ahead of the prompt in chat mode.
pub const STORY_WRITER_SYSTEM_PROMPT: &str = "You are a creative children's story writer.";

/// Which OpenAI endpoint family to call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ApiMode {
    /// `POST /completions` with a raw prompt
    #[default]
    Completions,
    /// `POST /chat/completions` with system + user messages
    Chat,
}

impl ApiMode {
    /// Model used when none is configured.
    pub fn default_model(self) -> &'static str {
        match self {
            ApiMode::Completions => "gpt-3.5-turbo-instruct",
            ApiMode::Chat => "gpt-3.5-turbo",
        }
    }

    fn endpoint(self) -> &'static str {
        match self {
            ApiMode::Completions => "completions",
            ApiMode::Chat => "chat/completions",
        }
    }
}

impl FromStr for ApiMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "completions" | "completion" => Ok(ApiMode::Completions),
            "chat" => Ok(ApiMode::Chat),
            other => Err(format!(
                "unknown API mode '{other}' (expected 'completions' or 'chat')"
            )),
        }
    }
}

impl fmt::Display for ApiMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiMode::Completions => f.write_str("completions"),
            ApiMode::Chat => f.write_str("chat"),
        }
    }
}

// == Wire Types ==
#[derive(Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    #[serde(flatten)]
    params: &'a GenerationParams,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
    #[serde(flatten)]
    params: &'a GenerationParams,
}

#[derive(Deserialize)]
struct CompletionResponse {
    choices: Vec<CompletionChoice>,
}

#[derive(Deserialize)]
struct CompletionChoice {
    text: String,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatReply,
}

#[derive(Deserialize)]
struct ChatReply {
    content: Option<String>,
}

// == Client ==
/// HTTP client for an OpenAI-compatible text generation API.
#[derive(Clone)]
pub struct OpenAiClient {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
    model: String,
    mode: ApiMode,
}

impl OpenAiClient {
    /// Creates a completions-mode client against the public API.
    pub fn new(api_key: impl Into<String>) -> Self {
        let mode = ApiMode::default();
        Self {
            client: reqwest::Client::new(),
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            model: mode.default_model().to_string(),
            mode,
        }
    }

    /// Points the client at another base URL (no trailing `/` needed).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Sets the model identifier.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Switches endpoint family. Does not change the model.
    pub fn with_mode(mut self, mode: ApiMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn mode(&self) -> ApiMode {
        self.mode
    }

    async fn post<B: Serialize + ?Sized>(
        &self,
        body: &B,
    ) -> Result<reqwest::Response, GenerationError> {
        let url = format!("{}/{}", self.base_url, self.mode.endpoint());
        debug!(%url, model = %self.model, "Calling generation API");

        let response = self
            .client
            .post(url)
            .bearer_auth(&self.api_key)
            .json(body)
            .send()
            .await
            .map_err(|e| GenerationError::Network(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            return Err(GenerationError::Api { status, message });
        }

        Ok(response)
    }
}

impl fmt::Debug for OpenAiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenAiClient")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("mode", &self.mode)
            .finish_non_exhaustive()
    }
}

fn non_empty(text: Option<String>) -> Result<String, GenerationError> {
    text.map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .ok_or(GenerationError::EmptyResponse)
}

#[async_trait]
impl StoryGenerator for OpenAiClient {
    async fn generate(
        &self,
        prompt: &str,
        params: &GenerationParams,
    ) -> Result<String, GenerationError> {
        match self.mode {
            ApiMode::Completions => {
                let request = CompletionRequest {
                    model: &self.model,
                    prompt,
                    params,
                };
                let response: CompletionResponse = self
                    .post(&request)
                    .await?
                    .json()
                    .await
                    .map_err(|e| GenerationError::Parse(e.to_string()))?;
                non_empty(response.choices.into_iter().next().map(|c| c.text))
            }
            ApiMode::Chat => {
                let request = ChatRequest {
                    model: &self.model,
                    messages: [
                        ChatMessage {
                            role: "system",
                            content: STORY_WRITER_SYSTEM_PROMPT,
                        },
                        ChatMessage {
                            role: "user",
                            content: prompt,
                        },
                    ],
                    params,
                };
                let response: ChatResponse = self
                    .post(&request)
                    .await?
                    .json()
                    .await
                    .map_err(|e| GenerationError::Parse(e.to_string()))?;
                non_empty(
                    response
                        .choices
                        .into_iter()
                        .next()
                        .and_then(|c| c.message.content),
                )
            }
        }
    }
}
