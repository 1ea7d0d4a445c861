//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;
use std::fmt;

use thiserror::Error;

use crate::generation::{ApiMode, OpenAiClient, DEFAULT_BASE_URL};

/// Variable holding the generation API credential.
pub const API_KEY_VAR: &str = "OPENAI_API_KEY";

/// Errors that prevent the server from starting.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} is not defined in environment variables")]
    MissingVar(&'static str),

    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: &'static str, reason: String },
}

/// Server configuration parameters.
///
/// Everything except the API key has a default.
#[derive(Clone)]
pub struct Config {
    /// Generation API credential
    pub api_key: String,
    /// HTTP server port
    pub server_port: u16,
    /// Generation API base URL
    pub base_url: String,
    /// Completions or chat endpoint
    pub api_mode: ApiMode,
    /// Model identifier sent with each generation call
    pub model: String,
}

impl Config {
    /// Creates a Config with default settings and the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        let api_mode = ApiMode::default();
        Self {
            api_key: api_key.into(),
            server_port: 3000,
            base_url: DEFAULT_BASE_URL.to_string(),
            api_mode,
            model: api_mode.default_model().to_string(),
        }
    }

    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `OPENAI_API_KEY` - Generation API key (required)
    /// - `PORT` - HTTP server port (default: 3000)
    /// - `OPENAI_BASE_URL` - API base URL (default: https://api.openai.com/v1)
    /// - `OPENAI_API_MODE` - `completions` or `chat` (default: completions)
    /// - `OPENAI_MODEL` - Model identifier (default depends on mode)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| env::var(var).ok())
    }

    /// Builds a Config from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());

        let api_key = non_empty(API_KEY_VAR).ok_or(ConfigError::MissingVar(API_KEY_VAR))?;
        let mut config = Self::new(api_key);

        if let Some(port) = non_empty("PORT").and_then(|v| v.trim().parse().ok()) {
            config.server_port = port;
        }
        if let Some(base_url) = non_empty("OPENAI_BASE_URL") {
            config.base_url = base_url.trim().to_string();
        }
        if let Some(mode) = non_empty("OPENAI_API_MODE") {
            config.api_mode = mode
                .parse()
                .map_err(|reason| ConfigError::InvalidValue {
                    var: "OPENAI_API_MODE",
                    reason,
                })?;
        }
        config.model = non_empty("OPENAI_MODEL")
            .map(|m| m.trim().to_string())
            .unwrap_or_else(|| config.api_mode.default_model().to_string());

        Ok(config)
    }

    /// Builds the generation client described by this config.
    pub fn openai_client(&self) -> OpenAiClient {
        OpenAiClient::new(self.api_key.clone())
            .with_base_url(self.base_url.clone())
            .with_mode(self.api_mode)
            .with_model(self.model.clone())
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &"<redacted>")
            .field("server_port", &self.server_port)
            .field("base_url", &self.base_url)
            .field("api_mode", &self.api_mode)
            .field("model", &self.model)
            .finish()
    }
}
