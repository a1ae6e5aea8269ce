use crate::error::{Error, Result};

const DEFAULT_MODEL: &str = "gpt-4";
const DEFAULT_API_URL: &str = "https://api.openai.com/v1/chat/completions";

/// AI collaborator configuration, sourced from the environment.
///
/// Only commands that talk to the AI need a key; rendering and photo
/// embedding work without one.
#[derive(Debug, Clone)]
pub struct Config {
    /// API key, absent when `OPENAI_API_KEY` is not set
    pub api_key: Option<String>,
    /// Chat-completion model name
    pub model: String,
    /// Chat-completions endpoint URL
    pub api_url: String,
}

impl Config {
    /// Reads configuration from the environment, loading a `.env` file first
    /// when present.
    #[must_use]
    pub fn from_env() -> Self {
        // Missing .env is fine; real environment variables still apply.
        dotenvy::dotenv().ok();

        Self {
            api_key: std::env::var("OPENAI_API_KEY").ok().filter(|k| !k.is_empty()),
            model: std::env::var("OPENAI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
            api_url: std::env::var("OPENAI_API_URL")
                .unwrap_or_else(|_| DEFAULT_API_URL.to_string()),
        }
    }

    /// Returns the API key or a configuration error explaining how to set it.
    ///
    /// # Errors
    ///
    /// Returns a configuration error when no key is available.
    pub fn require_api_key(&self) -> Result<&str> {
        self.api_key
            .as_deref()
            .ok_or_else(|| Error::config("OPENAI_API_KEY not set in environment"))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            api_url: DEFAULT_API_URL.to_string(),
        }
    }
}
