//! AI collaborator: a thin client over an OpenAI-compatible chat-completions
//! endpoint, plus the parse-or-raw fallback applied to its output.
//!
//! No other module talks to the API directly; commands and the review wizard
//! receive an [`Ai`] handle from the caller.

use crate::{
    config::Config,
    error::{Error, Result},
    prompts,
    resume::Resume,
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

const TEMPERATURE: f32 = 0.2;
const REQUEST_TIMEOUT_SECS: u64 = 120;

/// Outcome of a structured extraction call.
///
/// AI output that fails to parse as a JSON object is never discarded: the
/// raw text is preserved verbatim alongside the parse error so the caller
/// can show it to the user.
#[derive(Debug, Clone, PartialEq)]
pub enum Extraction {
    /// The output parsed as a JSON object keyed by résumé field names.
    Fields(Map<String, Value>),
    /// The output did not parse; `raw` holds it verbatim.
    Unparsed {
        /// Why the parse failed
        error: String,
        /// The unmodified AI output
        raw: String,
    },
}

/// The AI operations the résumé workflow needs.
///
/// A trait so the wizard and commands can be driven by a stub in tests, and
/// so the client's lifecycle stays owned by the calling workflow.
pub trait Ai {
    /// Extracts structured résumé fields from raw PDF text.
    ///
    /// # Errors
    ///
    /// Returns an error only for transport/API failures; unparseable output
    /// is reported through [`Extraction::Unparsed`].
    fn extract_resume(&self, pdf_text: &str) -> Result<Extraction>;

    /// Rewrites `text` following a free-form instruction.
    ///
    /// # Errors
    ///
    /// Returns an error for transport/API failures.
    fn rewrite_text(&self, text: &str, instruction: &str) -> Result<String>;

    /// Regenerates a single named field from the full résumé.
    ///
    /// # Errors
    ///
    /// Returns an error for transport/API failures.
    fn regenerate_field(&self, field: &str, resume: &Resume) -> Result<String>;

    /// Writes a professional summary for the résumé.
    ///
    /// # Errors
    ///
    /// Returns an error for transport/API failures.
    fn generate_summary(&self, resume: &Resume) -> Result<String>;
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}

/// Blocking chat-completion client.
pub struct AiClient {
    client: reqwest::blocking::Client,
    api_url: String,
    api_key: String,
    model: String,
}

impl AiClient {
    /// Creates a client from configuration.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if no API key is set, or an AI error if
    /// the HTTP client cannot be built.
    pub fn new(config: &Config) -> Result<Self> {
        let api_key = config.require_api_key()?.to_string();

        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client,
            api_url: config.api_url.clone(),
            api_key,
            model: config.model.clone(),
        })
    }

    /// Sends one system + user exchange and returns the reply text.
    ///
    /// # Errors
    ///
    /// Returns an AI error for transport failures, non-success statuses or an
    /// empty completion.
    pub fn call(&self, system: &str, user: &str) -> Result<String> {
        let request = ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: user,
                },
            ],
            temperature: TEMPERATURE,
        };

        debug!("Calling chat completion with model '{}'", self.model);

        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(Error::ai(format!("status {status}: {body}")));
        }

        let parsed: ChatResponse = response.json()?;
        parsed
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or_else(|| Error::ai("empty completion"))
    }
}

impl Ai for AiClient {
    fn extract_resume(&self, pdf_text: &str) -> Result<Extraction> {
        let raw = self.call(prompts::EXTRACT_SYSTEM, &prompts::extract_user(pdf_text))?;
        Ok(parse_extraction(&raw))
    }

    fn rewrite_text(&self, text: &str, instruction: &str) -> Result<String> {
        self.call(
            prompts::REWRITE_SYSTEM,
            &prompts::rewrite_user(text, instruction),
        )
    }

    fn regenerate_field(&self, field: &str, resume: &Resume) -> Result<String> {
        self.call(
            prompts::REGENERATE_SYSTEM,
            &prompts::regenerate_user(field, resume)?,
        )
    }

    fn generate_summary(&self, resume: &Resume) -> Result<String> {
        self.call(prompts::SUMMARY_SYSTEM, &prompts::summary_user(resume)?)
    }
}

/// Applies the parse-or-raw fallback to extraction output.
///
/// Fenced JSON is unfenced first. Output that is not a JSON object is kept
/// verbatim in [`Extraction::Unparsed`].
#[must_use]
pub fn parse_extraction(raw: &str) -> Extraction {
    let text = strip_json_fences(raw);
    match serde_json::from_str::<Value>(text) {
        Ok(Value::Object(map)) => Extraction::Fields(map),
        Ok(other) => Extraction::Unparsed {
            error: format!("expected a JSON object, got {}", kind_of(&other)),
            raw: raw.to_string(),
        },
        Err(e) => Extraction::Unparsed {
            error: e.to_string(),
            raw: raw.to_string(),
        },
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Strips ```json ... ``` or ``` ... ``` code fences from LLM output.
#[must_use]
pub fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    if let Some(stripped) = text.strip_prefix("```json") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map_or(stripped.trim_start(), str::trim)
    } else if let Some(stripped) = text.strip_prefix("```") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map_or(stripped.trim_start(), str::trim)
    } else {
        text
    }
}
