use crate::error::{Error, Result};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

/// Contact details shown in the sidebar theme.
///
/// Every key is optional; an absent key simply omits the corresponding
/// line when rendered.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Contact {
    /// Phone number
    pub phone: Option<String>,
    /// Email address
    pub email: Option<String>,
    /// City / country line
    pub location: Option<String>,
}

/// A résumé under construction.
///
/// The four section fields checked by [`Resume::validate`] (`experience`,
/// `projects`, `education`, `skills`) plus `languages` and `hobbies` are kept
/// as raw JSON values: user- and AI-sourced data is often slightly malformed,
/// and the model deliberately accepts it as-is. Validation is a cheap
/// top-level list check, not a schema check; malformed inner records surface
/// later as rendering errors.
///
/// `theme` stays a plain string so that an unrecognized value only fails when
/// a render is actually attempted.
///
/// Field declaration order is the canonical key order of the JSON wire format
/// produced by [`Resume::to_json`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Resume {
    /// Full name
    pub name: String,
    /// Job title / headline
    pub title: String,
    /// Free-form professional summary
    pub summary: String,
    /// Work history: list of `{role, company, period, bullets}` records
    pub experience: Value,
    /// Personal projects: list of `{name, period, description}` records
    pub projects: Value,
    /// Education: list of `{degree, school, period}` records
    pub education: Value,
    /// Flat list of skills
    pub skills: Value,
    /// Flat list of languages
    pub languages: Value,
    /// Flat list of hobbies
    pub hobbies: Value,
    /// Contact details (sidebar theme only)
    pub contact: Contact,
    /// Base64-encoded photo bytes, empty meaning "no photo"
    pub photo_base64: String,
    /// Theme name: premium, minimal, creative or sidebar
    pub theme: String,
    /// Sidebar accent color: green, teal or mono
    pub sidebar_color: String,
}

impl Default for Resume {
    fn default() -> Self {
        Self {
            name: String::new(),
            title: String::new(),
            summary: String::new(),
            experience: Value::Array(Vec::new()),
            projects: Value::Array(Vec::new()),
            education: Value::Array(Vec::new()),
            skills: Value::Array(Vec::new()),
            languages: Value::Array(Vec::new()),
            hobbies: Value::Array(Vec::new()),
            contact: Contact::default(),
            photo_base64: String::new(),
            theme: "premium".to_string(),
            sidebar_color: "teal".to_string(),
        }
    }
}

impl Resume {
    /// Creates an empty résumé with the default theme.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks that every section field holds a sequence.
    ///
    /// This is intentionally shallow: inner record shapes are not inspected,
    /// so an experience entry missing its `role` key passes here and fails at
    /// render time instead.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TypeMismatch`] naming the first non-list field.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("experience", &self.experience),
            ("projects", &self.projects),
            ("education", &self.education),
            ("skills", &self.skills),
        ] {
            if !value.is_array() {
                return Err(Error::type_mismatch(name, json_type_name(value)));
            }
        }
        Ok(())
    }

    /// Bulk last-write-wins assignment from an untyped key→value map.
    ///
    /// Each key naming a known field overwrites that field; unknown keys are
    /// dropped silently. Callers routinely pass AI-sourced maps containing
    /// extra or garbled keys and rely on the silent drop. Section fields are
    /// stored verbatim with no shape check; text fields only accept strings.
    pub fn merge(&mut self, updates: &Map<String, Value>) {
        for (key, value) in updates {
            self.set_field(key, value);
        }
    }

    /// Allow-list typed setter backing [`Resume::merge`].
    fn set_field(&mut self, key: &str, value: &Value) {
        match key {
            "name" => set_text(&mut self.name, value),
            "title" => set_text(&mut self.title, value),
            "summary" => set_text(&mut self.summary, value),
            "experience" => self.experience = value.clone(),
            "projects" => self.projects = value.clone(),
            "education" => self.education = value.clone(),
            "skills" => self.skills = value.clone(),
            "languages" => self.languages = value.clone(),
            "hobbies" => self.hobbies = value.clone(),
            "contact" => {
                if let Ok(contact) = serde_json::from_value(value.clone()) {
                    self.contact = contact;
                }
            }
            "photo_base64" => set_text(&mut self.photo_base64, value),
            "theme" => set_text(&mut self.theme, value),
            "sidebar_color" => set_text(&mut self.sidebar_color, value),
            _ => debug!("Ignoring unknown field '{}' in merge", key),
        }
    }

    /// Encodes raw image bytes as base64 and stores them.
    ///
    /// No size limit and no content sniffing; the renderer embeds the result
    /// under a fixed JPEG MIME type regardless of the actual format.
    pub fn set_photo(&mut self, bytes: &[u8]) {
        self.photo_base64 = STANDARD.encode(bytes);
    }

    /// Returns true iff a photo is attached.
    #[must_use]
    pub fn has_photo(&self) -> bool {
        !self.photo_base64.is_empty()
    }

    /// Serializes to a JSON value with the canonical key order.
    ///
    /// # Errors
    ///
    /// Returns a serialization error if the conversion fails.
    pub fn to_value(&self) -> Result<Value> {
        serde_json::to_value(self).map_err(Error::from)
    }

    /// Serializes to a pretty JSON string: 2-space indent, fixed key order,
    /// non-ASCII characters left unescaped so names in any script stay
    /// legible. This is the wire format exchanged with the AI collaborator
    /// and saved to disk.
    ///
    /// # Errors
    ///
    /// Returns a serialization error if the conversion fails.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(Error::from)
    }

    /// Builds a résumé from an arbitrary JSON value.
    ///
    /// Starts from an empty résumé and merges, so unknown keys are dropped
    /// and missing keys keep their defaults. A non-object value yields the
    /// default résumé.
    #[must_use]
    pub fn from_value(value: &Value) -> Self {
        let mut resume = Self::new();
        if let Value::Object(map) = value {
            resume.merge(map);
        }
        resume
    }
}

/// Overwrites a text field, ignoring non-string values.
fn set_text(field: &mut String, value: &Value) {
    if let Value::String(s) = value {
        *field = s.clone();
    }
}

/// Human-readable JSON type name for error messages.
fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
