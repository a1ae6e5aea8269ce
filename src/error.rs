use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using the library's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Comprehensive error types for the resume-forge library.
#[derive(Error, Debug, Clone)]
#[non_exhaustive]
pub enum Error {
    /// A list-typed résumé field holds a non-sequence value.
    #[error("Field '{field}' must be a list, found {found}")]
    TypeMismatch {
        /// Name of the offending field
        field: String,
        /// JSON type actually found
        found: String,
    },

    /// The résumé names a theme the renderer does not know.
    #[error("Unknown theme: '{theme}' (expected premium, minimal, creative or sidebar)")]
    UnknownTheme {
        /// The unrecognized theme value
        theme: String,
    },

    /// IO error with context about the file path.
    #[error("IO error accessing '{path}': {message}")]
    Io {
        /// Path where the error occurred
        path: PathBuf,
        /// Error message
        message: String,
    },

    /// Template rendering error.
    #[error("Failed to render template '{template}': {message}")]
    Template {
        /// Template name
        template: String,
        /// Error message
        message: String,
    },

    /// Configuration validation error.
    #[error("Invalid configuration: {message}")]
    Config {
        /// Detailed error message
        message: String,
    },

    /// JSON serialization error.
    #[error("Serialization error: {message}")]
    Serialization {
        /// Error message
        message: String,
    },

    /// AI collaborator failure (HTTP transport or API-level).
    #[error("AI request failed: {message}")]
    Ai {
        /// Error message
        message: String,
    },
}

impl Error {
    /// Creates a type-mismatch validation error.
    #[must_use]
    pub fn type_mismatch(field: impl Into<String>, found: impl Into<String>) -> Self {
        Self::TypeMismatch {
            field: field.into(),
            found: found.into(),
        }
    }

    /// Creates an unknown-theme error.
    #[must_use]
    pub fn unknown_theme(theme: impl Into<String>) -> Self {
        Self::UnknownTheme {
            theme: theme.into(),
        }
    }

    /// Creates an IO error with path context.
    #[must_use]
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: source.to_string(),
        }
    }

    /// Creates a configuration error.
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Creates a template error.
    #[must_use]
    pub fn template(template: impl Into<String>, source: tera::Error) -> Self {
        Self::Template {
            template: template.into(),
            message: source.to_string(),
        }
    }

    /// Creates an AI collaborator error.
    #[must_use]
    pub fn ai(message: impl Into<String>) -> Self {
        Self::Ai {
            message: message.into(),
        }
    }

    /// Returns true if this is a validation type-mismatch error.
    #[must_use]
    pub const fn is_type_mismatch(&self) -> bool {
        matches!(self, Self::TypeMismatch { .. })
    }

    /// Returns true if this is an unknown-theme error.
    #[must_use]
    pub const fn is_unknown_theme(&self) -> bool {
        matches!(self, Self::UnknownTheme { .. })
    }
}

// Conversion implementations for convenient error handling
impl From<tera::Error> for Error {
    fn from(e: tera::Error) -> Self {
        Self::Template {
            template: "unknown".to_string(),
            message: e.to_string(),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Self::Serialization {
            message: e.to_string(),
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        Self::Ai {
            message: e.to_string(),
        }
    }
}
