//! Unified error handling for settings loading.
//!
//! Every variant is fatal at startup. `code()` gives a stable identifier
//! for logs and the CLI.

use std::fmt;
use std::path::PathBuf;

use assistant_domain::DomainError;
use thiserror::Error;

/// A single rejected settings field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Settings key, e.g. `OPENAI_API_KEY`
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Error for a required field absent from every source
    pub fn required(field: impl Into<String>) -> Self {
        Self::new(field, "field required")
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Settings loading errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    // Environment selection
    #[error("{0}")]
    InvalidEnvironment(String),

    #[error("{0}")]
    MissingEnvFile(String),

    // Sources
    #[error("Failed to read env file {}: {source}", .path.display())]
    EnvFile {
        path: PathBuf,
        #[source]
        source: dotenvy::Error,
    },

    // Schema
    #[error("Invalid settings: {}", join_field_errors(.0))]
    Validation(Vec<FieldError>),
}

fn join_field_errors(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl ConfigError {
    /// Get error code for logs and exit reporting
    pub fn code(&self) -> &'static str {
        match self {
            ConfigError::InvalidEnvironment(_) => "INVALID_ENVIRONMENT",
            ConfigError::MissingEnvFile(_) => "MISSING_ENV_FILE",
            ConfigError::EnvFile { .. } => "ENV_FILE_ERROR",
            ConfigError::Validation(_) => "VALIDATION_ERROR",
        }
    }

    /// Rejected fields, empty unless this is a validation error
    pub fn field_errors(&self) -> &[FieldError] {
        match self {
            ConfigError::Validation(errors) => errors,
            _ => &[],
        }
    }

    pub fn env_file(path: impl Into<PathBuf>, source: dotenvy::Error) -> Self {
        ConfigError::EnvFile {
            path: path.into(),
            source,
        }
    }
}

// =============================================================================
// Domain Error Conversion
// =============================================================================

impl From<DomainError> for ConfigError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::InvalidEnvironment { .. } => {
                ConfigError::InvalidEnvironment(err.to_string())
            }
            DomainError::MissingEnvFile(_) => ConfigError::MissingEnvFile(err.to_string()),
        }
    }
}

impl From<validator::ValidationErrors> for ConfigError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut fields: Vec<FieldError> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errors)| {
                let field = field.to_uppercase();
                errors.iter().map(move |error| {
                    let message = error
                        .message
                        .as_ref()
                        .map(|msg| msg.to_string())
                        .unwrap_or_else(|| error.code.to_string());
                    FieldError::new(field.clone(), message)
                })
            })
            .collect();
        fields.sort_by(|a, b| a.field.cmp(&b.field));
        ConfigError::Validation(fields)
    }
}

/// Result type alias
pub type ConfigResult<T> = Result<T, ConfigError>;
