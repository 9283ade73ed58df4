//! Domain-level errors.
//!
//! These errors describe a bad environment selection. They are independent
//! of how the settings are loaded or reported.

use thiserror::Error;

/// Errors raised by the environment registry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The value is not one of the registry's canonical names
    #[error("{value} is not a valid Environment value. Valid values are: {valid}")]
    InvalidEnvironment { value: String, valid: String },

    /// No registry entry maps the name to an env file
    #[error("{0} has no associated env file")]
    MissingEnvFile(String),
}

impl DomainError {
    /// Create an invalid environment error listing the accepted names
    pub fn invalid_environment(value: impl Into<String>, valid: &[&str]) -> Self {
        DomainError::InvalidEnvironment {
            value: value.into(),
            valid: valid.join(", "),
        }
    }

    /// Create a missing env file error
    pub fn missing_env_file(name: impl Into<String>) -> Self {
        DomainError::MissingEnvFile(name.into())
    }

    /// Stable error code for logs and exit reporting
    pub fn code(&self) -> &'static str {
        match self {
            DomainError::InvalidEnvironment { .. } => "INVALID_ENVIRONMENT",
            DomainError::MissingEnvFile(_) => "MISSING_ENV_FILE",
        }
    }
}

/// Result type alias for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
