//! Deployment environment registry.
//!
//! Every environment has a canonical name (the value expected in
//! `ENVIRONMENT`) and a short suffix token used to build its env file name.
//! Only the canonical name takes part in validation and equality.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::{ENV_FILE_PREFIX, UNSET_ENVIRONMENT};
use crate::error::{DomainError, DomainResult};

/// Closed set of deployment environments
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum EnvironmentType {
    Local,
    Development,
    Staging,
    Production,
    Testing,
    Docker,
}

impl EnvironmentType {
    /// Registry entries, in declaration order
    const ALL: [EnvironmentType; 6] = [
        EnvironmentType::Local,
        EnvironmentType::Development,
        EnvironmentType::Staging,
        EnvironmentType::Production,
        EnvironmentType::Testing,
        EnvironmentType::Docker,
    ];

    /// All registry entries, in declaration order
    pub fn all() -> &'static [EnvironmentType] {
        &Self::ALL
    }

    /// Canonical name, e.g. `production`
    pub fn name(&self) -> &'static str {
        match self {
            EnvironmentType::Local => "local",
            EnvironmentType::Development => "development",
            EnvironmentType::Staging => "staging",
            EnvironmentType::Production => "production",
            EnvironmentType::Testing => "testing",
            EnvironmentType::Docker => "docker",
        }
    }

    /// Suffix token, e.g. `prd`
    pub fn suffix(&self) -> &'static str {
        match self {
            EnvironmentType::Local => "local",
            EnvironmentType::Development => "dev",
            EnvironmentType::Staging => "stg",
            EnvironmentType::Production => "prd",
            EnvironmentType::Testing => "test",
            EnvironmentType::Docker => "docker",
        }
    }

    /// Env file for this environment, e.g. `.env.prd`
    pub fn env_file_name(&self) -> String {
        format!("{}.{}", ENV_FILE_PREFIX, self.suffix())
    }

    /// Canonical names of every entry, in declaration order
    pub fn valid_envs() -> Vec<&'static str> {
        Self::ALL.iter().map(|env| env.name()).collect()
    }

    /// Check whether `value` is exactly one of the canonical names.
    pub fn is_valid_env(value: &str) -> bool {
        Self::lookup(value).is_some()
    }

    /// Validate an environment indicator.
    ///
    /// A missing indicator fails the same way as an unknown one. The error
    /// lists every canonical name.
    pub fn check_env_value(value: Option<&str>) -> DomainResult<EnvironmentType> {
        value.and_then(Self::lookup).ok_or_else(|| {
            DomainError::invalid_environment(
                value.unwrap_or(UNSET_ENVIRONMENT),
                &Self::valid_envs(),
            )
        })
    }

    /// Resolve the env file name for a canonical name.
    ///
    /// Callers normally validate first, so the error path only guards
    /// against names that skipped [`check_env_value`](Self::check_env_value).
    pub fn get_env_file_name(env_name: &str) -> DomainResult<String> {
        Self::lookup(env_name)
            .map(|env| env.env_file_name())
            .ok_or_else(|| DomainError::missing_env_file(env_name))
    }

    /// Check if this is the production environment
    pub fn is_production(&self) -> bool {
        matches!(self, EnvironmentType::Production)
    }

    fn lookup(value: &str) -> Option<EnvironmentType> {
        Self::ALL.iter().copied().find(|env| env.name() == value)
    }
}

impl FromStr for EnvironmentType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::check_env_value(Some(s))
    }
}

impl TryFrom<String> for EnvironmentType {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<EnvironmentType> for String {
    fn from(env: EnvironmentType) -> Self {
        env.name().to_string()
    }
}

impl fmt::Display for EnvironmentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXPECTED: [(&str, &str); 6] = [
        ("local", ".env.local"),
        ("development", ".env.dev"),
        ("staging", ".env.stg"),
        ("production", ".env.prd"),
        ("testing", ".env.test"),
        ("docker", ".env.docker"),
    ];

    #[test]
    fn test_every_canonical_name_is_accepted_and_resolved() {
        for (name, file) in EXPECTED {
            let env = EnvironmentType::check_env_value(Some(name)).unwrap();
            assert_eq!(env.name(), name);
            assert_eq!(EnvironmentType::get_env_file_name(name).unwrap(), file);
            assert_eq!(env.env_file_name(), file);
        }
    }

    #[test]
    fn test_valid_envs_keep_declaration_order() {
        assert_eq!(
            EnvironmentType::valid_envs(),
            vec!["local", "development", "staging", "production", "testing", "docker"]
        );
        assert_eq!(EnvironmentType::all().len(), 6);
    }

    #[test]
    fn test_unknown_value_lists_all_names() {
        let err = EnvironmentType::check_env_value(Some("qa")).unwrap_err();
        assert_eq!(
            err.to_string(),
            "qa is not a valid Environment value. Valid values are: \
             local, development, staging, production, testing, docker"
        );
        assert_eq!(err.code(), "INVALID_ENVIRONMENT");
    }

    #[test]
    fn test_missing_value_is_rejected() {
        let err = EnvironmentType::check_env_value(None).unwrap_err();
        assert!(err.to_string().starts_with("None is not a valid Environment value"));
    }

    #[test]
    fn test_suffix_and_case_variants_are_not_names() {
        for value in ["prd", "dev", "stg", "test", "Production", "LOCAL", " local", ""] {
            assert!(!EnvironmentType::is_valid_env(value), "{value:?} accepted");
            assert!(EnvironmentType::check_env_value(Some(value)).is_err());
        }
    }

    #[test]
    fn test_file_name_for_unknown_name_fails() {
        let err = EnvironmentType::get_env_file_name("prd").unwrap_err();
        assert_eq!(err, DomainError::MissingEnvFile("prd".to_string()));
        assert_eq!(err.to_string(), "prd has no associated env file");
    }

    #[test]
    fn test_parse_and_display_use_canonical_name() {
        let env: EnvironmentType = "staging".parse().unwrap();
        assert_eq!(env, EnvironmentType::Staging);
        assert_eq!(env.to_string(), "staging");
        assert!("stg".parse::<EnvironmentType>().is_err());
    }

    #[test]
    fn test_serde_uses_canonical_name() {
        let json = serde_json::to_string(&EnvironmentType::Production).unwrap();
        assert_eq!(json, "\"production\"");

        let env: EnvironmentType = serde_json::from_str("\"docker\"").unwrap();
        assert_eq!(env, EnvironmentType::Docker);
        assert!(serde_json::from_str::<EnvironmentType>("\"prd\"").is_err());
    }

    #[test]
    fn test_is_production() {
        assert!(EnvironmentType::Production.is_production());
        assert!(!EnvironmentType::Staging.is_production());
    }
}
