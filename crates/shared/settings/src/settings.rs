//! Typed, read-only application settings.

use std::borrow::Cow;
use std::fmt;

use assistant_domain::EnvironmentType;
use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, TimeZone};
use serde::Serialize;
use validator::{Validate, ValidationError};

use crate::constants::{
    DEFAULT_DATE_FORMAT, DEFAULT_DATE_TIME_FORMAT, DEFAULT_LOG_EVENT_TYPES, DEFAULT_PORT,
    DEFAULT_PROJECT_ID, DEFAULT_PROJECT_NAME, DEFAULT_SERVER_HOST, DEFAULT_TIME_ZONE,
    DEFAULT_TIME_ZONE_UTC, DEFAULT_VOICE, KEY_DATE_FORMAT, KEY_DATE_TIME_FORMAT,
    KEY_ENVIRONMENT, KEY_LOG_EVENT_TYPES, KEY_OPENAI_API_KEY, KEY_PORT, KEY_PROJECT_ID,
    KEY_PROJECT_NAME, KEY_TIME_ZONE, KEY_TIME_ZONE_UTC, KEY_VOICE,
};
use crate::error::{ConfigError, ConfigResult, FieldError};
use crate::loader::SettingsLoader;
use crate::source::LayeredSource;

/// Application settings.
///
/// Built once at startup and handed to consumers by reference. Fields are
/// private so the record stays read-only after construction.
#[derive(Clone, Serialize, Validate)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct Settings {
    environment: EnvironmentType,

    // OpenAI
    #[serde(skip_serializing)]
    openai_api_key: String,

    // Server
    port: u16,

    // Project
    project_name: String,
    project_id: String,

    // Time
    time_zone: String,
    time_zone_utc: String,
    #[validate(custom(function = "validate_strftime"))]
    date_format: String,
    #[validate(custom(function = "validate_strftime"))]
    date_time_format: String,

    // Realtime voice
    voice: String,
    log_event_types: Vec<String>,
}

impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("environment", &self.environment)
            .field("openai_api_key", &"[REDACTED]")
            .field("port", &self.port)
            .field("project_name", &self.project_name)
            .field("project_id", &self.project_id)
            .field("time_zone", &self.time_zone)
            .field("time_zone_utc", &self.time_zone_utc)
            .field("date_format", &self.date_format)
            .field("date_time_format", &self.date_time_format)
            .field("voice", &self.voice)
            .field("log_event_types", &self.log_event_types)
            .finish()
    }
}

impl Settings {
    /// Load settings for the default base directory and the real process
    /// environment.
    pub fn load() -> ConfigResult<Self> {
        SettingsLoader::new().load()
    }

    /// Build settings from layered sources.
    ///
    /// `active` is the already validated environment and doubles as the
    /// default for the `ENVIRONMENT` field. Every rejected field is
    /// reported, not just the first.
    pub fn from_source(active: EnvironmentType, source: &LayeredSource<'_>) -> ConfigResult<Self> {
        let mut errors = Vec::new();

        let environment = match source.get(KEY_ENVIRONMENT) {
            Some(value) => value.parse::<EnvironmentType>().unwrap_or_else(|e| {
                errors.push(FieldError::new(KEY_ENVIRONMENT, e.to_string()));
                active
            }),
            None => active,
        };

        let openai_api_key = source.get(KEY_OPENAI_API_KEY).unwrap_or_else(|| {
            errors.push(FieldError::required(KEY_OPENAI_API_KEY));
            String::new()
        });

        let port = match source.get(KEY_PORT) {
            Some(value) => value.trim().parse().unwrap_or_else(|_| {
                errors.push(FieldError::new(
                    KEY_PORT,
                    format!("invalid port number: {value:?}"),
                ));
                DEFAULT_PORT
            }),
            None => DEFAULT_PORT,
        };

        let log_event_types = match source.get(KEY_LOG_EVENT_TYPES) {
            Some(value) => serde_json::from_str(&value).unwrap_or_else(|e| {
                errors.push(FieldError::new(
                    KEY_LOG_EVENT_TYPES,
                    format!("expected a JSON list of strings: {e}"),
                ));
                Vec::new()
            }),
            None => DEFAULT_LOG_EVENT_TYPES
                .iter()
                .map(|event| event.to_string())
                .collect(),
        };

        let or_default = |key: &str, default: &str| {
            source.get(key).unwrap_or_else(|| default.to_string())
        };

        let settings = Self {
            environment,
            openai_api_key,
            port,
            project_name: or_default(KEY_PROJECT_NAME, DEFAULT_PROJECT_NAME),
            project_id: or_default(KEY_PROJECT_ID, DEFAULT_PROJECT_ID),
            time_zone: or_default(KEY_TIME_ZONE, DEFAULT_TIME_ZONE),
            time_zone_utc: or_default(KEY_TIME_ZONE_UTC, DEFAULT_TIME_ZONE_UTC),
            date_format: or_default(KEY_DATE_FORMAT, DEFAULT_DATE_FORMAT),
            date_time_format: or_default(KEY_DATE_TIME_FORMAT, DEFAULT_DATE_TIME_FORMAT),
            voice: or_default(KEY_VOICE, DEFAULT_VOICE),
            log_event_types,
        };

        if let Err(e) = settings.validate() {
            errors.extend(ConfigError::from(e).field_errors().iter().cloned());
        }

        if errors.is_empty() {
            Ok(settings)
        } else {
            Err(ConfigError::Validation(errors))
        }
    }

    pub fn environment(&self) -> EnvironmentType {
        self.environment
    }

    pub fn openai_api_key(&self) -> &str {
        &self.openai_api_key
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    pub fn time_zone(&self) -> &str {
        &self.time_zone
    }

    pub fn time_zone_utc(&self) -> &str {
        &self.time_zone_utc
    }

    pub fn date_format(&self) -> &str {
        &self.date_format
    }

    pub fn date_time_format(&self) -> &str {
        &self.date_time_format
    }

    pub fn voice(&self) -> &str {
        &self.voice
    }

    pub fn log_event_types(&self) -> &[String] {
        &self.log_event_types
    }

    /// Check whether a realtime event type should be logged
    pub fn should_log_event(&self, event_type: &str) -> bool {
        self.log_event_types.iter().any(|t| t == event_type)
    }

    /// Render a date with `DATE_FORMAT`
    pub fn format_date<Tz: TimeZone>(&self, dt: &DateTime<Tz>) -> String
    where
        Tz::Offset: fmt::Display,
    {
        dt.format(&self.date_format).to_string()
    }

    /// Render a timestamp with `DATE_TIME_FORMAT`
    pub fn format_date_time<Tz: TimeZone>(&self, dt: &DateTime<Tz>) -> String
    where
        Tz::Offset: fmt::Display,
    {
        dt.format(&self.date_time_format).to_string()
    }

    /// Get the full server address.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", DEFAULT_SERVER_HOST, self.port)
    }
}

/// Reject strftime patterns chrono cannot render.
fn validate_strftime(pattern: &str) -> Result<(), ValidationError> {
    if StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error)) {
        let mut err = ValidationError::new("strftime");
        err.message = Some(Cow::from(format!("invalid strftime pattern: {pattern:?}")));
        return Err(err);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use chrono::Utc;

    use super::*;
    use crate::source::EnvFile;

    fn process(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn build(env: &HashMap<String, String>) -> ConfigResult<Settings> {
        let source = LayeredSource::new(env, EnvFile::default());
        Settings::from_source(EnvironmentType::Testing, &source)
    }

    #[test]
    fn test_defaults_apply() {
        let env = process(&[("OPENAI_API_KEY", "sk-test")]);
        let settings = build(&env).unwrap();

        assert_eq!(settings.environment(), EnvironmentType::Testing);
        assert_eq!(settings.openai_api_key(), "sk-test");
        assert_eq!(settings.port(), 9000);
        assert_eq!(settings.project_name(), "AsistentPython");
        assert_eq!(settings.project_id(), "A0002");
        assert_eq!(settings.time_zone(), "utc");
        assert_eq!(settings.time_zone_utc(), "utc");
        assert_eq!(settings.date_format(), "%Y-%m-%d");
        assert_eq!(settings.date_time_format(), "%Y-%m-%d %H:%M:%S");
        assert_eq!(settings.voice(), "alloy");
        assert_eq!(settings.log_event_types().len(), 7);
        assert_eq!(settings.log_event_types()[0], "response.content.done");
        assert_eq!(settings.log_event_types()[6], "session.created");
    }

    #[test]
    fn test_missing_api_key_fails() {
        let err = build(&process(&[])).unwrap_err();
        assert_eq!(err.code(), "VALIDATION_ERROR");
        assert_eq!(
            err.field_errors(),
            &[FieldError::required("OPENAI_API_KEY")]
        );
    }

    #[test]
    fn test_empty_api_key_is_accepted() {
        let settings = build(&process(&[("OPENAI_API_KEY", "")])).unwrap();
        assert_eq!(settings.openai_api_key(), "");
    }

    #[test]
    fn test_invalid_port_is_reported() {
        let env = process(&[("OPENAI_API_KEY", "sk"), ("PORT", "nine thousand")]);
        let err = build(&env).unwrap_err();
        assert_eq!(err.field_errors().len(), 1);
        assert_eq!(err.field_errors()[0].field, "PORT");

        let env = process(&[("OPENAI_API_KEY", "sk"), ("PORT", "70000")]);
        assert!(build(&env).is_err());
    }

    #[test]
    fn test_log_event_types_parse_from_json() {
        let env = process(&[
            ("OPENAI_API_KEY", "sk"),
            ("LOG_EVENT_TYPES", r#"["session.created", "error"]"#),
        ]);
        let settings = build(&env).unwrap();
        assert_eq!(settings.log_event_types(), &["session.created", "error"]);
        assert!(settings.should_log_event("error"));
        assert!(!settings.should_log_event("response.done"));
    }

    #[test]
    fn test_log_event_types_reject_non_list() {
        let env = process(&[("OPENAI_API_KEY", "sk"), ("LOG_EVENT_TYPES", "session.created")]);
        let err = build(&env).unwrap_err();
        assert_eq!(err.field_errors()[0].field, "LOG_EVENT_TYPES");
    }

    #[test]
    fn test_all_field_errors_are_collected() {
        let env = process(&[("PORT", "-1"), ("DATE_FORMAT", "%Q")]);
        let err = build(&env).unwrap_err();
        let fields: Vec<&str> = err.field_errors().iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["OPENAI_API_KEY", "PORT", "DATE_FORMAT"]);
    }

    #[test]
    fn test_environment_field_must_be_canonical() {
        let env = process(&[("OPENAI_API_KEY", "sk"), ("ENVIRONMENT", "prd")]);
        let err = build(&env).unwrap_err();
        assert_eq!(err.field_errors()[0].field, "ENVIRONMENT");
    }

    #[test]
    fn test_format_helpers_use_configured_patterns() {
        let env = process(&[("OPENAI_API_KEY", "sk"), ("DATE_FORMAT", "%d/%m/%Y")]);
        let settings = build(&env).unwrap();
        let dt = Utc.with_ymd_and_hms(2024, 3, 9, 14, 5, 7).unwrap();

        assert_eq!(settings.format_date(&dt), "09/03/2024");
        assert_eq!(settings.format_date_time(&dt), "2024-03-09 14:05:07");
    }

    #[test]
    fn test_debug_and_serialize_hide_api_key() {
        let settings = build(&process(&[("OPENAI_API_KEY", "sk-secret")])).unwrap();

        let debug = format!("{:?}", settings);
        assert!(!debug.contains("sk-secret"));
        assert!(debug.contains("[REDACTED]"));

        let json = serde_json::to_value(&settings).unwrap();
        assert!(json.get("OPENAI_API_KEY").is_none());
        assert_eq!(json["ENVIRONMENT"], "testing");
        assert_eq!(json["PORT"], 9000);
        assert_eq!(json["TIME_ZONE_UTC"], "utc");
    }

    #[test]
    fn test_server_addr() {
        let settings = build(&process(&[("OPENAI_API_KEY", "sk"), ("PORT", "8080")])).unwrap();
        assert_eq!(settings.server_addr(), "0.0.0.0:8080");
    }
}
