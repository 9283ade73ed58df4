//! Settings keys and defaults
//!
//! Keys are matched exactly against the environment and env files.

// =============================================================================
// Keys
// =============================================================================

pub const KEY_ENVIRONMENT: &str = assistant_domain::ENVIRONMENT_VAR;
pub const KEY_OPENAI_API_KEY: &str = "OPENAI_API_KEY";
pub const KEY_PORT: &str = "PORT";
pub const KEY_PROJECT_NAME: &str = "PROJECT_NAME";
pub const KEY_PROJECT_ID: &str = "PROJECT_ID";
pub const KEY_TIME_ZONE: &str = "TIME_ZONE";
pub const KEY_TIME_ZONE_UTC: &str = "TIME_ZONE_UTC";
pub const KEY_DATE_FORMAT: &str = "DATE_FORMAT";
pub const KEY_DATE_TIME_FORMAT: &str = "DATE_TIME_FORMAT";
pub const KEY_VOICE: &str = "VOICE";
pub const KEY_LOG_EVENT_TYPES: &str = "LOG_EVENT_TYPES";

// =============================================================================
// Server
// =============================================================================

/// Default server port
pub const DEFAULT_PORT: u16 = 9000;

/// Host the voice bridge binds to
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

// =============================================================================
// Project
// =============================================================================

pub const DEFAULT_PROJECT_NAME: &str = "AsistentPython";
pub const DEFAULT_PROJECT_ID: &str = "A0002";

// =============================================================================
// Time
// =============================================================================

pub const DEFAULT_TIME_ZONE: &str = "utc";
pub const DEFAULT_TIME_ZONE_UTC: &str = "utc";

/// strftime pattern for dates
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d";

/// strftime pattern for timestamps
pub const DEFAULT_DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

// =============================================================================
// OpenAI Realtime
// =============================================================================

/// Default synthesized voice
pub const DEFAULT_VOICE: &str = "alloy";

/// Realtime event types worth logging
pub const DEFAULT_LOG_EVENT_TYPES: &[&str] = &[
    "response.content.done",
    "rate_limits.updated",
    "response.done",
    "input_audio_buffer.committed",
    "input_audio_buffer.speech_stopped",
    "input_audio_buffer.speech_started",
    "session.created",
];
