//! Domain-level constants.
//!
//! Names and file-layout conventions shared by every environment.

// =============================================================================
// Environment Selection
// =============================================================================

/// Process variable naming the active environment
pub const ENVIRONMENT_VAR: &str = "ENVIRONMENT";

/// Rendering used in error messages when `ENVIRONMENT` is unset
pub const UNSET_ENVIRONMENT: &str = "None";

// =============================================================================
// Env Files
// =============================================================================

/// Prefix shared by every env file name
pub const ENV_FILE_PREFIX: &str = ".env";

/// Directory (under the base directory) holding the env files
pub const ENVS_DIR_NAME: &str = "envs";

/// File loaded for every environment, before the specific one
pub const BASE_ENV_FILE_NAME: &str = ".env.base";
