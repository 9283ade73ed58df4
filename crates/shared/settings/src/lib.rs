//! Environment-aware settings for the voice assistant.
//!
//! This crate provides:
//! - Env-file and process-environment sources with fixed precedence
//! - The one-shot settings loader
//! - The typed, read-only settings record
//! - Unified error handling for startup failures
//!
//! ```no_run
//! use assistant_settings::SettingsLoader;
//!
//! let settings = SettingsLoader::new().load()?;
//! println!("serving on {}", settings.server_addr());
//! # Ok::<(), assistant_settings::ConfigError>(())
//! ```

pub mod constants;
pub mod error;
pub mod loader;
pub mod settings;
pub mod source;

pub use error::{ConfigError, ConfigResult, FieldError};
pub use loader::{default_base_dir, SettingsLoader};
pub use settings::Settings;
pub use source::{EnvFile, EnvSource, LayeredSource, ProcessEnv};

#[cfg(any(test, feature = "test-utils"))]
pub use source::MockEnvSource;

pub use assistant_domain::EnvironmentType;
