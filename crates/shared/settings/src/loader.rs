//! One-shot settings bootstrap.
//!
//! Resolves the env-file layout under a base directory, picks the active
//! environment and builds [`Settings`] from the layered sources.

use std::path::{Path, PathBuf};

use assistant_domain::{EnvironmentType, BASE_ENV_FILE_NAME, ENVIRONMENT_VAR, ENVS_DIR_NAME};
use tracing::info;

use crate::error::ConfigResult;
use crate::settings::Settings;
use crate::source::{EnvFile, EnvSource, LayeredSource, ProcessEnv};

/// Workspace root, fixed relative to this crate's manifest.
pub fn default_base_dir() -> PathBuf {
    let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../..");
    dir.canonicalize().unwrap_or(dir)
}

/// Loads [`Settings`] from `<base_dir>/envs` and a process environment.
pub struct SettingsLoader<E = ProcessEnv> {
    base_dir: PathBuf,
    env: E,
}

impl SettingsLoader<ProcessEnv> {
    /// Loader over the default base directory and the real process environment
    pub fn new() -> Self {
        Self {
            base_dir: default_base_dir(),
            env: ProcessEnv,
        }
    }
}

impl Default for SettingsLoader<ProcessEnv> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: EnvSource> SettingsLoader<E> {
    /// Replace the base directory
    pub fn with_base_dir(mut self, base_dir: impl Into<PathBuf>) -> Self {
        self.base_dir = base_dir.into();
        self
    }

    /// Replace the process environment source
    pub fn with_env<F: EnvSource>(self, env: F) -> SettingsLoader<F> {
        SettingsLoader {
            base_dir: self.base_dir,
            env,
        }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Directory holding the env files
    pub fn envs_dir(&self) -> PathBuf {
        self.base_dir.join(ENVS_DIR_NAME)
    }

    /// Path of the shared base env file
    pub fn base_env_file_path(&self) -> PathBuf {
        self.envs_dir().join(BASE_ENV_FILE_NAME)
    }

    /// Path of the env file for `environment`
    pub fn env_file_path(&self, environment: EnvironmentType) -> ConfigResult<PathBuf> {
        let file_name = EnvironmentType::get_env_file_name(environment.name())?;
        Ok(self.envs_dir().join(file_name))
    }

    /// Run the bootstrap sequence.
    ///
    /// 1. Read the base env file into the process layer.
    /// 2. Validate `ENVIRONMENT` from the process layer.
    /// 3. Read the environment-specific file.
    /// 4. Build and validate the settings.
    pub fn load(&self) -> ConfigResult<Settings> {
        info!("BASE_DIR: {}", self.base_dir.display());
        info!("ENVS_DIR: {}", self.envs_dir().display());

        let base_path = self.base_env_file_path();
        info!("ENV_BASE_FILE_PATH: {}", base_path.display());
        let source = LayeredSource::new(&self.env, EnvFile::read(&base_path)?);
        info!("ENV_BASE_FILE_PATH loaded");

        let environment = self.resolve_environment(&source)?;

        let env_path = self.env_file_path(environment)?;
        info!("ENV_FILE_PATH: {}", env_path.display());
        let source = source.with_specific(EnvFile::read(&env_path)?);

        let settings = Settings::from_source(environment, &source)?;
        info!(
            environment = %settings.environment(),
            port = settings.port(),
            "Settings loaded"
        );
        Ok(settings)
    }

    fn resolve_environment(&self, source: &LayeredSource<'_>) -> ConfigResult<EnvironmentType> {
        let value = source.process_var(ENVIRONMENT_VAR);
        info!("ENVIRONMENT: {}", value.as_deref().unwrap_or("None"));
        Ok(EnvironmentType::check_env_value(value.as_deref())?)
    }
}
