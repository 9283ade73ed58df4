//! Settings sources: the process environment and parsed env files.
//!
//! Nothing here writes to the real process environment. Env files are read
//! into maps and layered in memory.

use std::collections::HashMap;
use std::path::Path;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

use crate::error::{ConfigError, ConfigResult};

/// Read access to process-level variables.
///
/// Lookups are exact and case-sensitive.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait EnvSource {
    /// Value of `key`, or `None` when unset
    fn var(&self, key: &str) -> Option<String>;
}

/// The real process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        // Non-unicode values count as unset
        std::env::var(key).ok()
    }
}

impl EnvSource for HashMap<String, String> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

/// Key/value pairs parsed from one env file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvFile {
    values: HashMap<String, String>,
}

impl EnvFile {
    /// Parse the env file at `path`.
    ///
    /// A missing file yields an empty set; a malformed or unreadable one is
    /// an error. Later duplicates of a key win, as in a dotenv load.
    pub fn read(path: &Path) -> ConfigResult<Self> {
        let iter = match dotenvy::from_path_iter(path) {
            Ok(iter) => iter,
            Err(e) if e.not_found() => {
                tracing::warn!("Env file not found, skipping: {}", path.display());
                return Ok(Self::default());
            }
            Err(e) => return Err(ConfigError::env_file(path, e)),
        };

        let mut values = HashMap::new();
        for item in iter {
            let (key, value) = item.map_err(|e| ConfigError::env_file(path, e))?;
            values.insert(key, value);
        }

        tracing::debug!("Read {} entries from {}", values.len(), path.display());
        Ok(Self { values })
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for EnvFile {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Merged view over every settings source.
///
/// Lookup order, highest first: process environment, base file,
/// environment-specific file. Field defaults apply when all three miss.
/// The base file sits in the process layer: it fills gaps in the process
/// environment but never replaces a variable that is already set.
pub struct LayeredSource<'a> {
    process: &'a dyn EnvSource,
    base: EnvFile,
    specific: EnvFile,
}

impl<'a> LayeredSource<'a> {
    pub fn new(process: &'a dyn EnvSource, base: EnvFile) -> Self {
        Self {
            process,
            base,
            specific: EnvFile::default(),
        }
    }

    /// Attach the environment-specific file
    pub fn with_specific(mut self, specific: EnvFile) -> Self {
        self.specific = specific;
        self
    }

    /// Lookup in the process layer only (process environment, then base file)
    pub fn process_var(&self, key: &str) -> Option<String> {
        self.process
            .var(key)
            .or_else(|| self.base.get(key).map(str::to_string))
    }

    /// Lookup across every layer
    pub fn get(&self, key: &str) -> Option<String> {
        self.process_var(key)
            .or_else(|| self.specific.get(key).map(str::to_string))
    }
}
