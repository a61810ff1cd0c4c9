//! Optional `fragility.toml` configuration.
//!
//! ```toml
//! source = "https://example.org/api/disaster-curves"
//! timeout_secs = 30
//! precision = 4
//! ```

use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::Deserialize;
use tracing::debug;

use crate::error::ConfigError;

/// Config file looked up in the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "fragility.toml";

/// Environment variable naming the curve source.
pub const SOURCE_ENV: &str = "FRAGILITY_SOURCE";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Path or http(s) URL of the curve JSON.
    pub source: Option<String>,
    /// HTTP request timeout.
    pub timeout_secs: u64,
    /// Decimal places for damage ratios in tables.
    pub precision: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            source: None,
            timeout_secs: 30,
            precision: 4,
        }
    }
}

impl Settings {
    pub fn from_toml_str(content: &str, path: &Path) -> Result<Self, ConfigError> {
        let settings: Settings = toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        if settings.timeout_secs == 0 {
            return Err(ConfigError::ZeroTimeout);
        }
        Ok(settings)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content, path)
    }

    /// Load settings from `explicit`, else `fragility.toml` in `dir` if it
    /// exists, else defaults. An explicit path that cannot be read is an error.
    pub fn load(explicit: Option<&Path>, dir: &Path) -> Result<Self, ConfigError> {
        let path = match explicit {
            Some(p) => p.to_path_buf(),
            None => {
                let candidate = dir.join(DEFAULT_CONFIG_FILE);
                if !candidate.is_file() {
                    debug!("no config file, using defaults");
                    return Ok(Self::default());
                }
                candidate
            }
        };
        debug!(path = %path.display(), "reading config");
        Self::from_file(&path)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Resolve the curve source: CLI flag, then environment, then config file.
    pub fn resolve_source(
        &self,
        flag: Option<&str>,
        env: Option<String>,
    ) -> Result<String, ConfigError> {
        flag.map(str::to_string)
            .or(env.filter(|s| !s.trim().is_empty()))
            .or_else(|| self.source.clone())
            .ok_or(ConfigError::NoSource)
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
