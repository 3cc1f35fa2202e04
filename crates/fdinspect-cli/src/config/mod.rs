//! Configuration management.

use anyhow::{Context as _, Result};
use directories::ProjectDirs;
use fdinspect_core::{DEFAULT_PATH, DEFAULT_RANDOM_SOURCE};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::output::OutputFormat;

/// Persistent defaults, overridden by command-line flags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// File to inspect.
    pub path: PathBuf,

    /// Device read when sampling randomness.
    pub random_source: PathBuf,

    /// Sample one random byte after streaming.
    pub sample_random: bool,

    /// Metadata output format.
    pub output_format: OutputFormat,

    /// Escape content bytes instead of writing them raw.
    pub escape: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_PATH),
            random_source: PathBuf::from(DEFAULT_RANDOM_SOURCE),
            sample_random: false,
            output_format: OutputFormat::Plain,
            escape: false,
        }
    }
}

impl Config {
    /// Get the default config file path.
    pub fn default_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("", "", "fdinspect")
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Load from `explicit` if given, otherwise from the default location.
    ///
    /// A missing default file yields defaults; a missing explicit file is an error.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load_from(path);
        }

        let Ok(path) = Self::default_path() else {
            debug!("no config directory, using defaults");
            return Ok(Self::default());
        };
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        Self::load_from(&path)
    }

    /// Load configuration from a specific file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("config: cannot read {}", path.display()))?;
        let config: Self = toml::from_str(&content)
            .with_context(|| format!("config: invalid TOML in {}", path.display()))?;

        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }
}
