//! Project-level runner configuration.
//!
//! An optional `run-tests.toml` next to `requirements.txt` can rename the
//! files and commands the runner uses. Every key is optional; missing keys
//! fall back to the project's standard layout.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::constants;
use crate::error::ConfigError;
use crate::state::Mode;

/// File names and commands used for one run.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RunnerConfig {
    /// File whose presence marks the project root.
    pub marker_file: String,
    /// Files that must all exist before tests run, in reporting order.
    pub required_files: Vec<String>,
    /// Virtual environment directory, relative to the project root.
    pub venv_dir: PathBuf,
    /// Script run by default.
    pub standard_entry: String,
    /// Script run with `--comprehensive`.
    pub comprehensive_entry: String,
    /// Interpreter command; resolved from the environment when unset.
    pub interpreter: Option<String>,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            marker_file: constants::MARKER_FILE.to_string(),
            required_files: constants::REQUIRED_FILES
                .iter()
                .map(ToString::to_string)
                .collect(),
            venv_dir: PathBuf::from(constants::VENV_DIR),
            standard_entry: constants::STANDARD_ENTRY.to_string(),
            comprehensive_entry: constants::COMPREHENSIVE_ENTRY.to_string(),
            interpreter: None,
        }
    }
}

impl RunnerConfig {
    /// Load `run-tests.toml` from `root`, or the defaults when it is absent.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file exists but cannot be read or parsed.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let path = root.join(constants::CONFIG_FILE_NAME);
        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no config file, using defaults");
                return Ok(Self::default());
            }
            Err(source) => return Err(ConfigError::Read { path, source }),
        };

        let config = Self::from_toml(&content).map_err(|source| ConfigError::Parse {
            path: path.clone(),
            source,
        })?;
        tracing::debug!(path = %path.display(), ?config, "loaded config file");
        Ok(config)
    }

    /// Parse configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns the TOML error for malformed input or unknown keys.
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Test script for the given mode.
    #[must_use]
    pub fn entry_point(&self, mode: Mode) -> &str {
        match mode {
            Mode::Standard => &self.standard_entry,
            Mode::Comprehensive => &self.comprehensive_entry,
        }
    }
}
