//! Error types for the checks that run before any test is spawned.

use std::path::PathBuf;

use thiserror::Error;

/// A precondition that stops the run before the tests start.
///
/// Every variant maps to exit code 1.
#[derive(Debug, Error)]
pub enum PreflightError {
    /// The marker file is absent, so this is probably not the project root.
    #[error("{marker} not found. {hint}", hint = crate::constants::MSG_NOT_PROJECT_ROOT)]
    WrongDirectory { marker: String },

    /// One or more required project files are absent. Names keep declaration order.
    #[error("Missing required files: {}", .missing.join(", "))]
    MissingProjectFiles { missing: Vec<String> },

    /// The virtual environment directory is absent.
    #[error("Virtual environment not found at {}", .path.display())]
    MissingEnvironment { path: PathBuf },
}

/// The project configuration file exists but cannot be used.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid configuration in {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}
