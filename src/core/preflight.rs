//! Filesystem checks that must pass before any test is spawned.
//!
//! The three checks run in order and the first failure stops the run. The
//! required-file check itself collects every missing name before failing.

use std::path::{Path, PathBuf};

use crate::config::RunnerConfig;
use crate::error::PreflightError;

/// Run all checks against `root`.
///
/// Returns the path of the virtual environment directory on success.
///
/// # Errors
///
/// Returns the first failing [`PreflightError`].
pub fn check(root: &Path, config: &RunnerConfig) -> Result<PathBuf, PreflightError> {
    check_project_root(root, &config.marker_file)?;
    check_required_files(root, &config.required_files)?;
    check_environment(root, &config.venv_dir)
}

fn check_project_root(root: &Path, marker: &str) -> Result<(), PreflightError> {
    let found = root.join(marker).is_file();
    tracing::debug!(marker, found, "checking project root marker");
    if found {
        Ok(())
    } else {
        Err(PreflightError::WrongDirectory {
            marker: marker.to_string(),
        })
    }
}

fn check_required_files(root: &Path, required: &[String]) -> Result<(), PreflightError> {
    let missing = missing_files(root, required);
    if missing.is_empty() {
        Ok(())
    } else {
        Err(PreflightError::MissingProjectFiles { missing })
    }
}

/// Names from `required` with no file under `root`, in the order given.
#[must_use]
pub fn missing_files(root: &Path, required: &[String]) -> Vec<String> {
    required
        .iter()
        .filter(|name| {
            let present = root.join(name.as_str()).is_file();
            tracing::debug!(file = %name, present, "checking required file");
            !present
        })
        .cloned()
        .collect()
}

fn check_environment(root: &Path, venv_dir: &Path) -> Result<PathBuf, PreflightError> {
    let path = root.join(venv_dir);
    let found = path.is_dir();
    tracing::debug!(path = %path.display(), found, "checking virtual environment");
    if found {
        Ok(path)
    } else {
        Err(PreflightError::MissingEnvironment { path: venv_dir.to_path_buf() })
    }
}
