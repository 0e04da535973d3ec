//! Virtual environment activation for the child process.
//!
//! Applies what `venv/bin/activate` does to a shell, but only to the
//! environment block of one [`Command`].

use std::env::JoinPathsError;
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::constants;

/// A virtual environment directory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VirtualEnv {
    root: PathBuf,
}

impl VirtualEnv {
    /// Wrap an environment directory. Relative paths are resolved against `base`.
    #[must_use]
    pub fn new(path: &Path, base: &Path) -> Self {
        let root = if path.is_absolute() {
            path.to_path_buf()
        } else {
            base.join(path)
        };
        Self { root }
    }

    /// Environment root, the value of `VIRTUAL_ENV`.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory holding the environment's executables.
    #[must_use]
    pub fn scripts_dir(&self) -> PathBuf {
        self.root.join(constants::VENV_SCRIPTS_DIR)
    }

    /// Interpreter to launch.
    ///
    /// A configured command wins; otherwise the environment's own interpreter
    /// if it exists, otherwise `python` looked up on the activated `PATH`.
    #[must_use]
    pub fn interpreter(&self, configured: Option<&str>) -> OsString {
        if let Some(cmd) = configured {
            return OsString::from(cmd);
        }
        let own = self.scripts_dir().join(constants::VENV_PYTHON);
        if own.is_file() {
            own.into_os_string()
        } else {
            OsString::from(constants::FALLBACK_PYTHON)
        }
    }

    /// `current` with the scripts directory prepended.
    ///
    /// # Errors
    ///
    /// Fails if an entry contains the platform's path separator.
    pub fn search_path(&self, current: Option<&OsStr>) -> Result<OsString, JoinPathsError> {
        let existing = current
            .map(|p| std::env::split_paths(p).collect::<Vec<_>>())
            .unwrap_or_default();
        std::env::join_paths(std::iter::once(self.scripts_dir()).chain(existing))
    }

    /// Set up `cmd` to run inside this environment.
    ///
    /// # Errors
    ///
    /// Fails if the activated `PATH` cannot be assembled.
    pub fn activate(&self, cmd: &mut Command) -> Result<(), JoinPathsError> {
        let path = self.search_path(std::env::var_os("PATH").as_deref())?;
        cmd.env("VIRTUAL_ENV", &self.root)
            .env("PATH", path)
            .env_remove("PYTHONHOME");
        Ok(())
    }
}
