//! Top-level run sequence: dispatch, checks, execution.

use std::path::Path;

use color_eyre::eyre::WrapErr;
use color_eyre::Result;

use crate::config::RunnerConfig;
use crate::constants;
use crate::core::{preflight, runner, venv::VirtualEnv};
use crate::error::PreflightError;
use crate::state::{Invocation, Mode};
use crate::ui::{self, usage};

/// Carry out `invocation` and return the process exit code.
///
/// # Errors
///
/// Only for failures outside the runner's own taxonomy: the working
/// directory cannot be resolved or the interpreter cannot be started.
pub fn execute(invocation: &Invocation) -> Result<u8> {
    match invocation {
        Invocation::Help => {
            usage::print_usage();
            Ok(0)
        }
        Invocation::Invalid(arg) => {
            ui::error(&format!("Unknown option: {arg}"));
            usage::print_usage();
            Ok(1)
        }
        Invocation::Run(mode) => {
            let root =
                std::env::current_dir().wrap_err("Failed to resolve the current directory")?;
            run_in(&root, *mode)
        }
    }
}

/// Check preconditions under `root`, then run the tests for `mode`.
///
/// # Errors
///
/// See [`runner::run_tests`].
pub fn run_in(root: &Path, mode: Mode) -> Result<u8> {
    tracing::debug!(root = %root.display(), %mode, "starting test run");

    let config = match RunnerConfig::load(root) {
        Ok(config) => config,
        Err(err) => {
            ui::error(&err.to_string());
            return Ok(1);
        }
    };

    let venv_dir = match preflight::check(root, &config) {
        Ok(dir) => dir,
        Err(err) => {
            report(&err);
            return Ok(1);
        }
    };

    let venv = VirtualEnv::new(&venv_dir, root);
    runner::run_tests(root, &venv, &config, mode)
}

fn report(err: &PreflightError) {
    ui::error(&err.to_string());
    if let PreflightError::MissingEnvironment { .. } = err {
        ui::detail(constants::MSG_CREATE_VENV);
        for step in constants::VENV_SETUP_COMMANDS {
            ui::detail(&format!("  {step}"));
        }
    }
}
