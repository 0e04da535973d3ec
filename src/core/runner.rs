//! Runs the selected test entry point and adopts its exit status.

use std::path::Path;
use std::process::{Command, ExitStatus};
use std::time::Instant;

use color_eyre::eyre::WrapErr;
use color_eyre::Result;

use super::venv::VirtualEnv;
use crate::config::RunnerConfig;
use crate::constants;
use crate::state::Mode;
use crate::ui;

/// Run the tests for `mode` inside `venv`, with `root` as working directory.
///
/// Child stdio is inherited. Returns the exit code this process should use.
///
/// # Errors
///
/// Fails if the environment cannot be activated or the interpreter cannot be
/// started at all. A failing test run is not an error.
pub fn run_tests(root: &Path, venv: &VirtualEnv, config: &RunnerConfig, mode: Mode) -> Result<u8> {
    let entry = config.entry_point(mode);

    ui::info(match mode {
        Mode::Standard => constants::MSG_RUN_STANDARD,
        Mode::Comprehensive => constants::MSG_RUN_COMPREHENSIVE,
    });
    if !root.join(entry).is_file() {
        ui::warning(&format!("{entry} not found; the interpreter will report it"));
    }

    ui::info(constants::MSG_ACTIVATING);
    let interpreter = venv.interpreter(config.interpreter.as_deref());
    let mut cmd = Command::new(&interpreter);
    cmd.arg(entry).current_dir(root);
    venv.activate(&mut cmd)
        .wrap_err("Failed to build PATH for the virtual environment")?;

    tracing::debug!(
        ?interpreter,
        entry,
        %mode,
        venv = %venv.root().display(),
        "spawning test command"
    );
    ui::separator();
    let started = Instant::now();
    let status = cmd.status().wrap_err_with(|| {
        format!(
            "Failed to start {} {entry}",
            Path::new(&interpreter).display()
        )
    })?;
    let elapsed = started.elapsed();
    ui::separator();

    let code = exit_code(status);
    tracing::debug!(?status, code, "test command finished");
    if status.success() {
        ui::success(constants::MSG_TESTS_PASSED);
    } else {
        ui::error(&format!("{} (exit code {code})", constants::MSG_TESTS_FAILED));
    }
    ui::info(&format!("Finished in {:.2}s", elapsed.as_secs_f64()));

    Ok(code)
}

/// Map a child's status to this process's exit code.
///
/// Codes in `0..=255` pass through. A Unix signal `n` becomes `128 + n`, as a
/// shell would report it. Anything else becomes 1.
#[must_use]
pub fn exit_code(status: ExitStatus) -> u8 {
    if let Some(code) = status.code() {
        return u8::try_from(code).unwrap_or(1);
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return u8::try_from(128 + signal).unwrap_or(1);
        }
    }

    1
}
