use std::fs;
use std::path::Path;
use std::process::Stdio;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::{tempdir, TempDir};

fn runner(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("run-tests").unwrap();
    cmd.current_dir(dir).env_remove("RUST_LOG");
    cmd
}

fn touch(dir: &Path, name: &str) {
    fs::write(dir.join(name), "").unwrap();
}

/// A project where both suites are shell scripts run through `sh`.
///
/// Each suite prints its name and the activated environment, then exits with
/// `$SUITE_EXIT` (default 0).
fn project() -> TempDir {
    let dir = tempdir().unwrap();
    let root = dir.path();
    touch(root, "requirements.txt");
    touch(root, "app.py");
    touch(root, "formatted_sales_data.csv");
    fs::write(
        root.join("simple_test.py"),
        "echo \"suite=core\"\necho \"venv=$VIRTUAL_ENV\"\necho \"path=$PATH\"\nexit ${SUITE_EXIT:-0}\n",
    )
    .unwrap();
    fs::write(
        root.join("test_app.py"),
        "echo \"suite=comprehensive\"\nexit ${SUITE_EXIT:-0}\n",
    )
    .unwrap();
    fs::write(root.join("run-tests.toml"), "interpreter = \"sh\"\n").unwrap();
    fs::create_dir(root.join("venv")).unwrap();
    dir
}

#[test]
fn test_help_in_empty_directory() {
    let dir = tempdir().unwrap();
    for flag in ["--help", "-h"] {
        runner(dir.path())
            .arg(flag)
            .assert()
            .success()
            .stdout(predicate::str::contains("Usage: run-tests"))
            .stdout(predicate::str::contains("--comprehensive"))
            .stdout(predicate::str::contains("Exit codes:"));
    }
}

#[test]
fn test_unknown_option() {
    let dir = tempdir().unwrap();
    runner(dir.path())
        .arg("--foo")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("[ERROR]"))
        .stdout(predicate::str::contains("Unknown option: --foo"))
        .stdout(predicate::str::contains("Usage: run-tests"));
}

#[test]
fn test_unknown_option_named_as_typed() {
    let dir = tempdir().unwrap();
    for arg in ["--comprehensive=1", "-hh"] {
        runner(dir.path())
            .arg(arg)
            .assert()
            .code(1)
            .stdout(predicate::str::contains(format!("Unknown option: {arg}\n")));
    }
}

#[test]
fn test_double_dash_does_not_run_tests() {
    let dir = project();
    runner(dir.path())
        .arg("--")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Unknown option: --"))
        .stdout(predicate::str::contains("Usage: run-tests"))
        .stdout(predicate::str::contains("suite=core").not());
}

/// Drops the read end of stdout as soon as the child is spawned.
fn run_with_closed_stdout(dir: &Path, arg: &str) -> std::process::Output {
    let mut child = std::process::Command::new(assert_cmd::cargo::cargo_bin("run-tests"))
        .arg(arg)
        .current_dir(dir)
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    drop(child.stdout.take());
    child.wait_with_output().unwrap()
}

#[test]
fn test_closed_stdout_keeps_exit_code() {
    let dir = tempdir().unwrap();

    let output = run_with_closed_stdout(dir.path(), "--help");
    assert_eq!(output.status.code(), Some(0));
    assert!(!String::from_utf8_lossy(&output.stderr).contains("panicked"));

    let output = run_with_closed_stdout(dir.path(), "--comprehensive=1");
    assert_eq!(output.status.code(), Some(1));
    assert!(!String::from_utf8_lossy(&output.stderr).contains("panicked"));
}

#[test]
fn test_missing_requirements_file() {
    let dir = tempdir().unwrap();
    for args in [&[][..], &["--comprehensive"][..]] {
        runner(dir.path())
            .args(args)
            .assert()
            .code(1)
            .stdout(predicate::str::contains("requirements.txt not found"));
    }
}

#[test]
fn test_missing_files_reported_together() {
    let dir = tempdir().unwrap();
    touch(dir.path(), "requirements.txt");
    touch(dir.path(), "simple_test.py");
    runner(dir.path())
        .assert()
        .code(1)
        .stdout(predicate::str::contains(
            "Missing required files: app.py, formatted_sales_data.csv",
        ));
}

#[test]
fn test_missing_environment_prints_setup_steps() {
    let dir = project();
    fs::remove_dir(dir.path().join("venv")).unwrap();
    runner(dir.path())
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Virtual environment not found"))
        .stdout(predicate::str::contains("python3 -m venv venv"))
        .stdout(predicate::str::contains("source venv/bin/activate"))
        .stdout(predicate::str::contains("pip install -r requirements.txt"));
}

#[test]
fn test_invalid_config_file() {
    let dir = project();
    fs::write(dir.path().join("run-tests.toml"), "interpreter = [").unwrap();
    runner(dir.path())
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Invalid configuration"));
}

#[cfg(unix)]
#[test]
fn test_standard_run_passes() {
    let dir = project();
    runner(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("suite=core"))
        .stdout(predicate::str::contains("suite=comprehensive").not())
        .stdout(predicate::str::contains("All tests passed!"));
}

#[cfg(unix)]
#[test]
fn test_standard_run_propagates_failure_code() {
    let dir = project();
    runner(dir.path())
        .env("SUITE_EXIT", "3")
        .assert()
        .code(3)
        .stdout(predicate::str::contains("suite=core"))
        .stdout(predicate::str::contains("Some tests failed (exit code 3)"));
}

#[cfg(unix)]
#[test]
fn test_comprehensive_runs_secondary_suite() {
    let dir = project();
    runner(dir.path())
        .arg("--comprehensive")
        .assert()
        .success()
        .stdout(predicate::str::contains("suite=comprehensive"))
        .stdout(predicate::str::contains("suite=core").not());

    runner(dir.path())
        .arg("--comprehensive")
        .env("SUITE_EXIT", "2")
        .assert()
        .code(2);
}

#[cfg(unix)]
#[test]
fn test_child_sees_activated_environment() {
    let dir = project();
    let venv = dir.path().canonicalize().unwrap().join("venv");
    let output = runner(dir.path()).output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let venv_line = stdout
        .lines()
        .find_map(|l| l.strip_prefix("venv="))
        .unwrap();
    assert_eq!(Path::new(venv_line).canonicalize().unwrap(), venv);

    let path_line = stdout
        .lines()
        .find_map(|l| l.strip_prefix("path="))
        .unwrap();
    let first = path_line.split(':').next().unwrap();
    assert_eq!(Path::new(first).parent().unwrap().canonicalize().unwrap(), venv);
}

/// Replace the `sh` override with an executable `venv/bin/python`.
///
/// The fake interpreter announces itself, exits 5 when the entry point is
/// missing, and otherwise runs the entry point as a shell script.
#[cfg(unix)]
fn use_venv_python(root: &Path) {
    use std::os::unix::fs::PermissionsExt;

    fs::remove_file(root.join("run-tests.toml")).unwrap();
    let bin = root.join("venv").join("bin");
    fs::create_dir_all(&bin).unwrap();
    let python = bin.join("python");
    fs::write(
        &python,
        "#!/bin/sh\necho \"interpreter=venv-python\"\n[ -f \"$1\" ] || exit 5\n. \"./$1\"\n",
    )
    .unwrap();
    fs::set_permissions(&python, fs::Permissions::from_mode(0o755)).unwrap();
}

#[cfg(unix)]
#[test]
fn test_default_interpreter_is_venv_python() {
    let dir = project();
    use_venv_python(dir.path());
    runner(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("interpreter=venv-python"))
        .stdout(predicate::str::contains("suite=core"));
}

#[cfg(unix)]
#[test]
fn test_missing_entry_point_warns_and_passes_status_through() {
    let dir = project();
    use_venv_python(dir.path());
    fs::remove_file(dir.path().join("test_app.py")).unwrap();
    runner(dir.path())
        .arg("--comprehensive")
        .assert()
        .code(5)
        .stdout(predicate::str::contains("[WARNING]"))
        .stdout(predicate::str::contains("test_app.py not found"))
        .stdout(predicate::str::contains("interpreter=venv-python"))
        .stdout(predicate::str::contains("Some tests failed (exit code 5)"));
}
