//! Application-wide constants.
//!
//! File names, command defaults and console messages used by the runner.

// === Application Metadata ===

/// Binary name shown in usage text.
pub const APP_BIN: &str = "run-tests";
/// Human-readable title printed at the top of the usage text.
pub const APP_TITLE: &str = "Sales Dashboard Test Runner";

// === Project Layout Defaults ===

/// File whose presence marks the project root.
pub const MARKER_FILE: &str = "requirements.txt";
/// Files that must exist before any test run.
pub const REQUIRED_FILES: [&str; 3] = ["app.py", "simple_test.py", "formatted_sales_data.csv"];
/// Virtual environment directory name.
pub const VENV_DIR: &str = "venv";
/// Entry point for the default (core) test run.
pub const STANDARD_ENTRY: &str = "simple_test.py";
/// Entry point for `--comprehensive`.
pub const COMPREHENSIVE_ENTRY: &str = "test_app.py";
/// Optional per-project configuration file.
pub const CONFIG_FILE_NAME: &str = "run-tests.toml";

// === Virtual Environment Layout ===

/// Script directory inside a virtual environment.
#[cfg(windows)]
pub const VENV_SCRIPTS_DIR: &str = "Scripts";
#[cfg(not(windows))]
pub const VENV_SCRIPTS_DIR: &str = "bin";

/// Interpreter executable inside the script directory.
#[cfg(windows)]
pub const VENV_PYTHON: &str = "python.exe";
#[cfg(not(windows))]
pub const VENV_PYTHON: &str = "python";

/// Interpreter looked up on `PATH` when the environment has none.
pub const FALLBACK_PYTHON: &str = "python";

// === Console Layout ===

/// Width of the separator line around a test run.
pub const SEPARATOR_WIDTH: usize = 60;
/// Character the separator is drawn with.
pub const SEPARATOR_CHAR: char = '=';

// === Messages ===

pub const MSG_NOT_PROJECT_ROOT: &str = "Please run this script from the project root directory";
pub const MSG_CREATE_VENV: &str = "Please create it first:";
pub const MSG_RUN_STANDARD: &str = "Running core functionality tests...";
pub const MSG_RUN_COMPREHENSIVE: &str = "Running comprehensive test suite...";
pub const MSG_ACTIVATING: &str = "Activating virtual environment...";
pub const MSG_TESTS_PASSED: &str = "All tests passed!";
pub const MSG_TESTS_FAILED: &str = "Some tests failed";

/// Commands that set up the environment from scratch.
pub const VENV_SETUP_COMMANDS: [&str; 3] = [
    "python3 -m venv venv",
    "source venv/bin/activate",
    "pip install -r requirements.txt",
];
