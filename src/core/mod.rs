//! Precondition checks, environment activation and test execution.

pub mod preflight;
pub mod runner;
pub mod venv;
