//! run-tests - Sales Dashboard Test Runner
//!
//! Checks that the project layout and virtual environment are in place, then
//! runs the Python test suite inside the environment and exits with its status.

mod cli;
mod config;
mod constants;
mod core;
mod error;
mod state;
mod theme;
mod ui;

use std::process::ExitCode;

use color_eyre::Result;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> Result<ExitCode> {
    color_eyre::install()?;
    init_tracing();

    let invocation = cli::args::dispatch(std::env::args_os());
    tracing::debug!(?invocation, "dispatched arguments");

    let code = cli::commands::execute(&invocation)?;
    Ok(ExitCode::from(code))
}

/// Diagnostics go to stderr; `RUST_LOG` overrides the default `warn` filter.
fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .init();
}
