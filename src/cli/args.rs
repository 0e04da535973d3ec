//! Command-line argument definitions.

use std::ffi::OsString;

use clap::Parser;

use crate::constants;
use crate::state::{Invocation, Mode};

/// Sales Dashboard Test Runner
///
/// Clap's generated help is disabled: `--help` is an ordinary flag so the
/// runner can print its own usage text and exit codes.
#[derive(Parser, Debug)]
#[command(name = constants::APP_BIN, disable_help_flag = true)]
pub struct Args {
    /// Run the comprehensive test suite instead of the core tests
    #[arg(long)]
    pub comprehensive: bool,
    /// Show usage
    #[arg(short = 'h', long)]
    pub help: bool,
}

impl Args {
    fn into_invocation(self) -> Invocation {
        if self.help {
            Invocation::Help
        } else if self.comprehensive {
            Invocation::Run(Mode::Comprehensive)
        } else {
            Invocation::Run(Mode::Standard)
        }
    }
}

/// Spellings `Args` accepts.
const KNOWN_FLAGS: [&str; 3] = ["--comprehensive", "--help", "-h"];

/// Turn raw process arguments (program name first) into an [`Invocation`].
///
/// Empty arguments are treated as absent. A bare `--` and any parse failure
/// become [`Invocation::Invalid`] naming the argument as the user typed it.
pub fn dispatch<I, T>(raw: I) -> Invocation
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut raw = raw.into_iter().map(Into::into);
    let program = raw
        .next()
        .unwrap_or_else(|| OsString::from(constants::APP_BIN));
    let rest: Vec<OsString> = raw.filter(|arg| !arg.is_empty()).collect();

    // clap takes `--` as end of options, which would silently run the suite
    if rest.iter().any(|arg| arg == "--") {
        return Invocation::Invalid("--".to_string());
    }

    match Args::try_parse_from(std::iter::once(program).chain(rest.iter().cloned())) {
        Ok(args) => args.into_invocation(),
        Err(err) => {
            tracing::debug!(kind = ?err.kind(), "argument parsing failed");
            Invocation::Invalid(offending_arg(&rest))
        }
    }
}

/// First argument that is not an exact known flag, as given.
///
/// Falls back to the first argument when every one is known but the
/// combination was rejected (a repeated flag).
fn offending_arg(rest: &[OsString]) -> String {
    rest.iter()
        .find(|arg| !KNOWN_FLAGS.iter().any(|known| *arg == known))
        .or_else(|| rest.first())
        .map(|arg| arg.to_string_lossy().into_owned())
        .unwrap_or_default()
}
