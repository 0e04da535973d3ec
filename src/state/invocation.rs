//! What a single run of the binary was asked to do.

/// Which test entry point to run.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub enum Mode {
    /// Core functionality tests.
    #[default]
    Standard,
    /// The full suite, including the dashboard layout tests.
    Comprehensive,
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mode::Standard => write!(f, "standard"),
            Mode::Comprehensive => write!(f, "comprehensive"),
        }
    }
}

/// Outcome of argument dispatch.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Invocation {
    /// Check preconditions, then run the tests for this mode.
    Run(Mode),
    /// Print usage and exit successfully.
    Help,
    /// Unrecognized option; carries the text as given.
    Invalid(String),
}
