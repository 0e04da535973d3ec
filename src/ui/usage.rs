//! Usage text for `--help` and unknown options.

use std::fmt::Write as _;

use crate::constants;

/// Build the usage text: options, examples and the exit-code legend.
#[must_use]
pub fn usage() -> String {
    let bin = constants::APP_BIN;
    let mut text = String::with_capacity(640);

    let _ = writeln!(text, "{}\n", constants::APP_TITLE);
    let _ = writeln!(text, "Usage: {bin} [OPTION]\n");

    let _ = writeln!(text, "Options:");
    let _ = writeln!(
        text,
        "  --comprehensive   Run the comprehensive test suite ({})",
        constants::COMPREHENSIVE_ENTRY
    );
    let _ = writeln!(text, "  -h, --help        Show this help message\n");

    let _ = writeln!(text, "Examples:");
    let _ = writeln!(
        text,
        "  {bin:<27} Run the core tests ({})",
        constants::STANDARD_ENTRY
    );
    let _ = writeln!(
        text,
        "  {:<27} Run all tests including dashboard checks",
        format!("{bin} --comprehensive")
    );
    let _ = writeln!(text, "  {:<27} Show this help\n", format!("{bin} --help"));

    let _ = writeln!(text, "Exit codes:");
    let _ = writeln!(text, "  0         All tests passed");
    let _ = writeln!(text, "  non-zero  The test command's own exit status");
    let _ = writeln!(
        text,
        "  1         A precondition failed or the option is unknown"
    );

    text
}

/// Print usage to standard output.
pub fn print_usage() {
    super::print_text(&usage());
}
