//! Console color assignments.
//!
//! Status tags use the basic ANSI palette so they render on any terminal.

use crossterm::style::Color;

/// Informational progress.
pub const INFO: Color = Color::Blue;
/// Passing run.
pub const SUCCESS: Color = Color::Green;
/// Non-fatal notice.
pub const WARNING: Color = Color::Yellow;
/// Failed check or failing run.
pub const ERROR: Color = Color::Red;
/// Separator lines.
pub const SEPARATOR: Color = Color::DarkGrey;
