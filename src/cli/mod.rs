//! Command-line interface module.
//!
//! Provides argument dispatch and the top-level run sequence.

pub mod args;
pub mod commands;
