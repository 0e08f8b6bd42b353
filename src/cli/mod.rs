//! CLI module
//!
//! Command-line interface for listing groups and exporting members.
//!
//! # Modes
//!
//! - `--list` - groups the token's user belongs to
//! - `--groupId <id>` - members of one group, optionally saved with `--file`

mod commands;
mod runner;

pub use commands::Cli;
pub use runner::{execute, report_error, RunReport, Runner};

#[cfg(test)]
mod tests;
