//! Configuration layer for nifs.
//!
//! This module provides:
//! - CLI argument parsing ([`Cli`])
//! - The report configuration built from it ([`ReportConfig`])
//! - Default values ([`defaults`])
//!
//! There are no configuration files and no environment variables: the
//! command line is the only source.
//!
//! # Toggle Semantics
//!
//! Filter flags come in pairs (`--ipv4`/`--ipv6`, `--unicast`/`--multicast`,
//! `--hw`/`--sw`). Giving one side restricts the report to it; giving
//! neither or both reports both sides.
//!
//! `--mac` and `--no-mac` override each other, the last one given wins.

mod cli;
pub mod defaults;
mod validated;

#[cfg(test)]
mod cli_tests;

pub use cli::Cli;
pub use validated::ReportConfig;
