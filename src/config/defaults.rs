//! Default values for configuration options.
//!
//! Centralized constants to avoid magic values scattered across the codebase.

use tracing::Level;

/// Placeholder printed in the MAC column for interfaces without one.
pub const NO_MAC: &str = "NOMAC";

/// Whether the unicast/multicast column is printed by default.
pub const SHOW_CAST: bool = true;

/// Whether the MAC column is printed by default.
pub const SHOW_MAC: bool = true;

/// Log level when no `-v` flag is given.
pub const LOG_LEVEL: Level = Level::WARN;

/// Maps the number of `-v` flags to a log level.
#[must_use]
pub const fn log_level(verbosity: u8) -> Level {
    match verbosity {
        0 => LOG_LEVEL,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    }
}
