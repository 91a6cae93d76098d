//! Report configuration derived from CLI flags.

use std::fmt;

use tracing::Level;

use crate::network::filter::Selection;
use crate::report::LineFormat;

use super::cli::Cli;
use super::defaults;

/// Configuration for one report run.
///
/// Built once at startup; every combination of flags is valid, so
/// construction cannot fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportConfig {
    /// Which records to report
    pub selection: Selection,

    /// Which optional columns to print
    pub format: LineFormat,

    /// Diagnostic log level
    pub log_level: Level,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            selection: Selection::ALL,
            format: LineFormat::default(),
            log_level: defaults::LOG_LEVEL,
        }
    }
}

impl fmt::Display for ReportConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Config {{ {}, show_cast: {}, show_mac: {}, log_level: {} }}",
            self.selection, self.format.show_cast, self.format.show_mac, self.log_level,
        )
    }
}

impl ReportConfig {
    /// Creates the report configuration from parsed CLI flags.
    #[must_use]
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            selection: Selection::from_toggles(
                cli.ipv4,
                cli.ipv6,
                cli.unicast,
                cli.multicast,
                cli.hw,
                cli.sw,
            ),
            format: LineFormat {
                show_cast: !cli.no_cast,
                show_mac: cli.show_mac(),
            },
            log_level: defaults::log_level(cli.verbose),
        }
    }
}
