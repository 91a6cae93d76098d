//! nifs: Network Interface Address Report
//!
//! Entry point for the nifs application.

use std::process::ExitCode;

use nifs::config::{Cli, ReportConfig};
use nifs::network::platform::PlatformSource;

mod app;
mod run;

use app::{exit_code, setup_tracing};

/// Main entry point.
///
/// Excluded from coverage as it's the thin wrapper around testable components.
#[cfg(not(tarpaulin_include))]
fn main() -> ExitCode {
    let cli = match Cli::try_parse_args() {
        Ok(cli) => cli,
        Err(e) => return handle_parse_error(&e),
    };

    let config = ReportConfig::from_cli(&cli);

    setup_tracing(config.log_level);
    tracing::debug!("{config}");

    let source = PlatformSource::new();
    let mut stdout = std::io::stdout().lock();

    match run::execute(&config, &source, &mut stdout) {
        Ok(count) => {
            tracing::debug!("Reported {count} address(es)");
            exit_code::SUCCESS
        }
        Err(e) if e.is_broken_pipe() => {
            tracing::debug!("Output closed early: {e}");
            exit_code::SUCCESS
        }
        Err(e) => {
            tracing::error!("{e}");
            exit_code::runtime_error()
        }
    }
}

/// Prints clap's message and maps it to an exit code.
///
/// Help and version requests arrive as errors too; they print to stdout and succeed.
fn handle_parse_error(error: &clap::Error) -> ExitCode {
    // Nothing useful can be done if the terminal itself is gone
    let _ = error.print();

    if error.use_stderr() {
        exit_code::USAGE_ERROR
    } else {
        exit_code::SUCCESS
    }
}
