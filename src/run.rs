//! Application execution logic.
//!
//! One pass: enumerate, filter, print.

use std::io::Write;

use thiserror::Error;

use nifs::config::ReportConfig;
use nifs::network::{InterfaceSource, enumerate};
use nifs::report::{Report, ReportError};

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;

/// Error type for runtime execution failures.
#[derive(Debug, Error)]
pub enum RunError {
    /// Writing the report failed.
    #[error(transparent)]
    Report(#[from] ReportError),
}

impl RunError {
    /// Returns true if stdout was closed by its reader.
    #[must_use]
    pub fn is_broken_pipe(&self) -> bool {
        match self {
            Self::Report(e) => e.is_broken_pipe(),
        }
    }
}

/// Enumerates `source` and writes the configured report to `out`.
///
/// Returns the number of lines written.
///
/// # Errors
///
/// Returns [`RunError::Report`] if the report cannot be written. Enumeration
/// failures are not errors; they only shrink the report.
pub fn execute<S, W>(config: &ReportConfig, source: &S, out: &mut W) -> Result<usize, RunError>
where
    S: InterfaceSource + ?Sized,
    W: Write,
{
    let records = enumerate(source);
    tracing::debug!("Enumerated {} address record(s)", records.len());

    let chain = config.selection.to_chain();
    tracing::trace!("Filter chain: {chain:?}");

    let report = Report::new(chain, config.format);
    Ok(report.write(&records, out)?)
}
