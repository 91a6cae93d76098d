//! Line-oriented report printing.
//!
//! One line per selected record, fields separated by single spaces:
//!
//! ```text
//! <interface> <address> [unicast|multicast] [<mac>|NOMAC]
//! ```

use std::io::{self, Write};

use thiserror::Error;

use crate::config::defaults;
use crate::network::AddressRecord;
use crate::network::filter::{FilterChain, RecordFilter};

/// Error type for writing the report.
#[derive(Debug, Error)]
pub enum ReportError {
    /// The output stream rejected a write.
    #[error("Failed to write report: {0}")]
    Write(#[from] io::Error),
}

impl ReportError {
    /// Returns true if the reader of the output went away (e.g. `nifs | head`).
    #[must_use]
    pub fn is_broken_pipe(&self) -> bool {
        match self {
            Self::Write(e) => e.kind() == io::ErrorKind::BrokenPipe,
        }
    }
}

/// Which optional columns to print.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineFormat {
    /// Print "unicast" or "multicast".
    pub show_cast: bool,
    /// Print the MAC address, or the `NOMAC` placeholder.
    pub show_mac: bool,
}

impl Default for LineFormat {
    fn default() -> Self {
        Self {
            show_cast: defaults::SHOW_CAST,
            show_mac: defaults::SHOW_MAC,
        }
    }
}

impl LineFormat {
    /// Formats one record as a report line, without the trailing newline.
    #[must_use]
    pub fn format(&self, record: &AddressRecord) -> String {
        let mut line = format!("{} {}", record.interface, record.address);

        if self.show_cast {
            line.push(' ');
            line.push_str(&record.cast.to_string());
        }

        if self.show_mac {
            line.push(' ');
            match &record.hardware_address {
                Some(mac) => line.push_str(&mac.to_string()),
                None => line.push_str(defaults::NO_MAC),
            }
        }

        line
    }
}

/// A filter plus a line format.
///
/// # Examples
///
/// ```
/// use nifs::network::{AddressRecord, CastKind};
/// use nifs::network::filter::Selection;
/// use nifs::report::{LineFormat, Report};
///
/// let report = Report::new(Selection::ALL.to_chain(), LineFormat::default());
/// let records = [AddressRecord::new("lo0", None, "127.0.0.1/8", CastKind::Unicast)];
///
/// let mut out = Vec::new();
/// report.write(&records, &mut out).unwrap();
///
/// assert_eq!(out, b"lo0 127.0.0.1/8 unicast NOMAC\n");
/// ```
#[derive(Debug)]
pub struct Report<F = FilterChain> {
    filter: F,
    format: LineFormat,
}

impl<F: RecordFilter> Report<F> {
    /// Creates a report from a filter and a line format.
    #[must_use]
    pub const fn new(filter: F, format: LineFormat) -> Self {
        Self { filter, format }
    }

    /// Returns the records that pass the filter, in input order.
    pub fn select<'a>(
        &'a self,
        records: &'a [AddressRecord],
    ) -> impl Iterator<Item = &'a AddressRecord> + 'a {
        records.iter().filter(|record| self.filter.matches(record))
    }

    /// Writes one line per selected record and returns the number of lines.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::Write`] if writing to `out` fails.
    pub fn write<W: Write>(&self, records: &[AddressRecord], out: &mut W) -> Result<usize, ReportError> {
        let mut written = 0;
        for record in self.select(records) {
            writeln!(out, "{}", self.format.format(record))?;
            written += 1;
        }
        out.flush()?;
        Ok(written)
    }
}
