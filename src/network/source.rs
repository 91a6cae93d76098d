//! Interface source trait and error types.

use std::io;
use std::net::IpAddr;

use thiserror::Error;

use super::{HardwareAddr, IfNet};

/// Error type for OS interface queries.
///
/// Describes what went wrong without dictating recovery strategy.
/// The enumerator decides how each failure is handled.
#[derive(Debug, Error)]
pub enum EnumerateError {
    /// Windows API call failed.
    #[cfg(windows)]
    #[error("Windows API error: {0}")]
    WindowsApi(#[from] windows::core::Error),

    /// Reading an OS-provided table failed.
    #[error("Failed to read {context}: {source}")]
    Io {
        /// What was being read.
        context: String,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The interface is no longer reported by the OS.
    #[error("Interface '{name}' not found")]
    InterfaceNotFound {
        /// Name of the missing interface.
        name: String,
    },
}

impl EnumerateError {
    /// Creates an `InterfaceNotFound` error.
    #[must_use]
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::InterfaceNotFound { name: name.into() }
    }
}

/// A network interface as reported by the OS.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interface {
    /// OS interface index.
    pub index: u32,
    /// Interface name (e.g. "eth0", or the friendly name on Windows).
    pub name: String,
    /// Hardware address, if the interface has a non-zero one.
    pub hardware_address: Option<HardwareAddr>,
}

impl Interface {
    /// Creates a new interface description.
    #[must_use]
    pub fn new(index: u32, name: impl Into<String>, hardware_address: Option<HardwareAddr>) -> Self {
        Self {
            index,
            name: name.into(),
            hardware_address,
        }
    }
}

/// Trait for querying interfaces and their addresses from the OS.
///
/// Mirrors the shape of the underlying OS calls: one listing call, then one
/// call per interface and address kind. Mock implementations let the
/// enumerator be tested without touching the host.
pub trait InterfaceSource {
    /// Lists all network interfaces.
    ///
    /// # Errors
    ///
    /// Returns [`EnumerateError`] if the OS cannot list interfaces.
    fn interfaces(&self) -> Result<Vec<Interface>, EnumerateError>;

    /// Returns the unicast addresses assigned to `interface`.
    ///
    /// # Errors
    ///
    /// Returns [`EnumerateError`] if the OS query for this interface fails.
    fn unicast_addrs(&self, interface: &Interface) -> Result<Vec<IfNet>, EnumerateError>;

    /// Returns the multicast groups `interface` has joined.
    ///
    /// # Errors
    ///
    /// Returns [`EnumerateError`] if the OS query for this interface fails.
    fn multicast_addrs(&self, interface: &Interface) -> Result<Vec<IpAddr>, EnumerateError>;
}

impl<T: InterfaceSource + ?Sized> InterfaceSource for &T {
    fn interfaces(&self) -> Result<Vec<Interface>, EnumerateError> {
        (*self).interfaces()
    }

    fn unicast_addrs(&self, interface: &Interface) -> Result<Vec<IfNet>, EnumerateError> {
        (*self).unicast_addrs(interface)
    }

    fn multicast_addrs(&self, interface: &Interface) -> Result<Vec<IpAddr>, EnumerateError> {
        (*self).multicast_addrs(interface)
    }
}
