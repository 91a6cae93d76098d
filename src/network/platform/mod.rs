//! Platform-specific interface source implementations.
//!
//! This module provides conditional compilation for platform-specific
//! implementations of the [`InterfaceSource`](super::InterfaceSource) trait.
//!
//! # Platform Support
//!
//! - **Unix**: Interfaces and unicast addresses via `getifaddrs` (through `pnet`).
//!   Multicast groups are read from `/proc/net/igmp` and `/proc/net/igmp6` on
//!   Linux; other Unix systems report none.
//! - **Windows**: Uses `GetAdaptersAddresses` API via the `windows` crate.

#[cfg(target_os = "linux")]
pub mod igmp;

#[cfg(unix)]
mod unix;

#[cfg(windows)]
mod windows;

#[cfg(unix)]
pub use unix::UnixSource;

#[cfg(windows)]
pub use windows::WindowsSource;

// Re-export platform-specific source as PlatformSource for convenience
#[cfg(unix)]
pub use unix::UnixSource as PlatformSource;

#[cfg(windows)]
pub use windows::WindowsSource as PlatformSource;
