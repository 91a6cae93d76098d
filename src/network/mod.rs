//! Network layer for enumerating interface addresses.
//!
//! This module provides types and traits for:
//! - Representing reported addresses ([`AddressRecord`], [`Family`], [`CastKind`])
//! - Querying the OS ([`InterfaceSource`])
//! - Flattening interfaces into records ([`enumerate`])
//! - Selecting records ([`filter`])
//! - Platform-specific implementations ([`platform`])

mod enumerate;
pub mod filter;
pub mod platform;
mod record;
mod source;


pub use enumerate::enumerate;
pub use record::{AddressRecord, CastKind, Family, HardwareAddr, IfNet};
pub use source::{EnumerateError, Interface, InterfaceSource};
