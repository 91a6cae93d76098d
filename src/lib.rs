//! nifs: Network Interface Address Report
//!
//! A library for enumerating the IP addresses of a host's network
//! interfaces and printing them as a filterable, line-oriented report.

pub mod config;
pub mod network;
pub mod report;
