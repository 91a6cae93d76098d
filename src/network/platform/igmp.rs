//! Linux multicast group tables (`/proc/net/igmp`, `/proc/net/igmp6`).
//!
//! `/proc/net/igmp` lists interfaces on unindented lines and their IPv4
//! groups on indented lines below them, as 8 hex digits in the kernel's
//! native byte order:
//!
//! ```text
//! Idx	Device    : Count Querier	Group    Users Timer	Reporter
//! 1	lo        :     1      V3
//! 				010000E0     1 0:00000000		0
//! ```
//!
//! `/proc/net/igmp6` has one group per line, as 32 hex digits in network order:
//!
//! ```text
//! 1    lo              ff020000000000000000000000000001     1 0000000C 0
//! ```

use std::io;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::path::Path;

use crate::network::EnumerateError;

/// Path of the IPv4 group table.
pub const IGMP_PATH: &str = "/proc/net/igmp";

/// Path of the IPv6 group table.
pub const IGMP6_PATH: &str = "/proc/net/igmp6";

/// Contents of both group tables, read once and queried per interface.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Memberships {
    igmp: Option<String>,
    igmp6: Option<String>,
}

impl Memberships {
    /// Wraps already-read table contents; `None` means the table is absent.
    #[must_use]
    pub const fn new(igmp: Option<String>, igmp6: Option<String>) -> Self {
        Self { igmp, igmp6 }
    }

    /// Reads both tables from `/proc`.
    ///
    /// A missing table (e.g. IPv6 disabled) contributes no groups.
    ///
    /// # Errors
    ///
    /// Returns [`EnumerateError::Io`] if a table exists but cannot be read.
    pub fn read() -> Result<Self, EnumerateError> {
        Ok(Self::new(
            read_table(Path::new(IGMP_PATH))?,
            read_table(Path::new(IGMP6_PATH))?,
        ))
    }

    /// Returns the IPv4 then IPv6 groups joined by `interface`.
    #[must_use]
    pub fn groups(&self, interface: &str) -> Vec<IpAddr> {
        let v4 = self
            .igmp
            .as_deref()
            .map(|content| parse_igmp(content, interface))
            .unwrap_or_default();
        let v6 = self
            .igmp6
            .as_deref()
            .map(|content| parse_igmp6(content, interface))
            .unwrap_or_default();

        v4.into_iter()
            .map(IpAddr::V4)
            .chain(v6.into_iter().map(IpAddr::V6))
            .collect()
    }
}

fn read_table(path: &Path) -> Result<Option<String>, EnumerateError> {
    match std::fs::read_to_string(path) {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            tracing::trace!("{} not present", path.display());
            Ok(None)
        }
        Err(source) => Err(EnumerateError::Io {
            context: path.display().to_string(),
            source,
        }),
    }
}

/// Parses `/proc/net/igmp` content, returning the groups of `interface`.
#[must_use]
pub fn parse_igmp(content: &str, interface: &str) -> Vec<Ipv4Addr> {
    let mut current: Option<&str> = None;
    let mut groups = Vec::new();

    for line in content.lines() {
        let fields: Vec<&str> = line
            .split([' ', ':', '\t', '\r'])
            .filter(|f| !f.is_empty())
            .collect();
        if fields.len() < 4 {
            continue;
        }

        if !line.starts_with([' ', '\t']) {
            current = Some(fields[1]);
        } else if current == Some(interface) {
            if let Some(octets) = decode_hex::<4>(fields[0]) {
                groups.push(Ipv4Addr::from(u32::from_ne_bytes(octets)));
            }
        }
    }

    groups
}

/// Parses `/proc/net/igmp6` content, returning the groups of `interface`.
#[must_use]
pub fn parse_igmp6(content: &str, interface: &str) -> Vec<Ipv6Addr> {
    content
        .lines()
        .filter_map(|line| {
            let fields: Vec<&str> = line.split_whitespace().collect();
            if fields.len() < 6 || fields[1] != interface {
                return None;
            }
            decode_hex::<16>(fields[2]).map(Ipv6Addr::from)
        })
        .collect()
}

fn decode_hex<const N: usize>(text: &str) -> Option<[u8; N]> {
    let digits = text.as_bytes();
    if digits.len() != N * 2 || !digits.iter().all(u8::is_ascii_hexdigit) {
        return None;
    }

    let mut out = [0u8; N];
    for (byte, pair) in out.iter_mut().zip(digits.chunks_exact(2)) {
        let pair = std::str::from_utf8(pair).ok()?;
        *byte = u8::from_str_radix(pair, 16).ok()?;
    }
    Some(out)
}
