//! Core types for interface address records.

use std::fmt;
use std::net::IpAddr;

/// Address family of a reported address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    /// IPv4 address.
    V4,
    /// IPv6 address.
    V6,
}

impl Family {
    /// Returns the family of a parsed address.
    #[must_use]
    pub const fn of(addr: IpAddr) -> Self {
        match addr {
            IpAddr::V4(_) => Self::V4,
            IpAddr::V6(_) => Self::V6,
        }
    }

    /// Classifies the textual form of an address (`addr`, `addr/prefix` or `addr%zone`).
    ///
    /// The host part is parsed as an [`IpAddr`]. Text that does not parse falls
    /// back to the dotted-decimal heuristic: anything containing `.` is IPv4.
    /// IPv4-mapped IPv6 literals such as `::ffff:10.0.0.1` parse as IPv6.
    #[must_use]
    pub fn classify(text: &str) -> Self {
        let host = text.split_once('/').map_or(text, |(host, _)| host);
        let host = host.split_once('%').map_or(host, |(host, _)| host);

        host.parse::<IpAddr>().map_or_else(
            |_| if text.contains('.') { Self::V4 } else { Self::V6 },
            Self::of,
        )
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::V4 => write!(f, "IPv4"),
            Self::V6 => write!(f, "IPv6"),
        }
    }
}

/// Delivery kind of a reported address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastKind {
    /// Address assigned to this interface.
    Unicast,
    /// Group address this interface has joined.
    Multicast,
}

impl fmt::Display for CastKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unicast => write!(f, "unicast"),
            Self::Multicast => write!(f, "multicast"),
        }
    }
}

/// Link-layer (MAC) address of an interface.
///
/// Never empty and never all-zero: those are reported by the OS for
/// interfaces without a real hardware address and are treated as absent.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HardwareAddr(Vec<u8>);

impl HardwareAddr {
    /// Creates a hardware address, returning `None` for empty or all-zero bytes.
    #[must_use]
    pub fn new(bytes: impl Into<Vec<u8>>) -> Option<Self> {
        let bytes = bytes.into();
        if bytes.iter().all(|b| *b == 0) {
            return None;
        }
        Some(Self(bytes))
    }

    /// Returns the raw address bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for HardwareAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, byte) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(":")?;
            }
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

/// An interface address with its on-link prefix length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IfNet {
    addr: IpAddr,
    prefix_len: u8,
}

impl IfNet {
    /// Creates an interface network from an address and prefix length.
    #[must_use]
    pub const fn new(addr: IpAddr, prefix_len: u8) -> Self {
        Self { addr, prefix_len }
    }

    /// Returns the address.
    #[must_use]
    pub const fn addr(&self) -> IpAddr {
        self.addr
    }

    /// Returns the prefix length.
    #[must_use]
    pub const fn prefix_len(&self) -> u8 {
        self.prefix_len
    }
}

impl fmt::Display for IfNet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.addr, self.prefix_len)
    }
}

/// One reported (interface, address) pair.
///
/// Records are created fresh on every run; their only identity is their
/// position in the enumeration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressRecord {
    /// Interface name (e.g. "eth0", "lo0").
    pub interface: String,
    /// Hardware address of the owning interface, if it has one.
    pub hardware_address: Option<HardwareAddr>,
    /// Textual address: CIDR for unicast, plain address for multicast.
    pub address: String,
    /// Unicast or multicast.
    pub cast: CastKind,
    /// Address family, derived from `address`.
    pub family: Family,
}

impl AddressRecord {
    /// Creates a record, classifying the family from the address text.
    #[must_use]
    pub fn new(
        interface: impl Into<String>,
        hardware_address: Option<HardwareAddr>,
        address: impl Into<String>,
        cast: CastKind,
    ) -> Self {
        let address = address.into();
        let family = Family::classify(&address);
        Self {
            interface: interface.into(),
            hardware_address,
            address,
            cast,
            family,
        }
    }

    /// Returns true if the owning interface has a hardware address.
    #[must_use]
    pub const fn has_hardware_address(&self) -> bool {
        self.hardware_address.is_some()
    }
}
