//! Record filtering for selective reporting.
//!
//! This module provides traits and types for filtering address records
//! by address family, cast kind and hardware-address presence.
//!
//! # Design
//!
//! - **Pure Matchers**: [`FamilyFilter`], [`CastFilter`] and [`HardwareFilter`]
//!   only answer "does this record match?".
//! - **Filter Chain**: [`FilterChain`] combines matchers with AND logic:
//!   a record must pass every filter. An empty chain matches everything.
//! - **Selection**: [`Selection`] holds the user's inclusion toggles and
//!   builds the equivalent chain.

use std::collections::HashSet;
use std::fmt;

use super::{AddressRecord, CastKind, Family};

/// Trait for filtering address records.
pub trait RecordFilter {
    /// Returns `true` if the record should be reported, `false` to filter it out.
    fn matches(&self, record: &AddressRecord) -> bool;
}

// ============================================================================
// FamilyFilter - Pure matcher by address family
// ============================================================================

/// Matches records whose family is contained in the specified set.
///
/// # Examples
///
/// ```
/// use nifs::network::filter::{FamilyFilter, RecordFilter};
/// use nifs::network::{AddressRecord, CastKind, Family};
///
/// let filter = FamilyFilter::new([Family::V4]);
///
/// let v4 = AddressRecord::new("lo0", None, "127.0.0.1/8", CastKind::Unicast);
/// let v6 = AddressRecord::new("lo0", None, "::1/128", CastKind::Unicast);
///
/// assert!(filter.matches(&v4));
/// assert!(!filter.matches(&v6));
/// ```
#[derive(Debug, Clone)]
pub struct FamilyFilter {
    families: HashSet<Family>,
}

impl FamilyFilter {
    /// Creates a family filter matching any of the specified families.
    #[must_use]
    pub fn new(families: impl IntoIterator<Item = Family>) -> Self {
        Self {
            families: families.into_iter().collect(),
        }
    }

    /// Returns true if no families are configured (matches nothing).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.families.is_empty()
    }
}

impl RecordFilter for FamilyFilter {
    fn matches(&self, record: &AddressRecord) -> bool {
        self.families.contains(&record.family)
    }
}

// ============================================================================
// CastFilter - Pure matcher by cast kind
// ============================================================================

/// Matches records whose cast kind is contained in the specified set.
#[derive(Debug, Clone)]
pub struct CastFilter {
    kinds: HashSet<CastKind>,
}

impl CastFilter {
    /// Creates a cast filter matching any of the specified kinds.
    #[must_use]
    pub fn new(kinds: impl IntoIterator<Item = CastKind>) -> Self {
        Self {
            kinds: kinds.into_iter().collect(),
        }
    }

    /// Returns true if no kinds are configured (matches nothing).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }
}

impl RecordFilter for CastFilter {
    fn matches(&self, record: &AddressRecord) -> bool {
        self.kinds.contains(&record.cast)
    }
}

// ============================================================================
// HardwareFilter - Pure matcher by MAC presence
// ============================================================================

/// Matches records by whether their interface has a hardware address.
///
/// "Hardware" interfaces have a MAC address, "software" interfaces
/// (loopback, tunnels) do not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HardwareFilter {
    hardware: bool,
    software: bool,
}

impl HardwareFilter {
    /// Creates a filter accepting hardware and/or software interfaces.
    #[must_use]
    pub const fn new(hardware: bool, software: bool) -> Self {
        Self { hardware, software }
    }
}

impl RecordFilter for HardwareFilter {
    fn matches(&self, record: &AddressRecord) -> bool {
        if record.has_hardware_address() {
            self.hardware
        } else {
            self.software
        }
    }
}

// ============================================================================
// FilterChain - AND composition
// ============================================================================

/// A chain of filters that ANDs its members together.
///
/// A record passes the chain only if it passes ALL contained filters.
/// An empty chain matches all records.
///
/// # Examples
///
/// ```
/// use nifs::network::filter::{CastFilter, FamilyFilter, FilterChain, RecordFilter};
/// use nifs::network::{AddressRecord, CastKind, Family};
///
/// let chain = FilterChain::new()
///     .with(FamilyFilter::new([Family::V6]))
///     .with(CastFilter::new([CastKind::Multicast]));
///
/// let group = AddressRecord::new("en0", None, "ff02::1", CastKind::Multicast);
/// let link_local = AddressRecord::new("en0", None, "fe80::1/64", CastKind::Unicast);
///
/// assert!(chain.matches(&group));
/// assert!(!chain.matches(&link_local));
/// ```
#[derive(Default)]
pub struct FilterChain {
    filters: Vec<Box<dyn RecordFilter>>,
}

impl FilterChain {
    /// Creates an empty filter chain (matches all records).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a filter to the chain (builder pattern).
    #[must_use]
    pub fn with<F: RecordFilter + 'static>(mut self, filter: F) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Returns the number of filters in the chain.
    #[must_use]
    pub fn len(&self) -> usize {
        self.filters.len()
    }

    /// Returns `true` if no filters are configured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }
}

impl RecordFilter for FilterChain {
    fn matches(&self, record: &AddressRecord) -> bool {
        self.filters.iter().all(|f| f.matches(record))
    }
}

// Manual Debug impl since Box<dyn RecordFilter> doesn't implement Debug
impl fmt::Debug for FilterChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FilterChain")
            .field("filter_count", &self.filters.len())
            .finish()
    }
}

// ============================================================================
// Selection - inclusion toggles
// ============================================================================

/// Inclusion toggles for each record attribute.
///
/// Each attribute has a pair of toggles (IPv4/IPv6, unicast/multicast,
/// hardware/software). Turning on one side of a pair restricts the report
/// to it; turning on neither or both includes both sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)] // one flag per toggle
pub struct Selection {
    /// Report IPv4 addresses.
    pub ipv4: bool,
    /// Report IPv6 addresses.
    pub ipv6: bool,
    /// Report unicast addresses.
    pub unicast: bool,
    /// Report multicast addresses.
    pub multicast: bool,
    /// Report interfaces that have a hardware address.
    pub hardware: bool,
    /// Report interfaces without a hardware address.
    pub software: bool,
}

impl Default for Selection {
    fn default() -> Self {
        Self::ALL
    }
}

impl Selection {
    /// Selection including every record.
    pub const ALL: Self = Self {
        ipv4: true,
        ipv6: true,
        unicast: true,
        multicast: true,
        hardware: true,
        software: true,
    };

    /// Builds a selection from "only this" toggles, widening empty pairs.
    #[must_use]
    #[allow(clippy::fn_params_excessive_bools)]
    pub const fn from_toggles(
        ipv4: bool,
        ipv6: bool,
        unicast: bool,
        multicast: bool,
        hardware: bool,
        software: bool,
    ) -> Self {
        let (ipv4, ipv6) = widen(ipv4, ipv6);
        let (unicast, multicast) = widen(unicast, multicast);
        let (hardware, software) = widen(hardware, software);
        Self {
            ipv4,
            ipv6,
            unicast,
            multicast,
            hardware,
            software,
        }
    }

    /// Returns true if this selection accepts every record.
    #[must_use]
    pub const fn is_all(&self) -> bool {
        self.ipv4 && self.ipv6 && self.unicast && self.multicast && self.hardware && self.software
    }

    /// Builds the filter chain equivalent to this selection.
    ///
    /// Pairs that include both sides add no filter.
    #[must_use]
    pub fn to_chain(&self) -> FilterChain {
        let mut chain = FilterChain::new();

        if !(self.ipv4 && self.ipv6) {
            let families = [(self.ipv4, Family::V4), (self.ipv6, Family::V6)];
            chain = chain.with(FamilyFilter::new(pick(families)));
        }

        if !(self.unicast && self.multicast) {
            let kinds = [
                (self.unicast, CastKind::Unicast),
                (self.multicast, CastKind::Multicast),
            ];
            chain = chain.with(CastFilter::new(pick(kinds)));
        }

        if !(self.hardware && self.software) {
            chain = chain.with(HardwareFilter::new(self.hardware, self.software));
        }

        chain
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ipv4={} ipv6={} unicast={} multicast={} hw={} sw={}",
            self.ipv4, self.ipv6, self.unicast, self.multicast, self.hardware, self.software
        )
    }
}

const fn widen(a: bool, b: bool) -> (bool, bool) {
    if !a && !b { (true, true) } else { (a, b) }
}

fn pick<T, const N: usize>(candidates: [(bool, T); N]) -> impl Iterator<Item = T> {
    candidates
        .into_iter()
        .filter_map(|(enabled, value)| enabled.then_some(value))
}

// Blanket implementation: any &T where T: RecordFilter also implements RecordFilter
impl<T: RecordFilter + ?Sized> RecordFilter for &T {
    fn matches(&self, record: &AddressRecord) -> bool {
        (*self).matches(record)
    }
}

// Box<dyn RecordFilter> implements RecordFilter
impl RecordFilter for Box<dyn RecordFilter> {
    fn matches(&self, record: &AddressRecord) -> bool {
        self.as_ref().matches(record)
    }
}
