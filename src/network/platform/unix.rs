//! Unix interface source using `getifaddrs` (via `pnet::datalink`).

use std::net::IpAddr;
use std::sync::{Mutex, MutexGuard, PoisonError};

use pnet::datalink::{self, NetworkInterface};
use pnet::util::MacAddr;

#[cfg(target_os = "linux")]
use super::igmp::Memberships;
use crate::network::{EnumerateError, HardwareAddr, IfNet, Interface, InterfaceSource};

/// Unix implementation of [`InterfaceSource`].
///
/// Each call to [`interfaces`](InterfaceSource::interfaces) takes a fresh
/// snapshot of the interface table; address queries are answered from that
/// snapshot, so one report reflects a single point in time. A query for an
/// interface absent from the snapshot reports
/// [`EnumerateError::InterfaceNotFound`].
///
/// # Example
///
/// ```no_run
/// use nifs::network::{InterfaceSource, platform::UnixSource};
///
/// let source = UnixSource::new();
/// for interface in source.interfaces().expect("Failed to list interfaces") {
///     println!("{}: {:?}", interface.name, source.unicast_addrs(&interface));
/// }
/// ```
#[derive(Debug, Default)]
pub struct UnixSource {
    snapshot: Mutex<Option<Snapshot>>,
}

/// One read of the interface table, plus the group tables once needed.
#[derive(Debug)]
struct Snapshot {
    links: Vec<NetworkInterface>,
    #[cfg(target_os = "linux")]
    memberships: Option<Memberships>,
}

impl Snapshot {
    const fn new(links: Vec<NetworkInterface>) -> Self {
        Self {
            links,
            #[cfg(target_os = "linux")]
            memberships: None,
        }
    }

    fn find(&self, interface: &Interface) -> Result<&NetworkInterface, EnumerateError> {
        self.links
            .iter()
            .find(|link| link.index == interface.index && link.name == interface.name)
            .ok_or_else(|| EnumerateError::not_found(&interface.name))
    }
}

impl UnixSource {
    /// Creates a new Unix interface source.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            snapshot: Mutex::new(None),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Option<Snapshot>> {
        self.snapshot.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Runs `f` against the current snapshot, taking one if none exists yet.
    fn with_snapshot<T>(&self, f: impl FnOnce(&mut Snapshot) -> T) -> T {
        let mut guard = self.lock();
        f(guard.get_or_insert_with(|| Snapshot::new(datalink::interfaces())))
    }
}

impl InterfaceSource for UnixSource {
    fn interfaces(&self) -> Result<Vec<Interface>, EnumerateError> {
        let links = datalink::interfaces();
        let interfaces = links.iter().map(to_interface).collect();
        *self.lock() = Some(Snapshot::new(links));
        Ok(interfaces)
    }

    fn unicast_addrs(&self, interface: &Interface) -> Result<Vec<IfNet>, EnumerateError> {
        self.with_snapshot(|snapshot| {
            snapshot.find(interface).map(|link| {
                link.ips
                    .iter()
                    .map(|net| IfNet::new(net.ip(), net.prefix()))
                    .collect::<Vec<_>>()
            })
        })
    }

    #[cfg(target_os = "linux")]
    fn multicast_addrs(&self, interface: &Interface) -> Result<Vec<IpAddr>, EnumerateError> {
        self.with_snapshot(|snapshot| -> Result<_, EnumerateError> {
            // Only successful reads are kept; a failed read is retried by the next query
            if snapshot.memberships.is_none() {
                snapshot.memberships = Some(Memberships::read()?);
            }
            Ok(snapshot
                .memberships
                .as_ref()
                .map(|memberships| memberships.groups(&interface.name))
                .unwrap_or_default())
        })
    }

    #[cfg(not(target_os = "linux"))]
    fn multicast_addrs(&self, interface: &Interface) -> Result<Vec<IpAddr>, EnumerateError> {
        tracing::trace!(
            interface = %interface.name,
            "Multicast memberships are not available on this platform"
        );
        Ok(Vec::new())
    }
}

fn to_interface(link: &NetworkInterface) -> Interface {
    Interface::new(link.index, link.name.clone(), link.mac.and_then(mac_to_hardware))
}

fn mac_to_hardware(mac: MacAddr) -> Option<HardwareAddr> {
    let MacAddr(a, b, c, d, e, f) = mac;
    HardwareAddr::new([a, b, c, d, e, f])
}
