//! Windows interface source using `GetAdaptersAddresses`.

use crate::network::{EnumerateError, HardwareAddr, IfNet, Interface, InterfaceSource};
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::sync::{Mutex, MutexGuard, PoisonError};
use windows::Win32::Foundation::WIN32_ERROR;
use windows::Win32::NetworkManagement::IpHelper::{
    GAA_FLAG_SKIP_ANYCAST, GAA_FLAG_SKIP_DNS_SERVER, GetAdaptersAddresses,
    IP_ADAPTER_ADDRESSES_LH,
};
use windows::Win32::Networking::WinSock::{
    AF_INET, AF_INET6, AF_UNSPEC, SOCKADDR_IN, SOCKADDR_IN6, SOCKET_ADDRESS,
};

/// Buffer size hint for `GetAdaptersAddresses`.
/// The API will tell us the actual required size if this is insufficient.
const INITIAL_BUFFER_SIZE: u32 = 16384;

/// Windows implementation of [`InterfaceSource`] using `GetAdaptersAddresses`.
///
/// Interfaces are reported under their friendly name ("Ethernet", "Wi-Fi").
/// Each listing reads the adapter table once; address queries are answered
/// from that read.
///
/// # Example
///
/// ```no_run
/// use nifs::network::{InterfaceSource, platform::WindowsSource};
///
/// let source = WindowsSource::new();
/// for interface in source.interfaces().expect("Failed to list adapters") {
///     println!("{}: {:?}", interface.name, source.multicast_addrs(&interface));
/// }
/// ```
#[derive(Debug, Default)]
pub struct WindowsSource {
    snapshot: Mutex<Option<Vec<AdapterEntry>>>,
}

impl WindowsSource {
    /// Creates a new Windows interface source.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            snapshot: Mutex::new(None),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Option<Vec<AdapterEntry>>> {
        self.snapshot.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Looks `interface` up in the current snapshot, reading the table if none exists yet.
    fn with_adapter<T>(
        &self,
        interface: &Interface,
        f: impl FnOnce(&AdapterEntry) -> T,
    ) -> Result<T, EnumerateError> {
        let mut guard = self.lock();
        if guard.is_none() {
            *guard = Some(fetch_adapters()?);
        }

        guard
            .iter()
            .flatten()
            .find(|adapter| adapter.interface.index == interface.index)
            .map(f)
            .ok_or_else(|| EnumerateError::not_found(&interface.name))
    }
}

impl InterfaceSource for WindowsSource {
    fn interfaces(&self) -> Result<Vec<Interface>, EnumerateError> {
        let adapters = fetch_adapters()?;
        let interfaces = adapters
            .iter()
            .map(|adapter| adapter.interface.clone())
            .collect();
        *self.lock() = Some(adapters);
        Ok(interfaces)
    }

    fn unicast_addrs(&self, interface: &Interface) -> Result<Vec<IfNet>, EnumerateError> {
        self.with_adapter(interface, |adapter| adapter.unicast.clone())
    }

    fn multicast_addrs(&self, interface: &Interface) -> Result<Vec<IpAddr>, EnumerateError> {
        self.with_adapter(interface, |adapter| adapter.multicast.clone())
    }
}

/// Everything read from one `IP_ADAPTER_ADDRESSES_LH` entry.
#[derive(Debug)]
struct AdapterEntry {
    interface: Interface,
    unicast: Vec<IfNet>,
    multicast: Vec<IpAddr>,
}

/// Fetches all network adapters using `GetAdaptersAddresses`.
fn fetch_adapters() -> Result<Vec<AdapterEntry>, EnumerateError> {
    let raw_adapters = get_adapter_addresses()?;

    let mut adapters = Vec::new();
    // SAFETY: GetAdaptersAddresses returns a properly aligned buffer for IP_ADAPTER_ADDRESSES_LH.
    #[allow(clippy::cast_ptr_alignment)]
    let mut current = raw_adapters.as_ptr().cast::<IP_ADAPTER_ADDRESSES_LH>();

    // SAFETY: We iterate through a linked list returned by GetAdaptersAddresses.
    // The list is valid as long as the buffer (`raw_adapters`) is alive.
    while !current.is_null() {
        let adapter = unsafe { &*current };

        if let Some(entry) = parse_adapter(adapter) {
            adapters.push(entry);
        }

        current = adapter.Next;
    }

    Ok(adapters)
}

/// Calls `GetAdaptersAddresses` and returns the raw buffer containing adapter data.
///
/// This function handles the two-call pattern:
/// 1. First call with estimated buffer size
/// 2. Retry with exact size if buffer was too small
fn get_adapter_addresses() -> Result<Vec<u8>, EnumerateError> {
    // Multicast groups are wanted; anycast and DNS servers are not
    let flags = GAA_FLAG_SKIP_ANYCAST | GAA_FLAG_SKIP_DNS_SERVER;
    let family = u32::from(AF_UNSPEC.0);

    let mut buffer: Vec<u8> = vec![0u8; INITIAL_BUFFER_SIZE as usize];
    let mut size = INITIAL_BUFFER_SIZE;

    // SAFETY: We provide a valid buffer and size. The function writes adapter
    // information to the buffer and updates `size` with the required length.
    let result = unsafe {
        GetAdaptersAddresses(
            family,
            flags,
            None,
            Some(buffer.as_mut_ptr().cast()),
            &raw mut size,
        )
    };

    handle_api_result(result, &mut buffer, &mut size, flags, family)?;

    Ok(buffer)
}

/// Handles the result of `GetAdaptersAddresses`, retrying once with a larger buffer.
#[cfg(not(tarpaulin_include))]
fn handle_api_result(
    result: u32,
    buffer: &mut Vec<u8>,
    size: &mut u32,
    flags: windows::Win32::NetworkManagement::IpHelper::GET_ADAPTERS_ADDRESSES_FLAGS,
    family: u32,
) -> Result<(), EnumerateError> {
    use windows::Win32::Foundation::{ERROR_BUFFER_OVERFLOW, NO_ERROR};

    if result == ERROR_BUFFER_OVERFLOW.0 {
        buffer.resize(*size as usize, 0);

        // SAFETY: Same as above, but with correctly sized buffer
        let result = unsafe {
            GetAdaptersAddresses(
                family,
                flags,
                None,
                Some(buffer.as_mut_ptr().cast()),
                &raw mut *size,
            )
        };

        if result != NO_ERROR.0 {
            return Err(windows::core::Error::from(WIN32_ERROR(result)).into());
        }
    } else if result != NO_ERROR.0 {
        return Err(windows::core::Error::from(WIN32_ERROR(result)).into());
    }

    Ok(())
}

/// Parses a single `IP_ADAPTER_ADDRESSES_LH` structure.
///
/// Returns `None` if the adapter name cannot be read.
fn parse_adapter(adapter: &IP_ADAPTER_ADDRESSES_LH) -> Option<AdapterEntry> {
    let name = unsafe { adapter.FriendlyName.to_string().ok()? };

    // SAFETY: Both union variants start with the same layout; IfIndex is always set.
    let index = unsafe { adapter.Anonymous1.Anonymous.IfIndex };

    let mac_len = (adapter.PhysicalAddressLength as usize).min(adapter.PhysicalAddress.len());
    let hardware_address = HardwareAddr::new(&adapter.PhysicalAddress[..mac_len]);

    Some(AdapterEntry {
        interface: Interface::new(index, name, hardware_address),
        unicast: collect_unicast(adapter),
        multicast: collect_multicast(adapter),
    })
}

/// Collects unicast addresses with their on-link prefix length.
fn collect_unicast(adapter: &IP_ADAPTER_ADDRESSES_LH) -> Vec<IfNet> {
    let mut addresses = Vec::new();
    let mut unicast = adapter.FirstUnicastAddress;

    // SAFETY: We iterate through a linked list of unicast addresses.
    // Each address is valid as long as the parent adapter buffer is alive.
    while !unicast.is_null() {
        let entry = unsafe { &*unicast };

        if let Some(addr) = socket_address_to_ip(&entry.Address) {
            addresses.push(IfNet::new(addr, entry.OnLinkPrefixLength));
        }

        unicast = entry.Next;
    }

    addresses
}

/// Collects the multicast groups joined by the adapter.
fn collect_multicast(adapter: &IP_ADAPTER_ADDRESSES_LH) -> Vec<IpAddr> {
    let mut groups = Vec::new();
    let mut multicast = adapter.FirstMulticastAddress;

    // SAFETY: Same linked-list contract as the unicast list.
    while !multicast.is_null() {
        let entry = unsafe { &*multicast };

        if let Some(addr) = socket_address_to_ip(&entry.Address) {
            groups.push(addr);
        }

        multicast = entry.Next;
    }

    groups
}

/// Decodes a `SOCKET_ADDRESS` holding an IPv4 or IPv6 socket address.
///
/// # Safety Note
///
/// The pointer casts to `SOCKADDR_IN` and `SOCKADDR_IN6` are allowed despite alignment
/// concerns because Windows guarantees proper alignment of these structures when returned
/// from the networking APIs.
#[allow(clippy::cast_ptr_alignment)]
fn socket_address_to_ip(address: &SOCKET_ADDRESS) -> Option<IpAddr> {
    // SAFETY: lpSockaddr is either null or points into the adapter buffer.
    let sockaddr = unsafe { address.lpSockaddr.as_ref() }?;

    match sockaddr.sa_family {
        f if f == AF_INET => {
            // SAFETY: We verified the family is AF_INET, so this is a valid cast.
            let sockaddr_in = unsafe { &*(std::ptr::from_ref(sockaddr).cast::<SOCKADDR_IN>()) };
            // SAFETY: sin_addr contains the IPv4 address bytes in network order.
            let octets = unsafe { sockaddr_in.sin_addr.S_un.S_un_b };
            Some(IpAddr::V4(Ipv4Addr::new(
                octets.s_b1,
                octets.s_b2,
                octets.s_b3,
                octets.s_b4,
            )))
        }
        f if f == AF_INET6 => {
            // SAFETY: We verified the family is AF_INET6, so this is a valid cast.
            let sockaddr_in6 = unsafe { &*(std::ptr::from_ref(sockaddr).cast::<SOCKADDR_IN6>()) };
            // SAFETY: We verified this is an IPv6 address, so the union field is valid.
            let octets = unsafe { sockaddr_in6.sin6_addr.u.Byte };
            Some(IpAddr::V6(Ipv6Addr::from(octets)))
        }
        _ => None,
    }
}
