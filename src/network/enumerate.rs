//! Flattening OS interface data into address records.

use super::{AddressRecord, CastKind, EnumerateError, Interface, InterfaceSource};

/// Enumerates every (interface, address) pair reported by `source`.
///
/// For each interface, in the order the source lists them, one record is
/// produced per unicast address followed by one per multicast group.
///
/// Failures never propagate: an interface whose address query fails
/// contributes no records for that query, and a failed interface listing
/// yields an empty result.
#[must_use]
pub fn enumerate<S: InterfaceSource + ?Sized>(source: &S) -> Vec<AddressRecord> {
    let interfaces = match source.interfaces() {
        Ok(interfaces) => interfaces,
        Err(e) => {
            tracing::warn!("Failed to list network interfaces: {e}");
            return Vec::new();
        }
    };

    tracing::debug!("Found {} network interface(s)", interfaces.len());

    let mut records = Vec::new();
    for interface in &interfaces {
        let unicast = or_empty(interface, "unicast", source.unicast_addrs(interface));
        records.extend(
            unicast
                .into_iter()
                .map(|net| record_for(interface, net.to_string(), CastKind::Unicast)),
        );

        let multicast = or_empty(interface, "multicast", source.multicast_addrs(interface));
        records.extend(
            multicast
                .into_iter()
                .map(|addr| record_for(interface, addr.to_string(), CastKind::Multicast)),
        );
    }

    records
}

fn record_for(interface: &Interface, address: String, cast: CastKind) -> AddressRecord {
    AddressRecord::new(
        interface.name.clone(),
        interface.hardware_address.clone(),
        address,
        cast,
    )
}

fn or_empty<T>(interface: &Interface, what: &str, result: Result<Vec<T>, EnumerateError>) -> Vec<T> {
    result.unwrap_or_else(|e| {
        tracing::debug!(
            interface = %interface.name,
            "Skipping {what} addresses: {e}"
        );
        Vec::new()
    })
}
