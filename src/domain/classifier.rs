//! Private-range classification and the public address guard.
//!
//! `is_private` only answers range membership. Loopback, link-local,
//! unspecified, broadcast and multicast addresses are not "private" here;
//! `require_public` rejects them as invalid before the private check runs.

use super::types::{Address, InvalidReason, ValidationError};
use ipnet::{Ipv4Net, Ipv6Net};
use std::net::{Ipv4Addr, Ipv6Addr};

/// IPv4 networks reserved for private use
const PRIVATE_V4_NETWORKS: [Ipv4Net; 4] = [
    // RFC 1918
    Ipv4Net::new_assert(Ipv4Addr::new(10, 0, 0, 0), 8),
    Ipv4Net::new_assert(Ipv4Addr::new(172, 16, 0, 0), 12),
    Ipv4Net::new_assert(Ipv4Addr::new(192, 168, 0, 0), 16),
    // RFC 6598 shared address space (carrier-grade NAT)
    Ipv4Net::new_assert(Ipv4Addr::new(100, 64, 0, 0), 10),
];

/// IPv6 unique local addresses (RFC 4193)
const PRIVATE_V6_NETWORKS: [Ipv6Net; 1] =
    [Ipv6Net::new_assert(Ipv6Addr::new(0xfc00, 0, 0, 0, 0, 0, 0, 0), 7)];

/// Returns true if the address lies in a private-use range
/// The invalid sentinel is never private
pub fn is_private(addr: Address) -> bool {
    match addr.canonical() {
        Address::V4(ip) => PRIVATE_V4_NETWORKS.iter().any(|net| net.contains(&ip)),
        Address::V6(ip) => PRIVATE_V6_NETWORKS.iter().any(|net| net.contains(&ip)),
        Address::Invalid => false,
    }
}

/// Returns true for 224.0.0.0/4 and ff00::/8
pub fn is_multicast(addr: Address) -> bool {
    match addr.canonical() {
        Address::V4(ip) => ip.is_multicast(),
        Address::V6(ip) => ip.is_multicast(),
        Address::Invalid => false,
    }
}

/// Reason the address cannot be used as a unicast destination, if any
fn non_unicast_reason(addr: Address) -> Option<InvalidReason> {
    match addr {
        Address::Invalid => Some(InvalidReason::Unparsed),
        Address::V4(ip) if ip.is_unspecified() => Some(InvalidReason::Unspecified),
        Address::V4(ip) if ip.is_loopback() => Some(InvalidReason::Loopback),
        Address::V4(ip) if ip.is_link_local() => Some(InvalidReason::LinkLocal),
        Address::V4(ip) if ip.is_broadcast() => Some(InvalidReason::Broadcast),
        Address::V6(ip) if ip.is_unspecified() => Some(InvalidReason::Unspecified),
        Address::V6(ip) if ip.is_loopback() => Some(InvalidReason::Loopback),
        Address::V6(ip) if ip.is_unicast_link_local() => Some(InvalidReason::LinkLocal),
        _ => None,
    }
}

/// Accepts only publicly routable unicast addresses
///
/// Checks run in order: unparsed or non-unicast, then multicast (both
/// `AddressInvalid`), then private ranges (`AddressPrivate`).
pub fn require_public(addr: Address) -> Result<(), ValidationError> {
    let canonical = addr.canonical();

    if let Some(reason) = non_unicast_reason(canonical) {
        return Err(ValidationError::Invalid { address: addr, reason });
    }

    if is_multicast(canonical) {
        return Err(ValidationError::Invalid {
            address: addr,
            reason: InvalidReason::Multicast,
        });
    }

    match addr.ip() {
        Some(ip) if is_private(canonical) => Err(ValidationError::Private { address: ip }),
        _ => Ok(()),
    }
}

impl Address {
    pub fn is_private(&self) -> bool {
        is_private(*self)
    }

    pub fn require_public(&self) -> Result<(), ValidationError> {
        require_public(*self)
    }
}
