//! Addresses assigned to this machine's network interfaces

use crate::domain::InterfaceName;
use anyhow::{Context, Result};
use network_interface::{NetworkInterface, NetworkInterfaceConfig};
use std::net::IpAddr;

/// Enumerates every IPv4 and IPv6 address on every interface
pub fn interface_addresses() -> Result<Vec<(InterfaceName, IpAddr)>> {
    let system_interfaces = NetworkInterface::show()
        .context("Failed to enumerate network interfaces")?;

    Ok(flatten_interfaces(system_interfaces))
}

/// Pairs each interface name with each of its addresses, keeping system order
fn flatten_interfaces(interfaces: Vec<NetworkInterface>) -> Vec<(InterfaceName, IpAddr)> {
    interfaces
        .into_iter()
        .flat_map(|iface| {
            let name = InterfaceName::new(iface.name);
            iface
                .addr
                .into_iter()
                .map(move |addr| (name.clone(), addr.ip()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interface_addresses() {
        let result = interface_addresses();

        // Enumeration should succeed even in a minimal container
        assert!(result.is_ok());

        let addresses = result.unwrap();
        println!("Found {} interface addresses", addresses.len());
        for (name, ip) in &addresses {
            println!("{}: {}", name, ip);
        }
    }

    #[test]
    fn test_flatten_empty() {
        assert!(flatten_interfaces(Vec::new()).is_empty());
    }
}
