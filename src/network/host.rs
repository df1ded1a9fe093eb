// file: src/network/host.rs
// version: 1.0.0
// guid: 7b2160f1-29d9-4703-82db-ed1b4da27163

//! Host network interface enumeration

use crate::error::GatewayError;
use crate::Result;
use network_interface::{Addr, NetworkInterface, NetworkInterfaceConfig};
use std::collections::BTreeSet;
use std::net::Ipv4Addr;
use tracing::debug;

/// Read-only view of the host's network interfaces
pub trait HostNetwork: Send + Sync {
    /// Names of every interface currently present
    fn interface_names(&self) -> Result<BTreeSet<String>>;

    /// First IPv4 address assigned to the interface, if any
    fn ipv4_address(&self, interface: &str) -> Result<Option<Ipv4Addr>>;
}

/// Interfaces of the machine the operator runs on
#[derive(Debug, Clone, Default)]
pub struct SystemNetwork;

impl SystemNetwork {
    pub fn new() -> Self {
        Self
    }

    fn show() -> Result<Vec<NetworkInterface>> {
        NetworkInterface::show()
            .map_err(|e| GatewayError::network(format!("Failed to get network interfaces: {}", e)))
    }
}

impl HostNetwork for SystemNetwork {
    fn interface_names(&self) -> Result<BTreeSet<String>> {
        let names: BTreeSet<String> = Self::show()?.into_iter().map(|iface| iface.name).collect();
        debug!("Host interfaces: {:?}", names);
        Ok(names)
    }

    fn ipv4_address(&self, interface: &str) -> Result<Option<Ipv4Addr>> {
        // Some platforms report one entry per address, so scan them all.
        let address = Self::show()?
            .into_iter()
            .filter(|iface| iface.name == interface)
            .flat_map(|iface| iface.addr)
            .find_map(|addr| match addr {
                Addr::V4(v4) => Some(v4.ip),
                Addr::V6(_) => None,
            });
        Ok(address)
    }
}
