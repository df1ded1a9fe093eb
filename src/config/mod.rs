// file: src/config/mod.rs
// version: 1.0.0
// guid: 5d008201-9d27-4aed-ac53-f213ae15f75a

//! Configuration module for the Access Gateway operator
//!
//! The host runtime stores charm options as a flat key/value map. [`loader`]
//! turns that map into a [`GatewayConfig`] once, at the boundary; everything
//! downstream works with typed, optional fields.

pub mod loader;

pub use loader::{ConfigLoader, RawConfig};

use serde::{Deserialize, Serialize};
use std::fmt;

/// DNS servers used when the operator does not override `dns`
pub const DEFAULT_DNS: &str = r#"["8.8.8.8", "208.67.222.222"]"#;

/// Snap channel the gateway package is installed from by default
pub const DEFAULT_CHANNEL: &str = "1.8/stable";

/// The two logical interfaces the gateway requires
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogicalInterface {
    /// Data-network-facing interface
    Sgi,
    /// Radio-access-facing interface
    S1,
}

impl LogicalInterface {
    /// Both interfaces, in validation and argument order
    pub const ALL: [LogicalInterface; 2] = [LogicalInterface::Sgi, LogicalInterface::S1];

    /// Get the option/flag prefix for this interface
    pub fn as_str(&self) -> &'static str {
        match self {
            LogicalInterface::Sgi => "sgi",
            LogicalInterface::S1 => "s1",
        }
    }

    /// Name the installer gives the physical interface once it has run
    pub fn renamed_name(&self) -> &'static str {
        match self {
            LogicalInterface::Sgi => "eth0",
            LogicalInterface::S1 => "eth1",
        }
    }
}

impl fmt::Display for LogicalInterface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// IP family of a static address pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IpFamily {
    V4,
    V6,
}

impl IpFamily {
    pub fn as_str(&self) -> &'static str {
        match self {
            IpFamily::V4 => "ipv4",
            IpFamily::V6 => "ipv6",
        }
    }
}

/// Static addressing for one logical interface. All fields absent means DHCP.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterfaceAddressing {
    /// IPv4 address with prefix, e.g. `10.0.0.2/24`
    pub ipv4_address: Option<String>,
    /// IPv4 default gateway
    pub ipv4_gateway: Option<String>,
    /// IPv6 address with prefix
    pub ipv6_address: Option<String>,
    /// IPv6 default gateway
    pub ipv6_gateway: Option<String>,
}

impl InterfaceAddressing {
    /// Address for the given family, ignoring empty strings
    pub fn address(&self, family: IpFamily) -> Option<&str> {
        let value = match family {
            IpFamily::V4 => &self.ipv4_address,
            IpFamily::V6 => &self.ipv6_address,
        };
        present(value)
    }

    /// Gateway for the given family, ignoring empty strings
    pub fn gateway(&self, family: IpFamily) -> Option<&str> {
        let value = match family {
            IpFamily::V4 => &self.ipv4_gateway,
            IpFamily::V6 => &self.ipv6_gateway,
        };
        present(value)
    }

    /// True when no static addressing is configured
    pub fn is_unconfigured(&self) -> bool {
        [IpFamily::V4, IpFamily::V6]
            .iter()
            .all(|family| self.address(*family).is_none() && self.gateway(*family).is_none())
    }
}

/// Typed snapshot of the operator configuration for one hook invocation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GatewayConfig {
    /// Bypass all interface and address validation
    pub skip_networking: bool,
    /// Configured name of the SGi interface
    pub sgi: Option<String>,
    /// Configured name of the S1 interface
    pub s1: Option<String>,
    pub sgi_addressing: InterfaceAddressing,
    pub s1_addressing: InterfaceAddressing,
    /// JSON-encoded list of DNS resolvers, validated before use
    pub dns: String,
    /// Keep the gateway's local IPs unreachable from UEs
    pub block_agw_local_ips: bool,
    /// Snap channel for the gateway package
    pub channel: String,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            skip_networking: false,
            sgi: None,
            s1: None,
            sgi_addressing: InterfaceAddressing::default(),
            s1_addressing: InterfaceAddressing::default(),
            dns: DEFAULT_DNS.to_string(),
            block_agw_local_ips: true,
            channel: DEFAULT_CHANNEL.to_string(),
        }
    }
}

impl GatewayConfig {
    /// Configured interface name, ignoring empty strings
    pub fn interface_name(&self, interface: LogicalInterface) -> Option<&str> {
        match interface {
            LogicalInterface::Sgi => present(&self.sgi),
            LogicalInterface::S1 => present(&self.s1),
        }
    }

    /// Static addressing of the given interface
    pub fn addressing(&self, interface: LogicalInterface) -> &InterfaceAddressing {
        match interface {
            LogicalInterface::Sgi => &self.sgi_addressing,
            LogicalInterface::S1 => &self.s1_addressing,
        }
    }
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}
