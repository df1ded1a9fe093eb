// file: src/validation/address.rs
// version: 1.0.0
// guid: 912fdb3f-2ab2-4047-953b-6276c2581b7d

//! IPv4/IPv6 address and gateway checks.
//!
//! Addresses must carry a prefix (`a.b.c.d/x`); host-only prefixes (/32, /128)
//! are rejected because the installer needs a subnet to configure. Gateways are
//! bare host addresses. Dotted netmasks and IPv6 zone IDs are not accepted.
//! Every check fails closed.

use ipnet::{Ipv4Net, Ipv6Net};
use std::net::{Ipv4Addr, Ipv6Addr};

/// Validate an IPv4 address with prefix, e.g. `10.0.0.2/24`
pub fn is_valid_ipv4_address_with_prefix(value: &str) -> bool {
    match value.parse::<Ipv4Net>() {
        Ok(net) => net.prefix_len() != 32,
        Err(_) => false,
    }
}

/// Validate an IPv4 gateway, e.g. `10.0.0.1`
pub fn is_valid_ipv4_gateway(value: &str) -> bool {
    value.parse::<Ipv4Addr>().is_ok()
}

/// Validate an IPv6 address with prefix, e.g. `2001:db8::2/64`
pub fn is_valid_ipv6_address_with_prefix(value: &str) -> bool {
    match value.parse::<Ipv6Net>() {
        Ok(net) => net.prefix_len() != 128,
        Err(_) => false,
    }
}

/// Validate an IPv6 gateway, e.g. `2001:db8::1`
pub fn is_valid_ipv6_gateway(value: &str) -> bool {
    value.parse::<Ipv6Addr>().is_ok()
}
