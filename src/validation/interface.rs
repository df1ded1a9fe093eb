// file: src/validation/interface.rs
// version: 1.0.0
// guid: a3ad6a3b-7fd9-4806-a809-e58cdda4ce65

//! Per-interface checks: presence on the host and static addressing rules

use super::address::{
    is_valid_ipv4_address_with_prefix, is_valid_ipv4_gateway, is_valid_ipv6_address_with_prefix,
    is_valid_ipv6_gateway,
};
use super::ValidationIssue;
use crate::config::{InterfaceAddressing, IpFamily, LogicalInterface};
use std::collections::BTreeSet;

/// True if the configured interface, or the name the installer renames it to,
/// is present on the host.
///
/// The installer renames the physical interfaces, so on a re-run only the
/// renamed form may still exist.
pub fn interface_exists(
    configured_name: &str,
    renamed_name: &str,
    host_interfaces: &BTreeSet<String>,
) -> bool {
    !configured_name.is_empty()
        && (host_interfaces.contains(configured_name) || host_interfaces.contains(renamed_name))
}

/// Check that a logical interface is configured and present on the host
pub fn check_interface_presence(
    interface: LogicalInterface,
    configured_name: Option<&str>,
    host_interfaces: &BTreeSet<String>,
) -> Option<ValidationIssue> {
    match configured_name.filter(|name| !name.is_empty()) {
        None => Some(ValidationIssue::InterfaceNameRequired(interface)),
        Some(name) if !interface_exists(name, interface.renamed_name(), host_interfaces) => {
            Some(ValidationIssue::InterfaceNotFound(name.to_string()))
        }
        Some(_) => None,
    }
}

/// Check the static addressing of one interface.
///
/// Rules are evaluated in a fixed order and the first violation wins.
pub fn check_interface_addressing(
    interface: LogicalInterface,
    addressing: &InterfaceAddressing,
) -> Option<ValidationIssue> {
    if addressing.is_unconfigured() {
        return None;
    }

    let ipv4_address = addressing.address(IpFamily::V4);
    let ipv4_gateway = addressing.gateway(IpFamily::V4);
    let ipv6_address = addressing.address(IpFamily::V6);
    let ipv6_gateway = addressing.gateway(IpFamily::V6);

    if ipv4_address.is_some() != ipv4_gateway.is_some() {
        return Some(ValidationIssue::Ipv4PairIncomplete(interface));
    }
    if ipv6_address.is_some() != ipv6_gateway.is_some() {
        return Some(ValidationIssue::Ipv6PairIncomplete(interface));
    }
    // The installer needs an IPv4 anchor before it accepts IPv6.
    if ipv6_address.is_some() && ipv4_address.is_none() {
        return Some(ValidationIssue::PureIpv6Unsupported(interface));
    }

    let checks: [(Option<&str>, fn(&str) -> bool, ValidationIssue); 4] = [
        (
            ipv4_address,
            is_valid_ipv4_address_with_prefix,
            ValidationIssue::InvalidIpv4Address(interface),
        ),
        (
            ipv4_gateway,
            is_valid_ipv4_gateway,
            ValidationIssue::InvalidIpv4Gateway(interface),
        ),
        (
            ipv6_address,
            is_valid_ipv6_address_with_prefix,
            ValidationIssue::InvalidIpv6Address(interface),
        ),
        (
            ipv6_gateway,
            is_valid_ipv6_gateway,
            ValidationIssue::InvalidIpv6Gateway(interface),
        ),
    ];

    checks
        .into_iter()
        .find(|(value, is_valid, _)| value.map_or(false, |v| !is_valid(v)))
        .map(|(_, _, issue)| issue)
}
