// file: src/validation/mod.rs
// version: 1.0.0
// guid: d1a8a932-8eb7-4162-a8b8-c5708849b71c

//! Configuration validation engine
//!
//! [`validate_configuration`] runs every check against one configuration
//! snapshot and the host's interface list, collecting all failures instead of
//! stopping at the first one. Each failure is logged as a warning the moment
//! it is found; the message wording is relied on by operators, keep it stable.

pub mod address;
pub mod dns;
pub mod interface;

pub use address::{
    is_valid_ipv4_address_with_prefix, is_valid_ipv4_gateway, is_valid_ipv6_address_with_prefix,
    is_valid_ipv6_gateway,
};
pub use dns::{is_valid_dns_config, parse_dns_servers};
pub use interface::{check_interface_addressing, check_interface_presence, interface_exists};

use crate::config::{GatewayConfig, LogicalInterface};
use std::collections::BTreeSet;
use thiserror::Error;
use tracing::{debug, warn};

/// A single violated configuration rule
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationIssue {
    #[error("{0} interface name is required")]
    InterfaceNameRequired(LogicalInterface),

    #[error("{0} interface not found")]
    InterfaceNotFound(String),

    #[error("Both IPv4 address and gateway required for interface {0}")]
    Ipv4PairIncomplete(LogicalInterface),

    #[error("Both IPv6 address and gateway required for interface {0}")]
    Ipv6PairIncomplete(LogicalInterface),

    #[error("Pure IPv6 configuration is not supported for interface {0}")]
    PureIpv6Unsupported(LogicalInterface),

    #[error("Invalid IPv4 address and netmask for interface {0}")]
    InvalidIpv4Address(LogicalInterface),

    #[error("Invalid IPv4 gateway for interface {0}")]
    InvalidIpv4Gateway(LogicalInterface),

    #[error("Invalid IPv6 address and netmask for interface {0}")]
    InvalidIpv6Address(LogicalInterface),

    #[error("Invalid IPv6 gateway for interface {0}")]
    InvalidIpv6Gateway(LogicalInterface),

    #[error("Invalid DNS configuration")]
    InvalidDns,
}

/// Outcome of one validation pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    issues: Vec<ValidationIssue>,
}

impl ValidationReport {
    /// True when no rule was violated
    pub fn is_valid(&self) -> bool {
        self.issues.is_empty()
    }

    /// Violations in detection order
    pub fn issues(&self) -> &[ValidationIssue] {
        &self.issues
    }

    /// Diagnostic lines in detection order
    pub fn diagnostics(&self) -> Vec<String> {
        self.issues.iter().map(ToString::to_string).collect()
    }

    fn record(&mut self, issue: Option<ValidationIssue>) {
        if let Some(issue) = issue {
            warn!("{}", issue);
            self.issues.push(issue);
        }
    }
}

/// Validate a configuration snapshot against the host's interfaces.
///
/// Check order: interface presence (sgi, s1), addressing (sgi, s1), DNS.
/// With `skip-networking` set the configuration is accepted as is.
pub fn validate_configuration(
    config: &GatewayConfig,
    host_interfaces: &BTreeSet<String>,
) -> ValidationReport {
    let mut report = ValidationReport::default();
    if config.skip_networking {
        debug!("Networking validation skipped by configuration");
        return report;
    }

    for interface in LogicalInterface::ALL {
        report.record(check_interface_presence(
            interface,
            config.interface_name(interface),
            host_interfaces,
        ));
    }
    for interface in LogicalInterface::ALL {
        report.record(check_interface_addressing(
            interface,
            config.addressing(interface),
        ));
    }
    if !is_valid_dns_config(&config.dns) {
        report.record(Some(ValidationIssue::InvalidDns));
    }

    report
}
