// file: src/validation/dns.rs
// version: 1.0.0
// guid: ae384882-9457-4775-933c-4ab169683a8a

//! Validation of the JSON-encoded DNS resolver list

use serde_json::Value;
use std::net::IpAddr;

/// Parse a JSON array of resolver addresses, keeping the original spelling.
///
/// Returns `None` unless the input is a non-empty array whose every element is
/// a string holding a bare IPv4 or IPv6 address.
pub fn parse_dns_servers(raw: &str) -> Option<Vec<String>> {
    let value: Value = serde_json::from_str(raw).ok()?;
    let entries = value.as_array()?;
    if entries.is_empty() {
        return None;
    }

    entries
        .iter()
        .map(|entry| {
            let server = entry.as_str()?;
            server.parse::<IpAddr>().ok()?;
            Some(server.to_string())
        })
        .collect()
}

/// Validate that the string is a non-empty JSON list of IP addresses
pub fn is_valid_dns_config(raw: &str) -> bool {
    parse_dns_servers(raw).is_some()
}
