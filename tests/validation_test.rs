// file: tests/validation_test.rs
// version: 1.0.0
// guid: 2d5f8a13-97c4-4b0e-a6d2-e8134b9f7c50

//! Validation engine and argument builder through the public API

use access_gateway_operator::{
    config::{loader::ConfigLoader, GatewayConfig, LogicalInterface},
    installer::build_install_arguments,
    validation::{
        check_interface_addressing, is_valid_dns_config, is_valid_ipv4_address_with_prefix,
        validate_configuration, ValidationIssue,
    },
    Result,
};
use std::collections::BTreeSet;

fn host(names: &[&str]) -> BTreeSet<String> {
    names.iter().map(|n| n.to_string()).collect()
}

fn parse(content: &str) -> Result<GatewayConfig> {
    ConfigLoader::new().parse_gateway_config(content)
}

#[test]
fn test_malformed_ipv4_cidr_is_rejected() {
    for value in ["10.0.0.2", "10.0.a.2/24", "10.0.0.256/24", "300.1.1.1/8", "10.0.0.2/33", ""] {
        assert!(!is_valid_ipv4_address_with_prefix(value), "{value} accepted");
    }
}

#[test]
fn test_ipv4_host_prefix_is_rejected() {
    assert!(!is_valid_ipv4_address_with_prefix("10.0.0.2/32"));
    assert!(is_valid_ipv4_address_with_prefix("10.0.0.2/24"));
}

#[test]
fn test_dns_examples() {
    assert!(is_valid_dns_config(r#"["8.8.8.8","208.67.222.222"]"#));
    assert!(!is_valid_dns_config("notjson"));
    assert!(!is_valid_dns_config(r#"{"a":"8.8.8.8"}"#));
    assert!(!is_valid_dns_config(r#"["8.8.8.8","dns1.example.com"]"#));
}

#[test]
fn test_missing_ipv4_gateway() -> Result<()> {
    let config = parse("sgi-ipv4-address: 10.0.0.2/24\n")?;

    let issue = check_interface_addressing(LogicalInterface::Sgi, config.addressing(LogicalInterface::Sgi));

    assert_eq!(
        issue.map(|i| i.to_string()).as_deref(),
        Some("Both IPv4 address and gateway required for interface sgi")
    );
    Ok(())
}

#[test]
fn test_pure_ipv6_is_unsupported() -> Result<()> {
    let config = parse("sgi-ipv6-address: 2001:db8::2/64\nsgi-ipv6-gateway: 2001:db8::1\n")?;

    let issue = check_interface_addressing(LogicalInterface::Sgi, config.addressing(LogicalInterface::Sgi));

    assert_eq!(
        issue.map(|i| i.to_string()).as_deref(),
        Some("Pure IPv6 configuration is not supported for interface sgi")
    );
    Ok(())
}

#[test]
fn test_skip_networking_ignores_everything_else() -> Result<()> {
    let config = parse(
        "skip-networking: true\n\
         sgi: missing0\n\
         sgi-ipv4-address: garbage\n\
         dns: notjson\n",
    )?;

    assert!(validate_configuration(&config, &BTreeSet::new()).is_valid());
    assert_eq!(build_install_arguments(&config), vec!["--skip-networking"]);
    Ok(())
}

#[test]
fn test_dhcp_configuration_arguments() -> Result<()> {
    let config = parse(
        "sgi: enp0s1\n\
         s1: enp0s2\n\
         dns: '[\"8.8.8.8\",\"208.67.222.222\"]'\n",
    )?;

    let report = validate_configuration(&config, &host(&["enp0s1", "enp0s2"]));

    assert!(report.is_valid(), "{:?}", report.diagnostics());
    assert_eq!(
        build_install_arguments(&config),
        vec!["--dns", "8.8.8.8", "208.67.222.222", "--sgi", "enp0s1", "--s1", "enp0s2"]
    );
    Ok(())
}

#[test]
fn test_json_configuration_is_accepted() -> Result<()> {
    let config = parse(r#"{"sgi": "enp0s1", "s1": "enp0s2", "block-agw-local-ips": false}"#)?;

    assert!(validate_configuration(&config, &host(&["enp0s1", "enp0s2"])).is_valid());
    assert_eq!(
        build_install_arguments(&config),
        vec![
            "--dns",
            "8.8.8.8",
            "208.67.222.222",
            "--unblock-local-ips",
            "--sgi",
            "enp0s1",
            "--s1",
            "enp0s2"
        ]
    );
    Ok(())
}

#[test]
fn test_every_issue_is_reported_in_order() -> Result<()> {
    let config = parse(
        "s1: enp9s9\n\
         sgi-ipv4-address: 10.0.0.2/24\n\
         s1-ipv4-address: 10.1.0.2/32\n\
         s1-ipv4-gateway: 10.1.0.1\n\
         dns: '[]x'\n",
    )?;

    let report = validate_configuration(&config, &host(&["enp0s1"]));

    assert_eq!(
        report.issues(),
        &[
            ValidationIssue::InterfaceNameRequired(LogicalInterface::Sgi),
            ValidationIssue::InterfaceNotFound("enp9s9".to_string()),
            ValidationIssue::Ipv4PairIncomplete(LogicalInterface::Sgi),
            ValidationIssue::InvalidIpv4Address(LogicalInterface::S1),
            ValidationIssue::InvalidDns,
        ]
    );
    Ok(())
}

#[test]
fn test_validation_is_idempotent() -> Result<()> {
    let config = parse("sgi: enp0s1\ns1-ipv6-address: nonsense\ndns: nope\n")?;
    let interfaces = host(&["enp0s1"]);

    let first = validate_configuration(&config, &interfaces);
    let second = validate_configuration(&config, &interfaces);

    assert!(!first.is_valid());
    assert_eq!(first, second);
    assert_eq!(first.diagnostics(), second.diagnostics());
    Ok(())
}
