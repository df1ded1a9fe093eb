// file: src/installer/args.rs
// version: 1.0.0
// guid: 15a25390-6a8d-41a0-8f75-c0fb8c5f79ec

//! Installer argument vector synthesis

use crate::config::{GatewayConfig, IpFamily, LogicalInterface};
use crate::validation::parse_dns_servers;

/// Build the installer arguments for a configuration that passed validation.
///
/// Layout: `--dns <ip>...`, optional `--unblock-local-ips`, `--sgi <name>`,
/// `--s1 <name>`, then address/gateway pairs for sgi-ipv4, sgi-ipv6, s1-ipv4,
/// s1-ipv6. A pair is emitted only when its address is set. `skip-networking`
/// collapses everything to `--skip-networking`. No flag is ever emitted
/// without a value.
pub fn build_install_arguments(config: &GatewayConfig) -> Vec<String> {
    if config.skip_networking {
        return vec!["--skip-networking".to_string()];
    }

    let mut arguments = Vec::new();

    let dns_servers = parse_dns_servers(&config.dns).unwrap_or_default();
    if !dns_servers.is_empty() {
        arguments.push("--dns".to_string());
        arguments.extend(dns_servers);
    }

    if !config.block_agw_local_ips {
        arguments.push("--unblock-local-ips".to_string());
    }

    for interface in LogicalInterface::ALL {
        if let Some(name) = config.interface_name(interface) {
            push_flag(&mut arguments, &format!("--{}", interface), name);
        }
    }

    for interface in LogicalInterface::ALL {
        let addressing = config.addressing(interface);
        for family in [IpFamily::V4, IpFamily::V6] {
            let Some(address) = addressing.address(family) else {
                continue;
            };
            let prefix = format!("--{}-{}", interface, family.as_str());
            push_flag(&mut arguments, &format!("{}-address", prefix), address);
            if let Some(gateway) = addressing.gateway(family) {
                push_flag(&mut arguments, &format!("{}-gateway", prefix), gateway);
            }
        }
    }

    arguments
}

fn push_flag(arguments: &mut Vec<String>, flag: &str, value: &str) {
    arguments.push(flag.to_string());
    arguments.push(value.to_string());
}
