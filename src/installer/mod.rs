// file: src/installer/mod.rs
// version: 1.0.0
// guid: 2ef51680-cf8a-4e42-842d-e0438ffbf370

//! External command lines used to install and drive the gateway

pub mod args;
pub mod pipelined;

pub use args::build_install_arguments;
pub use pipelined::set_block_agw_local_ips;

use crate::config::GatewayConfig;

/// Snap that ships the gateway installer
pub const SNAP_NAME: &str = "magma-access-gateway";

/// Installer entry point provided by the snap
pub const INSTALL_COMMAND: &str = "magma-access-gateway.install";

/// Post-installation health checks provided by the snap
pub const POST_INSTALL_COMMAND: &str = "magma-access-gateway.post-install";

/// Prints the gateway's hardware ID and challenge key
pub const GATEWAY_INFO_COMMAND: &str = "show_gateway_info.py";

/// Main gateway service unit
pub const MAGMAD_SERVICE: &str = "magma@magmad";

/// Pipeline daemon service unit
pub const PIPELINED_SERVICE: &str = "magma@pipelined";

/// Pattern matching every gateway service unit
pub const ALL_MAGMA_SERVICES: &str = "magma@*";

fn argv(parts: &[&str]) -> Vec<String> {
    parts.iter().map(|p| p.to_string()).collect()
}

/// `snap install magma-access-gateway --classic --channel <channel>`
pub fn snap_install_command(channel: &str) -> Vec<String> {
    argv(&["snap", "install", SNAP_NAME, "--classic", "--channel", channel])
}

/// Installer invocation; rebooting is left to the operator
pub fn install_command(config: &GatewayConfig) -> Vec<String> {
    let mut command = argv(&[INSTALL_COMMAND, "--no-reboot"]);
    command.extend(build_install_arguments(config));
    command
}

/// Schedule a reboot one minute out so the hook can report its status first
pub fn reboot_command() -> Vec<String> {
    argv(&["shutdown", "--reboot", "+1"])
}

/// `systemctl is-enabled <unit>`
pub fn is_enabled_command(unit: &str) -> Vec<String> {
    argv(&["systemctl", "is-enabled", unit])
}

/// `systemctl is-active <unit>`
pub fn is_active_command(unit: &str) -> Vec<String> {
    argv(&["systemctl", "is-active", unit])
}

/// `service <unit> <action>`
pub fn service_command(unit: &str, action: &str) -> Vec<String> {
    argv(&["service", unit, action])
}

pub fn post_install_command() -> Vec<String> {
    argv(&[POST_INSTALL_COMMAND])
}

pub fn gateway_info_command() -> Vec<String> {
    argv(&[GATEWAY_INFO_COMMAND])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snap_install_command() {
        assert_eq!(
            snap_install_command("1.8/stable"),
            vec!["snap", "install", "magma-access-gateway", "--classic", "--channel", "1.8/stable"]
        );
    }

    #[test]
    fn test_install_command_prefixes_no_reboot() {
        let config = GatewayConfig {
            skip_networking: true,
            ..Default::default()
        };
        assert_eq!(
            install_command(&config),
            vec!["magma-access-gateway.install", "--no-reboot", "--skip-networking"]
        );
    }

    #[test]
    fn test_service_commands() {
        assert_eq!(
            is_enabled_command(MAGMAD_SERVICE),
            vec!["systemctl", "is-enabled", "magma@magmad"]
        );
        assert_eq!(
            service_command(ALL_MAGMA_SERVICES, "stop"),
            vec!["service", "magma@*", "stop"]
        );
        assert_eq!(reboot_command(), vec!["shutdown", "--reboot", "+1"]);
    }
}
