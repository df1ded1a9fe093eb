// file: tests/common/mod.rs
// version: 1.0.0
// guid: 6c3f9e1a-54b2-4d7e-8a09-2f1d7c6b5e34

//! Test doubles for the host seams

#![allow(dead_code)]

use access_gateway_operator::{
    config::GatewayConfig,
    network::{CommandOutput, CommandRunner, HostNetwork},
    operator::{GatewayOperator, Paths},
    GatewayError, Result,
};
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::net::Ipv4Addr;
use std::path::Path;
use std::sync::Mutex;

/// Records every command line and answers from a scripted table.
///
/// Unscripted commands succeed with empty output.
#[derive(Default)]
pub struct FakeRunner {
    responses: Mutex<HashMap<String, CommandOutput>>,
    unlaunchable: Mutex<BTreeSet<String>>,
    calls: Mutex<Vec<String>>,
}

impl FakeRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `command_line` with `output` from now on
    pub fn respond(self, command_line: &str, output: CommandOutput) -> Self {
        self.responses
            .lock()
            .unwrap()
            .insert(command_line.to_string(), output);
        self
    }

    /// Make `command_line` fail to launch
    pub fn unlaunchable(self, command_line: &str) -> Self {
        self.unlaunchable
            .lock()
            .unwrap()
            .insert(command_line.to_string());
        self
    }

    /// Command lines run so far, space-joined
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn ran(&self, command_line: &str) -> bool {
        self.calls().iter().any(|call| call == command_line)
    }
}

#[async_trait::async_trait]
impl CommandRunner for FakeRunner {
    async fn run(&self, argv: &[String]) -> Result<CommandOutput> {
        let command_line = argv.join(" ");
        self.calls.lock().unwrap().push(command_line.clone());
        if self.unlaunchable.lock().unwrap().contains(&command_line) {
            return Err(GatewayError::spawn(&command_line, "No such file or directory"));
        }
        Ok(self
            .responses
            .lock()
            .unwrap()
            .get(&command_line)
            .cloned()
            .unwrap_or_else(|| CommandOutput::with_code(0)))
    }
}

/// Fixed set of interfaces and addresses
#[derive(Default)]
pub struct FakeHost {
    interfaces: BTreeSet<String>,
    ipv4: BTreeMap<String, Ipv4Addr>,
}

impl FakeHost {
    pub fn with_interfaces(names: &[&str]) -> Self {
        Self {
            interfaces: names.iter().map(|n| n.to_string()).collect(),
            ipv4: BTreeMap::new(),
        }
    }

    pub fn with_ipv4(mut self, interface: &str, address: Ipv4Addr) -> Self {
        self.interfaces.insert(interface.to_string());
        self.ipv4.insert(interface.to_string(), address);
        self
    }
}

impl HostNetwork for FakeHost {
    fn interface_names(&self) -> Result<BTreeSet<String>> {
        Ok(self.interfaces.clone())
    }

    fn ipv4_address(&self, interface: &str) -> Result<Option<Ipv4Addr>> {
        Ok(self.ipv4.get(interface).copied())
    }
}

pub type TestOperator = GatewayOperator<FakeRunner, FakeHost>;

pub fn operator(config: GatewayConfig, runner: FakeRunner, host: FakeHost) -> TestOperator {
    GatewayOperator::new(config, runner, host)
}

pub fn operator_under(
    root: &Path,
    config: GatewayConfig,
    runner: FakeRunner,
    host: FakeHost,
) -> TestOperator {
    GatewayOperator::new(config, runner, host).with_paths(Paths::under(root))
}

pub const IS_ENABLED: &str = "systemctl is-enabled magma@magmad";
pub const IS_ACTIVE: &str = "systemctl is-active magma@magmad";

/// Host with the two interfaces used by [`static_config`]
pub fn gateway_host() -> FakeHost {
    FakeHost::with_interfaces(&["lo", "enp0s1", "enp0s2"])
}

/// Valid configuration with static IPv4 on SGi and DHCP on S1
pub fn static_config() -> GatewayConfig {
    let mut config = GatewayConfig {
        sgi: Some("enp0s1".to_string()),
        s1: Some("enp0s2".to_string()),
        ..Default::default()
    };
    config.sgi_addressing.ipv4_address = Some("192.168.0.2/24".to_string());
    config.sgi_addressing.ipv4_gateway = Some("192.168.0.1".to_string());
    config
}

pub fn orchestrator_data() -> BTreeMap<String, String> {
    [
        ("root_ca_certificate", "root_ca_certificate_content"),
        ("certifier_pem_certificate", "certifier_pem_certificate_content"),
        ("orchestrator_address", "orchestrator.com"),
        ("orchestrator_port", "443"),
        ("bootstrapper_address", "bootstrapper.com"),
        ("bootstrapper_port", "443"),
        ("fluentd_address", "fluentd.com"),
        ("fluentd_port", "24224"),
    ]
    .iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect()
}
