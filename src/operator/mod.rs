// file: src/operator/mod.rs
// version: 1.0.0
// guid: a00c5b7d-d164-4a5b-a5c0-ebdc26d1cfd5

//! Lifecycle sequencing for the Access Gateway unit
//!
//! The host runtime dispatches one event at a time; each hook here runs to
//! completion, updates the unit status and reports whether the event should
//! be re-dispatched later ([`HookOutcome::Deferred`]).

pub mod actions;
pub mod lifecycle;
pub mod relations;

pub use actions::{ActionFailure, ActionResults, GatewaySecrets};
pub use lifecycle::INVALID_CONFIGURATION_MESSAGE;
pub use relations::OrchestratorRelationData;

use crate::config::GatewayConfig;
use crate::error::GatewayError;
use crate::installer::build_install_arguments;
use crate::network::{CommandRunner, HostNetwork};
use crate::validation::{validate_configuration, ValidationReport};
use crate::Result;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::info;

/// Unit status as presented by the host runtime
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "message", rename_all = "lowercase")]
pub enum UnitStatus {
    Unknown,
    Active,
    Maintenance(String),
    Blocked(String),
    Waiting(String),
}

impl UnitStatus {
    pub fn maintenance(msg: impl Into<String>) -> Self {
        Self::Maintenance(msg.into())
    }

    pub fn blocked(msg: impl Into<String>) -> Self {
        Self::Blocked(msg.into())
    }

    pub fn waiting(msg: impl Into<String>) -> Self {
        Self::Waiting(msg.into())
    }
}

impl fmt::Display for UnitStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnitStatus::Unknown => f.write_str("unknown"),
            UnitStatus::Active => f.write_str("active"),
            UnitStatus::Maintenance(msg) => write!(f, "maintenance: {}", msg),
            UnitStatus::Blocked(msg) => write!(f, "blocked: {}", msg),
            UnitStatus::Waiting(msg) => write!(f, "waiting: {}", msg),
        }
    }
}

/// Parse the status the runtime currently shows: `active`, `unknown` or
/// `<maintenance|blocked|waiting>:<message>`.
impl FromStr for UnitStatus {
    type Err = GatewayError;

    fn from_str(s: &str) -> Result<Self> {
        let (kind, message) = match s.split_once(':') {
            Some((kind, message)) => (kind.trim(), Some(message.trim())),
            None => (s.trim(), None),
        };
        match (kind.to_ascii_lowercase().as_str(), message) {
            ("unknown", None) => Ok(Self::Unknown),
            ("active", None) => Ok(Self::Active),
            ("maintenance", Some(msg)) => Ok(Self::maintenance(msg)),
            ("blocked", Some(msg)) => Ok(Self::blocked(msg)),
            ("waiting", Some(msg)) => Ok(Self::waiting(msg)),
            _ => Err(GatewayError::config(format!("Invalid unit status '{}'", s))),
        }
    }
}

/// Whether a hook finished or must be re-dispatched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HookOutcome {
    Completed,
    Deferred,
}

/// Host file locations written by the operator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paths {
    pub root_ca: PathBuf,
    pub certifier: PathBuf,
    pub gateway_cert: PathBuf,
    pub gateway_key: PathBuf,
    pub control_proxy: PathBuf,
    pub pipelined_config: PathBuf,
}

impl Default for Paths {
    fn default() -> Self {
        Self::under(Path::new("/"))
    }
}

impl Paths {
    /// Standard layout rooted at `root` instead of `/`
    pub fn under(root: &Path) -> Self {
        Self {
            root_ca: root.join("var/opt/magma/tmp/certs/rootCA.pem"),
            certifier: root.join("var/opt/magma/tmp/certs/certifier.pem"),
            gateway_cert: root.join("var/opt/magma/certs/gateway.crt"),
            gateway_key: root.join("var/opt/magma/certs/gateway.key"),
            control_proxy: root.join("var/opt/magma/configs/control_proxy.yml"),
            pipelined_config: root.join("etc/magma/pipelined.yml"),
        }
    }
}

/// The Access Gateway unit: configuration snapshot plus host seams
pub struct GatewayOperator<R, H> {
    config: GatewayConfig,
    runner: R,
    host: H,
    paths: Paths,
    status: UnitStatus,
    app_relation_data: BTreeMap<String, String>,
}

impl<R: CommandRunner, H: HostNetwork> GatewayOperator<R, H> {
    /// Create an operator for one hook invocation
    pub fn new(config: GatewayConfig, runner: R, host: H) -> Self {
        Self {
            config,
            runner,
            host,
            paths: Paths::default(),
            status: UnitStatus::Unknown,
            app_relation_data: BTreeMap::new(),
        }
    }

    /// Use a different file layout
    pub fn with_paths(mut self, paths: Paths) -> Self {
        self.paths = paths;
        self
    }

    /// Start from the status the runtime currently shows
    pub fn with_status(mut self, status: UnitStatus) -> Self {
        self.status = status;
        self
    }

    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    pub fn status(&self) -> &UnitStatus {
        &self.status
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    pub fn paths(&self) -> &Paths {
        &self.paths
    }

    /// Data this unit published on its application's relation bucket
    pub fn app_relation_data(&self) -> &BTreeMap<String, String> {
        &self.app_relation_data
    }

    /// Validate the configuration against the current host interfaces
    pub fn validate(&self) -> Result<ValidationReport> {
        let host_interfaces = if self.config.skip_networking {
            Default::default()
        } else {
            self.host.interface_names()?
        };
        Ok(validate_configuration(&self.config, &host_interfaces))
    }

    /// Installer arguments, refusing configurations that fail validation
    pub fn install_arguments(&self) -> Result<Vec<String>> {
        let report = self.validate()?;
        if !report.is_valid() {
            return Err(GatewayError::validation(report.diagnostics().join("; ")));
        }
        Ok(build_install_arguments(&self.config))
    }

    fn set_status(&mut self, status: UnitStatus) {
        info!("Unit status: {}", status);
        self.status = status;
    }
}
