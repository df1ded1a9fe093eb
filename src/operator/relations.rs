// file: src/operator/relations.rs
// version: 1.0.0
// guid: 831b4c3a-7d3d-4192-aa4b-f8f288e481db

//! Orchestrator and LTE core relation handling

use super::{GatewayOperator, HookOutcome, Paths, UnitStatus};
use crate::config::LogicalInterface;
use crate::installer::{service_command, ALL_MAGMA_SERVICES, MAGMAD_SERVICE};
use crate::network::{CommandRunner, HostNetwork};
use crate::utils::{install_file, remove_file_if_exists};
use crate::Result;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{debug, info};

/// Status shown until the orchestrator has published everything we need
pub const WAITING_FOR_ORCHESTRATOR_MESSAGE: &str = "Waiting for orchestrator relation data";

/// Status shown until the S1 interface carries an IPv4 address
pub const WAITING_FOR_MME_MESSAGE: &str = "Waiting for the MME interface to be ready";

/// Relation data key under which the MME address is published
pub const MME_IPV4_ADDRESS_KEY: &str = "mme_ipv4_address";

/// Connection details published by the orchestrator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrchestratorRelationData {
    pub root_ca_certificate: String,
    pub certifier_pem_certificate: String,
    pub orchestrator_address: String,
    pub orchestrator_port: String,
    pub bootstrapper_address: String,
    pub bootstrapper_port: String,
    pub fluentd_address: String,
    pub fluentd_port: String,
}

impl OrchestratorRelationData {
    /// Extract the connection details; `None` until every key is non-empty
    pub fn from_relation(data: &BTreeMap<String, String>) -> Option<Self> {
        let get = |key: &str| {
            data.get(key)
                .filter(|value| !value.is_empty())
                .cloned()
        };
        Some(Self {
            root_ca_certificate: get("root_ca_certificate")?,
            certifier_pem_certificate: get("certifier_pem_certificate")?,
            orchestrator_address: get("orchestrator_address")?,
            orchestrator_port: get("orchestrator_port")?,
            bootstrapper_address: get("bootstrapper_address")?,
            bootstrapper_port: get("bootstrapper_port")?,
            fluentd_address: get("fluentd_address")?,
            fluentd_port: get("fluentd_port")?,
        })
    }

    /// Render `control_proxy.yml`
    pub fn control_proxy_config(&self, root_ca_path: &Path) -> String {
        format!(
            "cloud_address: {}\n\
             cloud_port: {}\n\
             bootstrap_address: {}\n\
             bootstrap_port: {}\n\
             fluentd_address: {}\n\
             fluentd_port: {}\n\
             \n\
             rootca_cert: {}\n",
            self.orchestrator_address,
            self.orchestrator_port,
            self.bootstrapper_address,
            self.bootstrapper_port,
            self.fluentd_address,
            self.fluentd_port,
            root_ca_path.display(),
        )
    }
}

impl<R: CommandRunner, H: HostNetwork> GatewayOperator<R, H> {
    /// Point the gateway at the orchestrator described by the relation data
    pub async fn on_orchestrator_relation_changed(
        &mut self,
        data: &BTreeMap<String, String>,
    ) -> Result<HookOutcome> {
        let Some(orchestrator) = OrchestratorRelationData::from_relation(data) else {
            info!("Orchestrator relation data incomplete, deferring");
            self.set_status(UnitStatus::waiting(WAITING_FOR_ORCHESTRATOR_MESSAGE));
            return Ok(HookOutcome::Deferred);
        };

        let mut changed = install_file(&self.paths.root_ca, &orchestrator.root_ca_certificate)?;

        let had_certifier = self.paths.certifier.exists();
        let certifier_changed =
            install_file(&self.paths.certifier, &orchestrator.certifier_pem_certificate)?;
        if certifier_changed && had_certifier {
            // A new certifier invalidates the gateway's session certificate.
            info!("Certifier changed, removing gateway certificates");
            remove_file_if_exists(&self.paths.gateway_cert)?;
            remove_file_if_exists(&self.paths.gateway_key)?;
        }
        changed |= certifier_changed;

        // The gateway reads this file from the installed tree, not from the staging root.
        let control_proxy = orchestrator.control_proxy_config(&Paths::default().root_ca);
        changed |= install_file(&self.paths.control_proxy, &control_proxy)?;

        if changed {
            info!("Orchestrator configuration changed, restarting Magma services");
            self.runner
                .run_checked(&service_command(ALL_MAGMA_SERVICES, "stop"))
                .await?;
            self.runner
                .run_checked(&service_command(MAGMAD_SERVICE, "start"))
                .await?;
        } else {
            debug!("Orchestrator configuration unchanged");
        }

        if self.status == UnitStatus::waiting(WAITING_FOR_ORCHESTRATOR_MESSAGE) {
            self.set_status(UnitStatus::Active);
        }
        Ok(HookOutcome::Completed)
    }

    /// Publish the MME address to the LTE core; only the leader writes
    pub fn on_lte_core_relation_joined(&mut self, is_leader: bool) -> Result<HookOutcome> {
        if !is_leader {
            debug!("Not the leader, not publishing core information");
            return Ok(HookOutcome::Completed);
        }

        let interface = LogicalInterface::S1.renamed_name();
        match self.host.ipv4_address(interface)? {
            Some(address) => {
                self.app_relation_data
                    .insert(MME_IPV4_ADDRESS_KEY.to_string(), address.to_string());
                self.set_status(UnitStatus::Active);
                Ok(HookOutcome::Completed)
            }
            None => {
                info!("{} has no IPv4 address yet, deferring", interface);
                self.set_status(UnitStatus::waiting(WAITING_FOR_MME_MESSAGE));
                Ok(HookOutcome::Deferred)
            }
        }
    }
}
