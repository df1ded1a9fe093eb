// file: src/operator/actions.rs
// version: 1.0.0
// guid: dc141cdc-b422-48d0-895f-04d07696e4f5

//! Operator actions: gateway secrets and post-install checks

use super::GatewayOperator;
use crate::installer::{gateway_info_command, post_install_command};
use crate::network::{CommandRunner, HostNetwork};
use std::collections::BTreeMap;
use thiserror::Error;
use tracing::{error, warn};

pub const MAGMA_NOT_RUNNING_MESSAGE: &str = "Magma is not running! Please start Magma and try again.";
pub const SECRETS_FAILURE_MESSAGE: &str = "Failed to get Magma Access Gateway secrets!";
pub const POST_INSTALL_SUCCESS_MESSAGE: &str =
    "Magma AGW post-installation checks finished successfully.";
pub const POST_INSTALL_FAILED_MESSAGE: &str =
    "Post-installation checks failed. For more information, please check journalctl logs.";
pub const POST_INSTALL_ERROR_MESSAGE: &str = "Failed to run post-install checks.";

const HARDWARE_ID_LABEL: &str = "Hardware ID";
const CHALLENGE_KEY_LABEL: &str = "Challenge key";

/// Key/value results handed back to whoever invoked the action
pub type ActionResults = BTreeMap<String, String>;

/// An action that failed with a user-facing message
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct ActionFailure(pub String);

impl ActionFailure {
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }
}

/// Values the orchestrator needs to register this gateway
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewaySecrets {
    pub hardware_id: String,
    pub challenge_key: String,
}

/// Extract the hardware ID and challenge key from `show_gateway_info.py` output.
///
/// The output lists each label followed by a dashed underline and the value.
pub fn parse_gateway_info(output: &str) -> Option<GatewaySecrets> {
    let lines: Vec<&str> = output
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('-'))
        .collect();

    let value_after = |label: &str| -> Option<String> {
        let index = lines.iter().position(|line| *line == label)?;
        let value = lines.get(index + 1)?;
        if *value == HARDWARE_ID_LABEL || *value == CHALLENGE_KEY_LABEL {
            return None;
        }
        Some(value.to_string())
    };

    Some(GatewaySecrets {
        hardware_id: value_after(HARDWARE_ID_LABEL)?,
        challenge_key: value_after(CHALLENGE_KEY_LABEL)?,
    })
}

impl<R: CommandRunner, H: HostNetwork> GatewayOperator<R, H> {
    /// get-access-gateway-secrets action
    pub async fn get_access_gateway_secrets(&self) -> Result<ActionResults, ActionFailure> {
        let running = self
            .is_magma_running()
            .await
            .map_err(|e| ActionFailure::new(e.to_string()))?;
        if !running {
            return Err(ActionFailure::new(MAGMA_NOT_RUNNING_MESSAGE));
        }

        let output = match self.runner.run_checked(&gateway_info_command()).await {
            Ok(output) => output,
            Err(e) => {
                error!("Failed to read gateway info: {}", e);
                return Err(ActionFailure::new(SECRETS_FAILURE_MESSAGE));
            }
        };

        let secrets = parse_gateway_info(&output.stdout).ok_or_else(|| {
            warn!("Gateway info output did not contain both secrets");
            ActionFailure::new(SECRETS_FAILURE_MESSAGE)
        })?;

        let mut results = ActionResults::new();
        results.insert("hardware-id".to_string(), secrets.hardware_id);
        results.insert("challenge-key".to_string(), secrets.challenge_key);
        Ok(results)
    }

    /// post-install-checks action
    pub async fn post_install_checks(&self) -> Result<ActionResults, ActionFailure> {
        let output = match self.runner.run(&post_install_command()).await {
            Ok(output) => output,
            Err(e) => {
                error!("Failed to run post-install checks: {}", e);
                return Err(ActionFailure::new(POST_INSTALL_ERROR_MESSAGE));
            }
        };

        let message = if output.success() {
            POST_INSTALL_SUCCESS_MESSAGE
        } else {
            warn!("Post-install checks exited with {:?}", output.exit_code);
            POST_INSTALL_FAILED_MESSAGE
        };

        let mut results = ActionResults::new();
        results.insert("post-install-checks-output".to_string(), message.to_string());
        Ok(results)
    }
}
