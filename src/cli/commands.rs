// file: src/cli/commands.rs
// version: 1.0.0
// guid: dded3d21-69eb-4a55-9cef-3b5230d9a2c3

//! Command implementations for the CLI
//!
//! Every command prints one JSON document on stdout for the host runtime to
//! consume; logs go to stderr.

use crate::{
    config::loader::ConfigLoader,
    error::GatewayError,
    logging::with_hook_span,
    network::{LocalRunner, SystemNetwork},
    operator::{ActionFailure, ActionResults, GatewayOperator, HookOutcome, Paths, UnitStatus},
    Result,
};
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{error, info};

/// Operator wired to the local machine
pub type SystemOperator = GatewayOperator<LocalRunner, SystemNetwork>;

/// Options shared by every command
#[derive(Debug, Clone)]
pub struct CommandContext {
    pub config_path: String,
    pub root: Option<String>,
    pub status: UnitStatus,
}

/// Result of a lifecycle hook
#[derive(Debug, Serialize)]
pub struct HookReport<'a> {
    pub hook: &'a str,
    pub outcome: HookOutcome,
    pub status: &'a UnitStatus,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub relation_data: BTreeMap<String, String>,
}

/// Result of an action
#[derive(Debug, Serialize)]
pub struct ActionReport<'a> {
    pub action: &'a str,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub results: Option<ActionResults>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Result of a validation run
#[derive(Debug, Serialize)]
pub struct ValidationSummary {
    pub valid: bool,
    pub diagnostics: Vec<String>,
}

fn build_operator(ctx: &CommandContext) -> Result<SystemOperator> {
    let config = ConfigLoader::new().load_gateway_config(&ctx.config_path)?;
    let paths = match &ctx.root {
        Some(root) => Paths::under(Path::new(root)),
        None => Paths::default(),
    };
    Ok(GatewayOperator::new(config, LocalRunner::new(), SystemNetwork::new())
        .with_paths(paths)
        .with_status(ctx.status.clone()))
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn report_hook(hook: &str, operator: &SystemOperator, outcome: HookOutcome) -> Result<()> {
    info!("Hook {} finished: {:?}, status {}", hook, outcome, operator.status());
    print_json(&HookReport {
        hook,
        outcome,
        status: operator.status(),
        relation_data: operator.app_relation_data().clone(),
    })
}

fn report_action(
    action: &str,
    result: std::result::Result<ActionResults, ActionFailure>,
) -> Result<()> {
    match result {
        Ok(results) => print_json(&ActionReport {
            action,
            success: true,
            results: Some(results),
            message: None,
        }),
        Err(failure) => {
            error!("Action {} failed: {}", action, failure);
            print_json(&ActionReport {
                action,
                success: false,
                results: None,
                message: Some(failure.to_string()),
            })?;
            Err(GatewayError::ActionError(failure.0))
        }
    }
}

/// install hook
pub async fn install_command(ctx: &CommandContext) -> Result<()> {
    with_hook_span("install", || async {
        let mut operator = build_operator(ctx)?;
        let outcome = operator.on_install().await?;
        report_hook("install", &operator, outcome)
    })
    .await
}

/// config-changed hook
pub async fn config_changed_command(ctx: &CommandContext) -> Result<()> {
    with_hook_span("config-changed", || async {
        let mut operator = build_operator(ctx)?;
        let outcome = operator.on_config_changed().await?;
        report_hook("config-changed", &operator, outcome)
    })
    .await
}

/// start hook
pub async fn start_command(ctx: &CommandContext) -> Result<()> {
    with_hook_span("start", || async {
        let mut operator = build_operator(ctx)?;
        let outcome = operator.on_start().await?;
        report_hook("start", &operator, outcome)
    })
    .await
}

/// magma-orchestrator-relation-changed hook
pub async fn orchestrator_changed_command(ctx: &CommandContext, relation_data: &str) -> Result<()> {
    with_hook_span("magma-orchestrator-relation-changed", || async {
        let data = ConfigLoader::new().load_relation_data(relation_data)?;
        let mut operator = build_operator(ctx)?;
        let outcome = operator.on_orchestrator_relation_changed(&data).await?;
        report_hook("magma-orchestrator-relation-changed", &operator, outcome)
    })
    .await
}

/// lte-core-relation-joined hook
pub async fn lte_core_joined_command(ctx: &CommandContext, leader: bool) -> Result<()> {
    with_hook_span("lte-core-relation-joined", || async {
        let mut operator = build_operator(ctx)?;
        let outcome = operator.on_lte_core_relation_joined(leader)?;
        report_hook("lte-core-relation-joined", &operator, outcome)
    })
    .await
}

/// get-access-gateway-secrets action
pub async fn get_access_gateway_secrets_command(ctx: &CommandContext) -> Result<()> {
    with_hook_span("get-access-gateway-secrets", || async {
        let operator = build_operator(ctx)?;
        let result = operator.get_access_gateway_secrets().await;
        report_action("get-access-gateway-secrets", result)
    })
    .await
}

/// post-install-checks action
pub async fn post_install_checks_command(ctx: &CommandContext) -> Result<()> {
    with_hook_span("post-install-checks", || async {
        let operator = build_operator(ctx)?;
        let result = operator.post_install_checks().await;
        report_action("post-install-checks", result)
    })
    .await
}

/// Validate the configuration and print every diagnostic
pub async fn validate_command(ctx: &CommandContext) -> Result<()> {
    let operator = build_operator(ctx)?;
    let report = operator.validate()?;
    print_json(&ValidationSummary {
        valid: report.is_valid(),
        diagnostics: report.diagnostics(),
    })?;

    if !report.is_valid() {
        return Err(GatewayError::validation(format!(
            "{} configuration issue(s) found",
            report.issues().len()
        )));
    }
    Ok(())
}

/// Print the installer argument vector
pub async fn install_args_command(ctx: &CommandContext) -> Result<()> {
    let operator = build_operator(ctx)?;
    let arguments = operator.install_arguments()?;
    print_json(&arguments)
}
