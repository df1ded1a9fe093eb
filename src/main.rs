// file: src/main.rs
// version: 1.0.0
// guid: 3f0c1d52-8a47-4e7b-9d15-62c0b8e4a971

//! Access Gateway operator - Main entry point

use access_gateway_operator::{
    cli::{
        args::{Cli, Commands},
        commands::*,
    },
    logging,
};
use anyhow::Context;
use clap::Parser;
use tokio::signal;
use tracing::warn;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    logging::init_logger(cli.verbose, cli.quiet).context("Failed to initialize logging")?;

    let ctx = CommandContext {
        config_path: cli.config,
        root: cli.root,
        status: cli.status,
    };
    let ctx = &ctx;
    let command = cli.command;

    let command_future = async move {
        match command {
            Commands::Install => install_command(ctx).await,
            Commands::ConfigChanged => config_changed_command(ctx).await,
            Commands::Start => start_command(ctx).await,
            Commands::OrchestratorChanged { relation_data } => {
                orchestrator_changed_command(ctx, &relation_data).await
            }
            Commands::LteCoreJoined { leader } => lte_core_joined_command(ctx, leader).await,
            Commands::GetAccessGatewaySecrets => get_access_gateway_secrets_command(ctx).await,
            Commands::PostInstallChecks => post_install_checks_command(ctx).await,
            Commands::Validate => validate_command(ctx).await,
            Commands::InstallArgs => install_args_command(ctx).await,
        }
    };

    tokio::select! {
        result = command_future => result.map_err(anyhow::Error::from),
        interrupted = signal::ctrl_c() => {
            interrupted.context("Failed to listen for Ctrl+C")?;
            warn!("Hook interrupted, the runtime will re-dispatch it");
            std::process::exit(130);
        }
    }
}
