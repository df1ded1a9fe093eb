// file: src/cli/args.rs
// version: 1.0.0
// guid: a90344da-b2e8-4ae0-b309-7b1b589b09d6

//! Command line argument definitions

use crate::operator::UnitStatus;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "agw-operator")]
#[command(about = "Lifecycle operator for the Magma Access Gateway")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration snapshot (YAML or JSON, charm option names as keys)
    #[arg(short, long, global = true, env = "AGW_OPERATOR_CONFIG", default_value = "config.yaml")]
    pub config: String,

    /// Prefix for every host path the operator writes (testing and chroots)
    #[arg(long, global = true, env = "AGW_OPERATOR_ROOT")]
    pub root: Option<String>,

    /// Status the runtime currently shows, e.g. `active` or `waiting:<message>`
    #[arg(long, global = true, env = "AGW_OPERATOR_STATUS", default_value = "unknown")]
    pub status: UnitStatus,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Handle the install event
    Install,

    /// Handle the config-changed event
    ConfigChanged,

    /// Handle the start event
    Start,

    /// Handle a change of the magma-orchestrator relation
    OrchestratorChanged {
        #[arg(short, long, help = "Remote application relation data (YAML or JSON)")]
        relation_data: String,
    },

    /// Handle a new unit joining the lte-core relation
    LteCoreJoined {
        #[arg(long, help = "This unit is the application leader")]
        leader: bool,
    },

    /// Run the get-access-gateway-secrets action
    GetAccessGatewaySecrets,

    /// Run the post-install-checks action
    PostInstallChecks,

    /// Validate the configuration against this host
    Validate,

    /// Print the installer arguments for the configuration
    InstallArgs,
}
