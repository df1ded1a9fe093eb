// file: src/operator/lifecycle.rs
// version: 1.0.0
// guid: b11e7b45-787b-49a3-91d8-d0ea494eb293

//! install, config-changed and start hooks

use super::{GatewayOperator, HookOutcome, UnitStatus};
use crate::installer::{
    install_command, is_active_command, is_enabled_command, reboot_command, service_command,
    set_block_agw_local_ips, snap_install_command, MAGMAD_SERVICE, PIPELINED_SERVICE,
};
use crate::network::{CommandRunner, HostNetwork};
use crate::Result;
use tracing::{info, warn};

/// Blocked status shown when validation fails; details go to the log
pub const INVALID_CONFIGURATION_MESSAGE: &str = "Configuration is invalid. Check logs for details";

impl<R: CommandRunner, H: HostNetwork> GatewayOperator<R, H> {
    /// Install the gateway unless it is already installed
    pub async fn on_install(&mut self) -> Result<HookOutcome> {
        if self.is_magma_enabled().await? {
            info!("Magma AGW is already installed, nothing to do");
            return Ok(HookOutcome::Completed);
        }
        self.install().await
    }

    /// Re-run installation, or apply runtime settings once installed
    pub async fn on_config_changed(&mut self) -> Result<HookOutcome> {
        if self.is_magma_enabled().await? {
            self.apply_local_ips_setting().await?;
            return Ok(HookOutcome::Completed);
        }
        self.install().await
    }

    /// Mark the unit active once the gateway service runs
    pub async fn on_start(&mut self) -> Result<HookOutcome> {
        if !self.is_magma_running().await? {
            info!("{} is not running yet, deferring start", MAGMAD_SERVICE);
            return Ok(HookOutcome::Deferred);
        }
        self.set_status(UnitStatus::Active);
        Ok(HookOutcome::Completed)
    }

    async fn install(&mut self) -> Result<HookOutcome> {
        self.set_status(UnitStatus::maintenance("Installing AGW Snap"));
        self.runner
            .run_checked(&snap_install_command(&self.config.channel))
            .await?;

        let report = self.validate()?;
        if !report.is_valid() {
            warn!(
                "Installation blocked by {} configuration issue(s)",
                report.issues().len()
            );
            self.set_status(UnitStatus::blocked(INVALID_CONFIGURATION_MESSAGE));
            return Ok(HookOutcome::Completed);
        }

        self.set_status(UnitStatus::maintenance("Installing AGW"));
        self.runner.run_checked(&install_command(&self.config)).await?;

        self.runner.run_checked(&reboot_command()).await?;
        self.set_status(UnitStatus::maintenance("Rebooting to apply changes"));
        Ok(HookOutcome::Completed)
    }

    async fn apply_local_ips_setting(&mut self) -> Result<()> {
        let changed =
            set_block_agw_local_ips(&self.paths.pipelined_config, self.config.block_agw_local_ips)?;
        if changed {
            self.runner
                .run_checked(&service_command(PIPELINED_SERVICE, "restart"))
                .await?;
        }
        Ok(())
    }

    pub(crate) async fn is_magma_enabled(&self) -> Result<bool> {
        Ok(self.runner.run(&is_enabled_command(MAGMAD_SERVICE)).await?.success())
    }

    pub(crate) async fn is_magma_running(&self) -> Result<bool> {
        Ok(self.runner.run(&is_active_command(MAGMAD_SERVICE)).await?.success())
    }
}
