// file: src/network/executor.rs
// version: 1.0.0
// guid: e1027058-b4eb-4bef-b1b8-737d1c5d4572

//! Command execution trait and the local process runner

use crate::error::GatewayError;
use crate::Result;
use tokio::process::Command;
use tracing::{debug, error};

/// Captured result of an external command
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    /// Exit code, `None` when the process was killed by a signal
    pub exit_code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    /// Output of a command that exited with the given code and no output
    pub fn with_code(exit_code: i32) -> Self {
        Self {
            exit_code: Some(exit_code),
            ..Default::default()
        }
    }

    /// Output of a successful command that printed `stdout`
    pub fn with_stdout(stdout: impl Into<String>) -> Self {
        Self {
            exit_code: Some(0),
            stdout: stdout.into(),
            stderr: String::new(),
        }
    }

    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }
}

/// Trait for running external commands, fire-and-wait
#[async_trait::async_trait]
pub trait CommandRunner: Send + Sync {
    /// Run `argv[0]` with the remaining arguments and capture its output.
    ///
    /// A non-zero exit is not an error here; only failure to launch is.
    async fn run(&self, argv: &[String]) -> Result<CommandOutput>;

    /// Run a command and turn a non-zero exit into a [`GatewayError::ProcessError`]
    async fn run_checked(&self, argv: &[String]) -> Result<CommandOutput> {
        let output = self.run(argv).await?;
        if !output.success() {
            error!("Command failed with exit code {:?}: {}", output.exit_code, argv.join(" "));
            if !output.stderr.trim().is_empty() {
                error!("STDERR: {}", output.stderr);
            }
            return Err(GatewayError::ProcessError {
                command: argv.join(" "),
                exit_code: output.exit_code,
                stderr: if output.stderr.is_empty() {
                    output.stdout
                } else {
                    output.stderr
                },
            });
        }
        Ok(output)
    }
}

/// Runs commands as child processes of the operator
#[derive(Debug, Clone, Default)]
pub struct LocalRunner;

impl LocalRunner {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait::async_trait]
impl CommandRunner for LocalRunner {
    async fn run(&self, argv: &[String]) -> Result<CommandOutput> {
        let (program, args) = argv
            .split_first()
            .ok_or_else(|| GatewayError::spawn("", "empty command line"))?;
        let command_line = argv.join(" ");
        debug!("Executing local command: {}", command_line);

        let output = Command::new(program)
            .args(args)
            .output()
            .await
            .map_err(|e| GatewayError::spawn(&command_line, e))?;

        let result = CommandOutput {
            exit_code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        };
        debug!("Command '{}' exited with {:?}", command_line, result.exit_code);
        Ok(result)
    }
}
