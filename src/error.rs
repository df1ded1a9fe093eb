// file: src/error.rs
// version: 1.0.0
// guid: b2ea1e59-953c-40f7-afe6-7b218ec42ee5

use thiserror::Error;

/// Result type alias for the operator
pub type Result<T> = std::result::Result<T, GatewayError>;

/// Error types raised by the lifecycle glue.
///
/// Configuration problems are never reported through this type: the validation
/// engine returns diagnostics instead. Only I/O, parsing of host-provided files
/// and external command failures end up here.
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Command '{command}' failed with exit code {exit_code:?}: {stderr}")]
    ProcessError {
        command: String,
        exit_code: Option<i32>,
        stderr: String,
    },

    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Action failed: {0}")]
    ActionError(String),
}

impl GatewayError {
    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::ConfigError(msg.into())
    }

    /// Create a new network error
    pub fn network(msg: impl Into<String>) -> Self {
        Self::NetworkError(msg.into())
    }

    /// Create a new validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::ValidationError(msg.into())
    }

    /// Create a process error for a command that could not be launched
    pub fn spawn(command: impl Into<String>, err: impl std::fmt::Display) -> Self {
        Self::ProcessError {
            command: command.into(),
            exit_code: None,
            stderr: format!("Failed to execute command: {}", err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_error_display() {
        let err = GatewayError::ProcessError {
            command: "snap install magma-access-gateway".to_string(),
            exit_code: Some(1),
            stderr: "error: snap not found".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Command 'snap install magma-access-gateway' failed with exit code Some(1): error: snap not found"
        );
    }

    #[test]
    fn test_spawn_error_has_no_exit_code() {
        let err = GatewayError::spawn("show_gateway_info.py", "No such file or directory");
        match err {
            GatewayError::ProcessError { exit_code, stderr, .. } => {
                assert_eq!(exit_code, None);
                assert!(stderr.contains("No such file or directory"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: GatewayError = io.into();
        assert!(err.to_string().starts_with("IO error"));
    }
}
