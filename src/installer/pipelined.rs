// file: src/installer/pipelined.rs
// version: 1.0.0
// guid: 38e30a05-4788-4c50-a7e8-2a6e145c552f

//! Edits to the pipeline daemon configuration

use crate::error::GatewayError;
use crate::Result;
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

const ACCESS_CONTROL_KEY: &str = "access_control";
const BLOCK_LOCAL_IPS_KEY: &str = "block_agw_local_ips";

/// Set `access_control.block_agw_local_ips` in the pipelined config.
///
/// Returns `true` when the file was rewritten. Comments are not preserved.
pub fn set_block_agw_local_ips(path: &Path, block: bool) -> Result<bool> {
    let content = fs::read_to_string(path).map_err(|e| {
        GatewayError::config(format!(
            "Failed to read pipelined config {}: {}",
            path.display(),
            e
        ))
    })?;

    let mut document: Value = if content.trim().is_empty() {
        Value::Mapping(Mapping::new())
    } else {
        serde_yaml::from_str(&content)?
    };

    let root = document.as_mapping_mut().ok_or_else(|| {
        GatewayError::config(format!("{} is not a YAML mapping", path.display()))
    })?;

    let access_control = root
        .entry(Value::from(ACCESS_CONTROL_KEY))
        .or_insert_with(|| Value::Mapping(Mapping::new()));
    if access_control.is_null() {
        *access_control = Value::Mapping(Mapping::new());
    }
    let access_control = access_control.as_mapping_mut().ok_or_else(|| {
        GatewayError::config(format!("{} in {} is not a mapping", ACCESS_CONTROL_KEY, path.display()))
    })?;

    let current = access_control
        .get(BLOCK_LOCAL_IPS_KEY)
        .and_then(Value::as_bool);
    if current == Some(block) {
        debug!("{} already set to {}", BLOCK_LOCAL_IPS_KEY, block);
        return Ok(false);
    }

    access_control.insert(Value::from(BLOCK_LOCAL_IPS_KEY), Value::Bool(block));
    fs::write(path, serde_yaml::to_string(&document)?)?;
    info!("Set {} to {} in {}", BLOCK_LOCAL_IPS_KEY, block, path.display());
    Ok(true)
}
