// file: src/utils/files.rs
// version: 1.0.0
// guid: 60f49e36-b10b-4148-9a9d-ea2416a05053

//! Idempotent file installation helpers

use crate::Result;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tracing::{debug, info};

/// Write `content` to `path`, creating parent directories as needed.
///
/// Returns `false` without touching the file when it already holds exactly
/// `content`, `true` when it was written.
pub fn install_file(path: &Path, content: &str) -> Result<bool> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    match fs::read_to_string(path) {
        Ok(existing) if existing == content => {
            debug!("{} is up to date", path.display());
            return Ok(false);
        }
        Ok(_) => {}
        Err(e) if e.kind() == ErrorKind::NotFound => {}
        Err(e) => return Err(e.into()),
    }

    fs::write(path, content)?;
    info!("Installed {}", path.display());
    Ok(true)
}

/// Remove a file if it exists. Returns whether something was removed.
pub fn remove_file_if_exists(path: &Path) -> Result<bool> {
    match fs::remove_file(path) {
        Ok(()) => {
            info!("Removed {}", path.display());
            Ok(true)
        }
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
        Err(e) => Err(e.into()),
    }
}
