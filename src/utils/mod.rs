// file: src/utils/mod.rs
// version: 1.0.0
// guid: 34b6cfbe-7775-4f9e-a604-331011ec415d

//! Utility modules for host file operations

pub mod files;

pub use files::{install_file, remove_file_if_exists};
