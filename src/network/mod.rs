// file: src/network/mod.rs
// version: 1.0.0
// guid: 106cfeef-80b8-4cfa-96ff-90ebdb70715a

//! Host-facing seams: external commands and network interfaces

pub mod executor;
pub mod host;

pub use executor::{CommandOutput, CommandRunner, LocalRunner};
pub use host::{HostNetwork, SystemNetwork};
