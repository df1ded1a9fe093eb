// file: src/lib.rs
// version: 1.0.0
// guid: 0b6e4f7a-2c19-4d83-a5e6-91f2c7d3b048

//! # Access Gateway Operator
//!
//! Lifecycle operator for a Magma Access Gateway host. It validates the
//! operator-supplied network configuration before anything touches the
//! machine, turns it into the gateway installer's argument vector and drives
//! the install, relation and action hooks dispatched by the host runtime.
//!
//! The validation engine and argument builder are pure; everything that
//! touches the host goes through [`network::CommandRunner`] and
//! [`network::HostNetwork`].

pub mod cli;
pub mod config;
pub mod error;
pub mod installer;
pub mod logging;
pub mod network;
pub mod operator;
pub mod utils;
pub mod validation;

pub use error::{GatewayError, Result};

/// Version information for the operator
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
