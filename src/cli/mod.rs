// file: src/cli/mod.rs
// version: 1.0.0
// guid: a999e4cd-f473-470e-aca4-fb3813c6d302

//! Command line interface for the Access Gateway operator

pub mod args;
pub mod commands;

pub use args::Cli;
pub use commands::*;
