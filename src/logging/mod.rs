// file: src/logging/mod.rs
// version: 1.0.0
// guid: 4cc7a4bb-a1d7-4ef4-b4f8-6a5d5ead48ef

//! Logging system for the Access Gateway operator

pub mod logger;

pub use logger::{init_logger, with_hook_span};
