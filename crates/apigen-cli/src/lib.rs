//! Apigen command-line support
//!
//! Configuration loading, command implementations and output rendering
//! behind the `apigen` binary.

pub mod commands;
pub mod config;
pub mod output;

pub use config::{ApigenConfig, ConfigError, OutputFormat, DEFAULT_CONFIG_FILE};
