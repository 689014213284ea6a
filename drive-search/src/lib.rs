//! # Drive Search
//!
//! CLI entry point for the Drive search tool.
//!
//! This crate provides configuration wiring for running one search per
//! invocation against the Drive backend.

pub mod config;

pub use config::Dependencies;

use thiserror::Error;

/// Errors that can occur during CLI initialization.
#[derive(Error, Debug)]
pub enum CliError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Drive backend error.
    #[error("Drive error: {0}")]
    DriveError(#[from] drive_search_repository::DriveError),
}

impl CliError {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::ConfigError(msg.into())
    }
}
