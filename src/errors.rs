// src/errors.rs

//! Crate-wide error aliases and helpers.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TaskdagError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// A task was reachable from the start node but had neither a cache
    /// entry for its key nor a registry entry. Aborts the run; no report
    /// is produced.
    #[error("No task registered for '{0}'")]
    UnregisteredTask(String),

    #[error("Cycle detected in task graph: {0}")]
    GraphCycle(String),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub use anyhow::Error;
pub type Result<T> = std::result::Result<T, TaskdagError>;
