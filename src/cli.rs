// src/cli.rs

//! CLI argument parsing using `clap`.

use clap::{Parser, ValueEnum};

/// Command-line arguments for `taskdag`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "taskdag",
    version,
    about = "Plan and execute a task graph, memoizing task outputs.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the graph definition (TOML).
    ///
    /// Default: `Taskdag.toml` in the current working directory.
    #[arg(long, value_name = "PATH", default_value = "Taskdag.toml")]
    pub config: String,

    /// Start task for the run. Overrides `[run].start` from the config.
    #[arg(long, value_name = "NAME")]
    pub start: Option<String>,

    /// Seed the start task with an initial artifact `{ dataset_path = <PATH> }`
    /// (the field name follows `[config].cache_key_field`).
    #[arg(long, value_name = "PATH")]
    pub dataset: Option<String>,

    /// Number of times to run the graph over one shared cache.
    ///
    /// A second run over an unchanged graph is served entirely from cache.
    #[arg(long, value_name = "N", default_value_t = 1)]
    pub runs: u32,

    /// Parse + validate, print the breadth-first plan, but don't execute
    /// any tasks.
    #[arg(long)]
    pub dry_run: bool,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `TASKDAG_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
