// src/engine/mod.rs

//! Orchestration engine for taskdag.
//!
//! This module ties together:
//! - cache key derivation ([`keys`])
//! - the depth-first executor that actually invokes tasks ([`executor`])
//! - the run report returned to the caller ([`report`])
//! - the orchestrator façade composing planner + executor ([`orchestrator`])
//!
//! The engine is synchronous and single-threaded: a run is a strict
//! call/return walk with no suspension points and no cancellation.

/// Canonical task name type used throughout the engine.
pub type TaskName = String;

pub mod executor;
pub mod keys;
pub mod orchestrator;
pub mod report;

pub use executor::{ExecutionTrace, Executor};
pub use keys::CacheKeyPolicy;
pub use orchestrator::Orchestrator;
pub use report::RunReport;
