// src/engine/report.rs

//! The aggregate output of one orchestrator invocation.

use std::collections::HashMap;

use serde::Serialize;

use crate::artifact::Artifact;
use crate::engine::TaskName;

/// Immutable record of a single run.
///
/// The report owns its own copies of the order lists and result mapping;
/// it stays valid after the graph, registry, or cache move on.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    /// Breadth-first inspection plan from the start node.
    pub plan: Vec<TaskName>,
    /// Depth-first order in which tasks were invoked or reused, deduplicated
    /// by first visit.
    pub executed_order: Vec<TaskName>,
    /// Cache keys that were hits during this run, in hit order.
    pub cache_hits: Vec<String>,
    /// Last output artifact observed per task name.
    pub results: HashMap<TaskName, Artifact>,
}

impl RunReport {
    /// Whether every visited task was served from the cache.
    pub fn fully_cached(&self) -> bool {
        self.cache_hits.len() >= self.executed_order.len() && !self.executed_order.is_empty()
    }
}
