// src/engine/orchestrator.rs

use tracing::info;

use crate::artifact::Artifact;
use crate::cache::ResultCache;
use crate::dag::{plan, TaskGraph};
use crate::engine::executor::Executor;
use crate::engine::keys::CacheKeyPolicy;
use crate::engine::report::RunReport;
use crate::errors::Result;
use crate::registry::TaskRegistry;

/// Thin façade composing planner and executor into a single call.
///
/// Holds only the cache key policy; all per-run state lives inside the
/// executor. Planning and execution logic are not duplicated here.
#[derive(Debug, Clone, Default)]
pub struct Orchestrator {
    keys: CacheKeyPolicy,
}

impl Orchestrator {
    /// Orchestrator with the default key policy (`dataset_path`).
    pub fn new() -> Self {
        Self::default()
    }

    /// Orchestrator with a custom cache key policy.
    pub fn with_key_policy(keys: CacheKeyPolicy) -> Self {
        Self { keys }
    }

    /// Plan and execute the graph from `start`, with no initial artifact.
    pub fn run<C: ResultCache>(
        &self,
        graph: &TaskGraph,
        registry: &TaskRegistry,
        start: &str,
        cache: &mut C,
    ) -> Result<RunReport> {
        self.run_with_input(graph, registry, start, None, cache)
    }

    /// Plan and execute the graph from `start`, feeding `initial` to the
    /// start node.
    pub fn run_with_input<C: ResultCache>(
        &self,
        graph: &TaskGraph,
        registry: &TaskRegistry,
        start: &str,
        initial: Option<Artifact>,
        cache: &mut C,
    ) -> Result<RunReport> {
        let planned = plan(graph, start);

        let trace =
            Executor::new(graph, registry, cache, &self.keys).execute(start, initial)?;

        info!(
            start = %start,
            planned = planned.len(),
            executed = trace.executed_order.len(),
            cache_hits = trace.cache_hits.len(),
            "run complete"
        );

        Ok(RunReport {
            plan: planned,
            executed_order: trace.executed_order,
            cache_hits: trace.cache_hits,
            results: trace.results,
        })
    }
}
