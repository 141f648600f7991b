// src/engine/executor.rs

use std::collections::{HashMap, HashSet};

use tracing::{debug, info};

use crate::artifact::Artifact;
use crate::cache::ResultCache;
use crate::dag::TaskGraph;
use crate::engine::keys::CacheKeyPolicy;
use crate::engine::TaskName;
use crate::errors::{Result, TaskdagError};
use crate::registry::TaskRegistry;

/// One pending visit: a task plus the artifact its parent produced for it.
///
/// `input` is `None` only for the start node.
#[derive(Debug)]
struct Frame {
    task: TaskName,
    input: Option<Artifact>,
}

/// What a finished traversal observed.
#[derive(Debug, Clone, Default)]
pub struct ExecutionTrace {
    /// Last output artifact observed per task name.
    pub results: HashMap<TaskName, Artifact>,
    /// Cache keys that were hits during this run, in hit order.
    pub cache_hits: Vec<String>,
    /// Task names in first-visit order; each name appears exactly once.
    pub executed_order: Vec<TaskName>,
}

/// Depth-first traversal state for a single run.
///
/// The executor exclusively owns the accumulating trace for the duration of
/// one run; graph and registry are borrowed immutably, the cache mutably.
/// The walk uses an explicit stack rather than recursion, so graph depth is
/// not bounded by the call stack.
///
/// Within one run a task may be *visited* more than once (once per distinct
/// parent artifact reaching it), but its registered implementation only runs
/// on cache misses. `results` keeps the last artifact produced per name.
pub struct Executor<'a, C: ResultCache> {
    graph: &'a TaskGraph,
    registry: &'a TaskRegistry,
    cache: &'a mut C,
    keys: &'a CacheKeyPolicy,
    trace: ExecutionTrace,
    seen: HashSet<TaskName>,
}

impl<'a, C: ResultCache> Executor<'a, C> {
    pub fn new(
        graph: &'a TaskGraph,
        registry: &'a TaskRegistry,
        cache: &'a mut C,
        keys: &'a CacheKeyPolicy,
    ) -> Self {
        Self {
            graph,
            registry,
            cache,
            keys,
            trace: ExecutionTrace::default(),
            seen: HashSet::new(),
        }
    }

    /// Walk the graph depth-first from `start`, threading each task's output
    /// to its children.
    ///
    /// `initial` is the artifact fed to the start node; a plain run passes
    /// `None`. Children are visited in declaration order, each child's
    /// entire subtree completing before the next sibling begins.
    ///
    /// Fails with [`TaskdagError::UnregisteredTask`] if a visited task has
    /// neither a cache entry for its key nor a registry entry. Cache entries
    /// committed before the failure remain valid.
    pub fn execute(mut self, start: &str, initial: Option<Artifact>) -> Result<ExecutionTrace> {
        let mut stack = vec![Frame {
            task: start.to_string(),
            input: initial,
        }];

        while let Some(frame) = stack.pop() {
            let output = self.visit(&frame)?;

            // Push children in reverse so the first declared child is the
            // next frame popped.
            for child in self.graph.children_of(&frame.task).iter().rev() {
                stack.push(Frame {
                    task: child.clone(),
                    input: Some(output.clone()),
                });
            }
        }

        Ok(self.trace)
    }

    /// Resolve one visit: consult the cache, invoke the task on a miss, and
    /// record the outcome. Returns the task's output artifact.
    fn visit(&mut self, frame: &Frame) -> Result<Artifact> {
        let key = self.keys.key_for(&frame.task, frame.input.as_ref());

        if self.seen.insert(frame.task.clone()) {
            self.trace.executed_order.push(frame.task.clone());
        }

        let output = match self.cache.get(&key) {
            Some(cached) => {
                info!(key = %key, "cache hit; reusing stored output");
                self.trace.cache_hits.push(key);
                cached
            }
            None => {
                let task = self
                    .registry
                    .get(&frame.task)
                    .ok_or_else(|| TaskdagError::UnregisteredTask(frame.task.clone()))?;

                debug!(task = %frame.task, key = %key, "cache miss; invoking task");
                let produced = task.execute(frame.input.as_ref())?;
                self.cache.set(&key, produced.clone());
                produced
            }
        };

        self.trace
            .results
            .insert(frame.task.clone(), output.clone());

        Ok(output)
    }
}
