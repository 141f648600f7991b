// src/registry.rs

//! Pluggable task implementations.
//!
//! The engine never knows what a task *does*; it only needs a registry
//! mapping task name to something that can turn an input artifact into an
//! output artifact. Production code registers real task implementations;
//! tests register counting or failing doubles.

use std::collections::HashMap;
use std::fmt;

use crate::artifact::Artifact;
use crate::errors::Result;

/// Trait abstracting a single task implementation.
///
/// `input` is `None` only for the start node of a run, before any task has
/// produced an artifact. Implementations must be deterministic with respect
/// to the cache key field of their input, or caching will mask legitimate
/// recomputation.
pub trait Task: Send + Sync {
    fn execute(&self, input: Option<&Artifact>) -> Result<Artifact>;
}

impl<F> Task for F
where
    F: Fn(Option<&Artifact>) -> Result<Artifact> + Send + Sync,
{
    fn execute(&self, input: Option<&Artifact>) -> Result<Artifact> {
        self(input)
    }
}

/// Name → task lookup used by the executor.
///
/// Names referenced by the graph but absent here are a hard configuration
/// error at execution time (unless the cache already holds their output).
#[derive(Default)]
pub struct TaskRegistry {
    tasks: HashMap<String, Box<dyn Task>>,
}

impl TaskRegistry {
    pub fn new() -> Self {
        Self {
            tasks: HashMap::new(),
        }
    }

    /// Register a task under a name, replacing any previous registration.
    pub fn register(&mut self, name: impl Into<String>, task: impl Task + 'static) {
        self.tasks.insert(name.into(), Box::new(task));
    }

    pub fn get(&self, name: &str) -> Option<&dyn Task> {
        self.tasks.get(name).map(|t| t.as_ref())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.tasks.contains_key(name)
    }
}

impl fmt::Debug for TaskRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<_> = self.tasks.keys().collect();
        names.sort();
        f.debug_struct("TaskRegistry").field("tasks", &names).finish()
    }
}
