use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use anyhow::anyhow;
use taskdag::artifact::Artifact;
use taskdag::errors::Result;
use taskdag::registry::{Task, TaskRegistry};

/// A task double that:
/// - counts how often it was actually invoked (cache hits don't count)
/// - returns its input with a fixed set of fields overlaid.
///
/// Grab the counter handle with [`CountingTask::counter`] *before*
/// registering, since the registry takes ownership.
pub struct CountingTask {
    calls: Arc<AtomicUsize>,
    output: Artifact,
}

impl CountingTask {
    pub fn new(output: Artifact) -> Self {
        Self {
            calls: Arc::new(AtomicUsize::new(0)),
            output,
        }
    }

    /// Shared invocation counter.
    pub fn counter(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.calls)
    }
}

impl Task for CountingTask {
    fn execute(&self, input: Option<&Artifact>) -> Result<Artifact> {
        let calls = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        tracing::debug!(calls, "counting task invoked");
        let base = input.cloned().unwrap_or_default();
        Ok(base.extended_with(self.output.clone()))
    }
}

/// A task double that always fails with the given message.
pub struct FailingTask {
    message: String,
}

impl FailingTask {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

impl Task for FailingTask {
    fn execute(&self, _input: Option<&Artifact>) -> Result<Artifact> {
        Err(anyhow!("{}", self.message).into())
    }
}

/// Build a registry of counting passthrough tasks for the given names.
///
/// Returns the registry plus one counter handle per name, so tests can
/// assert exactly how often each task function was invoked.
pub fn counting_registry(names: &[&str]) -> (TaskRegistry, HashMap<String, Arc<AtomicUsize>>) {
    let mut registry = TaskRegistry::new();
    let mut counters = HashMap::new();

    for name in names {
        let task = CountingTask::new(Artifact::new().with(format!("ran_{name}"), true));
        counters.insert(name.to_string(), task.counter());
        registry.register(*name, task);
    }

    (registry, counters)
}

/// Total invocations across a set of counters.
pub fn total_calls(counters: &HashMap<String, Arc<AtomicUsize>>) -> usize {
    counters.values().map(|c| c.load(Ordering::SeqCst)).sum()
}
