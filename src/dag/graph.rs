// src/dag/graph.rs

use std::collections::HashMap;

use crate::config::model::ConfigFile;

/// Simple in-memory task graph keyed by task name.
///
/// Each node stores the ordered list of its declared children (downstream
/// dependents). Child order matters: both the planner and the executor visit
/// children in declaration order.
///
/// A name referenced as a child without its own entry is a leaf: it can be
/// visited but contributes no further expansion. The graph is never mutated
/// during a run.
#[derive(Debug, Clone, Default)]
pub struct TaskGraph {
    nodes: HashMap<String, Vec<String>>,
}

impl TaskGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from a validated [`ConfigFile`].
    ///
    /// Assumes validation already rejected self-references and cycles.
    pub fn from_config(cfg: &ConfigFile) -> Self {
        let mut graph = Self::new();
        for (name, task) in cfg.task.iter() {
            graph.insert(name.clone(), task.children.clone());
        }
        graph
    }

    /// Add a task with its ordered child list, replacing any previous entry.
    pub fn insert(&mut self, name: impl Into<String>, children: Vec<String>) {
        self.nodes.insert(name.into(), children);
    }

    /// All task names that have an entry of their own.
    pub fn tasks(&self) -> impl Iterator<Item = &str> {
        self.nodes.keys().map(|s| s.as_str())
    }

    /// Declared children of a task, in declaration order.
    ///
    /// Unknown names yield an empty slice (leaf behaviour).
    pub fn children_of(&self, name: &str) -> &[String] {
        self.nodes.get(name).map(|c| c.as_slice()).unwrap_or(&[])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.nodes.contains_key(name)
    }
}
