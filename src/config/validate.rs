// src/config/validate.rs

use petgraph::algo::toposort;
use petgraph::graphmap::DiGraphMap;

use crate::config::model::{ConfigFile, RawConfigFile};
use crate::errors::{Result, TaskdagError};

impl TryFrom<RawConfigFile> for ConfigFile {
    type Error = TaskdagError;

    fn try_from(raw: RawConfigFile) -> std::result::Result<Self, Self::Error> {
        validate_raw_config(&raw)?;
        Ok(ConfigFile::new_unchecked(raw.config, raw.run, raw.task))
    }
}

fn validate_raw_config(cfg: &RawConfigFile) -> Result<()> {
    ensure_has_tasks(cfg)?;
    validate_global_config(cfg)?;
    validate_task_children(cfg)?;
    validate_acyclic(cfg)?;
    Ok(())
}

fn ensure_has_tasks(cfg: &RawConfigFile) -> Result<()> {
    if cfg.task.is_empty() {
        return Err(TaskdagError::ConfigError(
            "config must contain at least one [task.<name>] section".to_string(),
        ));
    }
    Ok(())
}

fn validate_global_config(cfg: &RawConfigFile) -> Result<()> {
    if cfg.config.cache_key_field.trim().is_empty() {
        return Err(TaskdagError::ConfigError(
            "[config].cache_key_field must not be empty".to_string(),
        ));
    }
    Ok(())
}

fn validate_task_children(cfg: &RawConfigFile) -> Result<()> {
    // Children without their own [task.<name>] section are fine: the engine
    // treats them as leaves. Self-references are not.
    for (name, task) in cfg.task.iter() {
        for child in task.children.iter() {
            if child == name {
                return Err(TaskdagError::ConfigError(format!(
                    "task '{}' cannot list itself in `children`",
                    name
                )));
            }
        }
    }
    Ok(())
}

fn validate_acyclic(cfg: &RawConfigFile) -> Result<()> {
    // Build a petgraph graph over the declared tasks and their children.
    //
    // Edge direction: task -> child. Leaf-only names (children without their
    // own section) become nodes too; they have no outgoing edges and cannot
    // participate in a cycle.
    let mut graph: DiGraphMap<&str, ()> = DiGraphMap::new();

    for name in cfg.task.keys() {
        graph.add_node(name.as_str());
    }

    for (name, task) in cfg.task.iter() {
        for child in task.children.iter() {
            graph.add_edge(name.as_str(), child.as_str(), ());
        }
    }

    // A topological sort will fail if there is a cycle. This is the only
    // cycle detection in the crate: graphs built programmatically bypass it
    // and the caller guarantees acyclicity.
    match toposort(&graph, None) {
        Ok(_order) => Ok(()),
        Err(cycle) => {
            let node = cycle.node_id();
            Err(TaskdagError::GraphCycle(format!(
                "cycle detected in task graph involving task '{}'",
                node
            )))
        }
    }
}
