#![allow(dead_code)]

use std::collections::BTreeMap;

use taskdag::config::{ConfigFile, ConfigSection, RawConfigFile, RunSection, TaskConfig};
use taskdag::dag::TaskGraph;

/// Builder for `ConfigFile` to simplify test setup.
pub struct ConfigFileBuilder {
    config: RawConfigFile,
}

impl ConfigFileBuilder {
    pub fn new() -> Self {
        Self {
            config: RawConfigFile {
                config: ConfigSection::default(),
                run: RunSection::default(),
                task: BTreeMap::new(),
            },
        }
    }

    pub fn with_task(mut self, name: &str, task: TaskConfig) -> Self {
        self.config.task.insert(name.to_string(), task);
        self
    }

    pub fn with_start(mut self, name: &str) -> Self {
        self.config.run.start = Some(name.to_string());
        self
    }

    pub fn with_cache_key_field(mut self, field: &str) -> Self {
        self.config.config.cache_key_field = field.to_string();
        self
    }

    pub fn build(self) -> ConfigFile {
        ConfigFile::try_from(self.config).expect("Failed to build valid config from builder")
    }
}

impl Default for ConfigFileBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for `TaskConfig`.
pub struct TaskConfigBuilder {
    task: TaskConfig,
}

impl TaskConfigBuilder {
    pub fn new() -> Self {
        Self {
            task: TaskConfig { children: vec![] },
        }
    }

    pub fn child(mut self, name: &str) -> Self {
        self.task.children.push(name.to_string());
        self
    }

    pub fn build(self) -> TaskConfig {
        self.task
    }
}

impl Default for TaskConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for a `TaskGraph` directly, bypassing the config layer.
///
/// Handy for engine tests that don't care about TOML or validation.
pub struct GraphBuilder {
    graph: TaskGraph,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self {
            graph: TaskGraph::new(),
        }
    }

    pub fn task(mut self, name: &str, children: &[&str]) -> Self {
        self.graph
            .insert(name, children.iter().map(|c| c.to_string()).collect());
        self
    }

    pub fn build(self) -> TaskGraph {
        self.graph
    }
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}
