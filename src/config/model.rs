// src/config/model.rs

use std::collections::BTreeMap;

use serde::Deserialize;

/// Top-level graph definition as read from a TOML file, before validation.
///
/// ```toml
/// [config]
/// cache_key_field = "dataset_path"
///
/// [run]
/// start = "prepare_dataset"
///
/// [task.prepare_dataset]
/// children = ["load_data"]
///
/// [task.load_data]
/// children = ["validate_schema", "clean_missing"]
/// ```
///
/// All sections are optional except that at least one `[task.<name>]` must
/// exist; validation lives in [`crate::config::validate`].
#[derive(Debug, Clone, Deserialize)]
pub struct RawConfigFile {
    /// Engine behaviour from `[config]`.
    #[serde(default)]
    pub config: ConfigSection,

    /// Run defaults from `[run]`.
    #[serde(default)]
    pub run: RunSection,

    /// All tasks from `[task.<name>]`.
    ///
    /// Keys are the task names; each value declares that task's downstream
    /// children.
    #[serde(default)]
    pub task: BTreeMap<String, TaskConfig>,
}

/// Validated graph definition.
///
/// Construct via `ConfigFile::try_from(raw)` (or
/// [`crate::config::loader::load_and_validate`]); the fields mirror
/// [`RawConfigFile`] exactly.
#[derive(Debug, Clone)]
pub struct ConfigFile {
    pub config: ConfigSection,
    pub run: RunSection,
    pub task: BTreeMap<String, TaskConfig>,
}

impl ConfigFile {
    /// Construct without validation. Only `validate` should call this.
    pub(crate) fn new_unchecked(
        config: ConfigSection,
        run: RunSection,
        task: BTreeMap<String, TaskConfig>,
    ) -> Self {
        Self { config, run, task }
    }
}

/// `[config]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct ConfigSection {
    /// Artifact field inspected when deriving cache keys.
    #[serde(default = "default_cache_key_field")]
    pub cache_key_field: String,
}

fn default_cache_key_field() -> String {
    "dataset_path".to_string()
}

impl Default for ConfigSection {
    fn default() -> Self {
        Self {
            cache_key_field: default_cache_key_field(),
        }
    }
}

/// `[run]` section.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct RunSection {
    /// Default start task for a run. `--start` on the CLI overrides this.
    #[serde(default)]
    pub start: Option<String>,
}

/// One `[task.<name>]` section.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct TaskConfig {
    /// Downstream children, in the order they should be visited.
    ///
    /// Names without their own `[task.<name>]` section are allowed and are
    /// treated as leaves.
    #[serde(default)]
    pub children: Vec<String>,
}
