// src/engine/keys.rs

//! Cache key derivation.
//!
//! A cache key identifies a `(task, relevant-input)` pair for memoization.
//! The engine inspects exactly one field of the input artifact for this; by
//! default `dataset_path`, overridable per run via configuration. Everything
//! else about the artifact is opaque to the engine.

use serde_json::Value;

use crate::artifact::Artifact;

/// Key segment used when no input artifact exists, or the selected field is
/// missing, null, or an empty string.
pub const ABSENT_SEGMENT: &str = "none";

/// Policy deriving cache keys of the shape `"{task}:{field-value-or-none}"`.
///
/// Two invocations of the same task whose inputs agree on the selected field
/// (including both lacking it) collide in the cache; that collision is the
/// memoization mechanism.
#[derive(Debug, Clone)]
pub struct CacheKeyPolicy {
    field: String,
}

impl CacheKeyPolicy {
    /// Policy inspecting the given artifact field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Name of the inspected artifact field.
    pub fn field(&self) -> &str {
        &self.field
    }

    /// Derive the cache key for one task invocation.
    pub fn key_for(&self, task: &str, input: Option<&Artifact>) -> String {
        let segment = input
            .and_then(|artifact| artifact.get(&self.field))
            .and_then(format_segment)
            .unwrap_or_else(|| ABSENT_SEGMENT.to_string());

        format!("{task}:{segment}")
    }
}

impl Default for CacheKeyPolicy {
    fn default() -> Self {
        Self::new("dataset_path")
    }
}

/// Render a field value as a key segment.
///
/// Strings are used verbatim (empty strings count as absent); null counts as
/// absent; other values use their compact JSON form.
fn format_segment(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}
