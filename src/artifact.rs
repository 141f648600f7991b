// src/artifact.rs

//! The opaque payload passed between tasks.
//!
//! An [`Artifact`] is a mapping of named values produced by one task and
//! consumed by its declared children. The engine never interprets the
//! contents except for the single field selected by the cache key policy;
//! individual tasks read and extend fields by convention.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Mapping-valued task payload.
///
/// Field order is stable (sorted by name) so that logs and serialized
/// reports are deterministic.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Artifact {
    fields: BTreeMap<String, Value>,
}

impl Artifact {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a field by name.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// Look up a field and view it as a string, if it is one.
    pub fn get_str(&self, field: &str) -> Option<&str> {
        self.fields.get(field).and_then(Value::as_str)
    }

    /// Set a field, replacing any previous value.
    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<Value>) {
        self.fields.insert(field.into(), value.into());
    }

    /// Builder-style variant of [`insert`](Self::insert).
    pub fn with(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(field, value);
        self
    }

    /// Start from this artifact's fields and overlay `updates` on top.
    ///
    /// This is the shape most tasks want: carry the input forward and add or
    /// replace a few fields of their own.
    pub fn extended_with(&self, updates: Artifact) -> Artifact {
        let mut out = self.clone();
        for (field, value) in updates.fields {
            out.fields.insert(field, value);
        }
        out
    }

}

impl std::fmt::Display for Artifact {
    /// Render as compact JSON (field order is already stable).
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match serde_json::to_string(&self.fields) {
            Ok(json) => f.write_str(&json),
            Err(_) => write!(f, "{:?}", self.fields),
        }
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Artifact {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
