// src/cache.rs

//! Memoization store for task outputs.
//!
//! The engine talks to a [`ResultCache`] instead of a concrete map. This
//! makes it easy to swap in a durable backend later while keeping the
//! in-memory implementation as the default.
//!
//! The cache is caller-owned: it is constructed once, grows monotonically
//! across runs, and the engine never clears it. No eviction or expiry is
//! performed at this scope.

use std::collections::HashMap;

use tracing::debug;

use crate::artifact::Artifact;

/// Trait abstracting how task outputs are stored between runs.
///
/// `get` on an absent key returns `None`, which is distinct from a stored
/// empty artifact. Single-threaded callers only; a shared-cache concurrent
/// extension would need to serialize the check-then-act of `has`/`get`/`set`
/// per key.
pub trait ResultCache {
    fn has(&self, key: &str) -> bool;
    fn get(&self, key: &str) -> Option<Artifact>;
    fn set(&mut self, key: &str, value: Artifact);
}

/// In-memory cache of task outputs, keyed by cache key.
#[derive(Debug, Default)]
pub struct MemoryCache {
    entries: HashMap<String, Artifact>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Number of stored entries (diagnostics only).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl ResultCache for MemoryCache {
    fn has(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    fn get(&self, key: &str) -> Option<Artifact> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: Artifact) {
        debug!(key = %key, "storing task output in cache");
        self.entries.insert(key.to_string(), value);
    }
}
