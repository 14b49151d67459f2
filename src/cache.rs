// src/cache.rs

use std::collections::HashMap;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// In-memory cache keyed by query identity.
///
/// Plays the role of the console's query cache: list views read through
/// it, and successful writes call `invalidate_prefix` so stale listings
/// are refetched on next access. It is plain data owned by whoever needs
/// it, never a global singleton.
///
/// Values are stored as `serde_json::Value` so one cache can hold every
/// resource type; `get` deserializes back into the requested model.
#[derive(Debug, Default)]
pub struct QueryCache {
    entries: HashMap<String, Value>,
}

impl QueryCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let value = self.entries.get(key)?;
        serde_json::from_value(value.clone()).ok()
    }

    pub fn insert<T: Serialize>(&mut self, key: &str, value: &T) {
        match serde_json::to_value(value) {
            Ok(v) => {
                self.entries.insert(key.to_string(), v);
            }
            Err(e) => {
                // Unserializable value: log and skip the entry.
                tracing::error!("Failed to cache entry {}: {}", key, e);
            }
        }
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn invalidate(&mut self, key: &str) {
        self.entries.remove(key);
    }

    /// Drops every entry whose key starts with `prefix`.
    /// Mirrors invalidating a whole query family (e.g. all cached
    /// attempt listings for one activity) after a write.
    pub fn invalidate_prefix(&mut self, prefix: &str) {
        self.entries.retain(|key, _| !key.starts_with(prefix));
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
