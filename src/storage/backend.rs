//! Key-value storage abstraction.
//!
//! This module defines the [`KeyValueStore`] trait, the durable string-keyed
//! store the plugin persists its preferences into. It mirrors the shape of a
//! browser's local storage: string keys, string values, whole-value writes.

use crate::domain::error::Result;
use std::collections::BTreeMap;

/// Durable string key-value store.
///
/// Implementations report failures through [`Result`]; callers decide whether
/// a failure matters. The [`Persistence`](super::Persistence) adapter treats
/// every failure as "absent" on read and logs it on write.
///
/// # Implementations
///
/// - [`JsonFileStore`](super::JsonFileStore): JSON file with atomic writes
/// - [`MemoryStore`]: in-process map, used when no data directory is available
pub trait KeyValueStore: Send {
    /// Returns the value stored under `key`, or `None` if absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the write cannot be made durable.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

impl KeyValueStore for Box<dyn KeyValueStore> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }
}

/// Volatile store backed by a map.
///
/// Values live only as long as the store. Used as a fallback when the plugin
/// data directory is unavailable, and in tests.
///
/// # Examples
///
/// ```
/// use bookfinder::storage::{KeyValueStore, MemoryStore};
///
/// let mut store = MemoryStore::default();
/// store.set("darkMode", "true")?;
/// assert_eq!(store.get("darkMode")?.as_deref(), Some("true"));
/// # Ok::<(), bookfinder::BookfinderError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
