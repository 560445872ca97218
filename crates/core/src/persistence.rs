//! # Persistence Bridge
//!
//! The board keeps its whole location list under a single key of a local
//! key-value store. [`KeyValueStore`] is the port adapters implement;
//! [`PersistenceBridge`] turns a location list into the stored text and back.

use std::collections::HashMap;

use serde_json::Value;

use crate::{
    errors::{BoardError, BoardResult},
    models::location::Location,
};

/// Key the serialized location list is stored under.
pub const RESERVATIONS_KEY: &str = "reservations";

/// A local, synchronous, string-to-string key-value store.
pub trait KeyValueStore {
    /// Returns the value stored under `key`, or `None` if the key is absent.
    fn get(&self, key: &str) -> BoardResult<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> BoardResult<()>;

    /// Removes `key`. Removing an absent key is not an error.
    fn remove(&mut self, key: &str) -> BoardResult<()>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Box<T> {
    fn get(&self, key: &str) -> BoardResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> BoardResult<()> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> BoardResult<()> {
        (**self).remove(key)
    }
}

/// Process-local store; nothing survives a restart.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store that already holds `value` under `key`.
    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut store = Self::new();
        store.entries.insert(key.to_string(), value.to_string());
        store
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> BoardResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> BoardResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> BoardResult<()> {
        self.entries.remove(key);
        Ok(())
    }
}

/// Reads and writes the location list under [`RESERVATIONS_KEY`].
#[derive(Debug)]
pub struct PersistenceBridge<S> {
    storage: S,
}

impl<S: KeyValueStore> PersistenceBridge<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Loads the persisted list.
    ///
    /// Returns `Ok(None)` when nothing has been saved yet and
    /// [`BoardError::Malformed`] when the stored text is not a JSON array of
    /// locations. Storage failures are passed through unchanged.
    pub fn load(&self) -> BoardResult<Option<Vec<Location>>> {
        let Some(text) = self.storage.get(RESERVATIONS_KEY)? else {
            return Ok(None);
        };

        let value: Value =
            serde_json::from_str(&text).map_err(|e| BoardError::Malformed(e.to_string()))?;
        if !value.is_array() {
            return Err(BoardError::Malformed(format!(
                "expected an array of locations, found {}",
                json_kind(&value)
            )));
        }

        let locations =
            serde_json::from_value(value).map_err(|e| BoardError::Malformed(e.to_string()))?;
        Ok(Some(locations))
    }

    /// Overwrites the persisted list with `locations`.
    pub fn save(&mut self, locations: &[Location]) -> BoardResult<()> {
        let text = serde_json::to_string(locations)?;
        self.storage.set(RESERVATIONS_KEY, &text)
    }

    /// Forgets the persisted list.
    pub fn clear(&mut self) -> BoardResult<()> {
        self.storage.remove(RESERVATIONS_KEY)
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn into_storage(self) -> S {
        self.storage
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
