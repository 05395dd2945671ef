//! Injected key-value persistence.
//!
//! The core never touches browser storage directly: the host supplies a
//! [`KeyValueStore`] (localStorage-backed in a browser, [`MemoryStore`] in
//! tests and native hosts) and [`AppStorage`] layers the typed accessors on
//! top — the first-visit flag, the running generation counter, and the
//! serialized character roster. Storyboard state and its history are
//! session-only and are never persisted here.

use std::collections::HashMap;

use crate::error::{BoardError, BoardResult};
use crate::roster::CharacterProfile;

/// Storage key for the first-visit flag.
pub const VISITED_KEY: &str = "storyboard-visited";
/// Storage key for the running generation counter.
pub const GENERATIONS_KEY: &str = "storyboard-generations";
/// Storage key for the serialized character roster.
pub const CHARACTERS_KEY: &str = "storyboard-characters";

/// String key-value storage scoped to the browser session/profile.
pub trait KeyValueStore {
    /// Reads the value for `key`, if present.
    fn get(&self, key: &str) -> Option<String>;
    /// Writes `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str);
    /// Removes `key` if present.
    fn delete(&mut self, key: &str);
}

/// In-process [`KeyValueStore`] for tests and native hosts.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }

    fn delete(&mut self, key: &str) {
        self.entries.remove(key);
    }
}

/// Typed accessors over an injected [`KeyValueStore`].
#[derive(Debug, Clone, Default)]
pub struct AppStorage<S> {
    store: S,
}

impl<S: KeyValueStore> AppStorage<S> {
    /// Wraps a store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Consumes the wrapper, returning the underlying store.
    pub fn into_inner(self) -> S {
        self.store
    }

    /// True once [`AppStorage::mark_visited`] has been called.
    pub fn has_visited(&self) -> bool {
        self.store.get(VISITED_KEY).is_some()
    }

    /// Records that the welcome flow has been seen.
    pub fn mark_visited(&mut self) {
        self.store.set(VISITED_KEY, "true");
    }

    /// The number of completed generation runs. Malformed or missing stored
    /// values read as 0.
    pub fn generation_count(&self) -> u32 {
        self.store
            .get(GENERATIONS_KEY)
            .and_then(|v| v.parse().ok())
            .unwrap_or(0)
    }

    /// Increments the generation counter, returning the new count.
    pub fn record_generation(&mut self) -> u32 {
        let next = self.generation_count() + 1;
        self.store.set(GENERATIONS_KEY, &next.to_string());
        next
    }

    /// Loads the character roster; empty if none has been saved.
    pub fn characters(&self) -> BoardResult<Vec<CharacterProfile>> {
        match self.store.get(CHARACTERS_KEY) {
            Some(json) => serde_json::from_str(&json)
                .map_err(|e| BoardError::serialization(e.to_string())),
            None => Ok(Vec::new()),
        }
    }

    /// Saves the character roster.
    pub fn save_characters(&mut self, characters: &[CharacterProfile]) -> BoardResult<()> {
        let json = serde_json::to_string(characters)
            .map_err(|e| BoardError::serialization(e.to_string()))?;
        self.store.set(CHARACTERS_KEY, &json);
        Ok(())
    }
}

// =============================================================================
// TESTS
// =============================================================================
