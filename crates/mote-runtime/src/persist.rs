//! Persistent Data Store — key-value storage that survives sessions.
//!
//! Stores data as `toml::Value` and round-trips through a TOML file. The one
//! production key is the runner's high score, which only ever increases.

use std::collections::HashMap;
use std::path::Path;

/// A key-value store that persists across application runs.
pub struct PersistentStore {
    data: HashMap<String, toml::Value>,
}

/// Fixed key under which the runner's high score is stored
pub const HIGH_SCORE_KEY: &str = "runner_high_score";

impl PersistentStore {
    pub fn new() -> Self {
        Self {
            data: HashMap::new(),
        }
    }

    /// Set a value by key. Overwrites any existing value.
    pub fn set(&mut self, key: &str, value: toml::Value) {
        self.data.insert(key.to_string(), value);
    }

    /// Get a value by key.
    pub fn get(&self, key: &str) -> Option<&toml::Value> {
        self.data.get(key)
    }

    /// Get an integer value, or `default` if the key is missing or not an integer.
    pub fn get_integer(&self, key: &str, default: i64) -> i64 {
        self.data
            .get(key)
            .and_then(|v| v.as_integer())
            .unwrap_or(default)
    }

    /// Raise an integer key to `value` if it beats the stored one.
    /// Returns true when the stored value changed — the key never decreases.
    pub fn raise_to(&mut self, key: &str, value: i64) -> bool {
        let current = self.get_integer(key, 0);
        if value > current {
            self.data.insert(key.to_string(), toml::Value::Integer(value));
            true
        } else {
            false
        }
    }

    /// Check if a key exists.
    pub fn has(&self, key: &str) -> bool {
        self.data.contains_key(key)
    }

    /// Remove a key, returning the old value if it existed.
    pub fn remove(&mut self, key: &str) -> Option<toml::Value> {
        self.data.remove(key)
    }

    /// Save the store to a TOML file.
    pub fn save_to_file(&self, path: &Path) -> Result<(), String> {
        let mut table = toml::map::Map::new();
        for (k, v) in &self.data {
            table.insert(k.clone(), v.clone());
        }
        let content =
            toml::to_string_pretty(&table).map_err(|e| format!("serialize error: {e}"))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| format!("mkdir error: {e}"))?;
        }
        std::fs::write(path, content).map_err(|e| format!("write error: {e}"))
    }

    /// Load the store from a TOML file, replacing all current data.
    /// A missing file is not an error — the store just starts empty.
    pub fn load_from_file(&mut self, path: &Path) -> Result<(), String> {
        if !path.exists() {
            self.data.clear();
            return Ok(());
        }
        let content = std::fs::read_to_string(path).map_err(|e| format!("read error: {e}"))?;
        let table: toml::map::Map<String, toml::Value> =
            toml::from_str(&content).map_err(|e| format!("parse error: {e}"))?;
        self.data.clear();
        for (k, v) in table {
            self.data.insert(k, v);
        }
        Ok(())
    }
}

impl Default for PersistentStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_and_get() {
        let mut store = PersistentStore::new();
        store.set("score", toml::Value::Integer(42));
        assert_eq!(store.get("score"), Some(&toml::Value::Integer(42)));
    }

    #[test]
    fn get_integer_default() {
        let store = PersistentStore::new();
        assert_eq!(store.get_integer(HIGH_SCORE_KEY, 0), 0);
    }

    #[test]
    fn raise_to_never_decreases() {
        let mut store = PersistentStore::new();
        assert!(store.raise_to(HIGH_SCORE_KEY, 100));
        assert!(!store.raise_to(HIGH_SCORE_KEY, 50));
        assert!(!store.raise_to(HIGH_SCORE_KEY, 100));
        assert_eq!(store.get_integer(HIGH_SCORE_KEY, 0), 100);

        assert!(store.raise_to(HIGH_SCORE_KEY, 150));
        assert_eq!(store.get_integer(HIGH_SCORE_KEY, 0), 150);
    }

    #[test]
    fn has_and_remove() {
        let mut store = PersistentStore::new();
        store.set("name", toml::Value::String("runner".into()));
        assert!(store.has("name"));
        assert!(!store.has("missing"));

        let removed = store.remove("name");
        assert_eq!(removed, Some(toml::Value::String("runner".into())));
        assert!(!store.has("name"));
    }

    #[test]
    fn load_missing_file_is_empty() {
        let mut store = PersistentStore::new();
        store.set("stale", toml::Value::Integer(1));
        store
            .load_from_file(Path::new("/nonexistent/mote-scores.toml"))
            .unwrap();
        assert!(!store.has("stale"));
    }

    #[test]
    fn save_and_load_roundtrip() {
        let mut store = PersistentStore::new();
        store.raise_to(HIGH_SCORE_KEY, 230);

        let path = std::env::temp_dir().join("mote-persist-test.toml");
        store.save_to_file(&path).unwrap();

        let mut loaded = PersistentStore::new();
        loaded.load_from_file(&path).unwrap();
        assert_eq!(loaded.get_integer(HIGH_SCORE_KEY, 0), 230);

        let _ = std::fs::remove_file(&path);
    }
}
