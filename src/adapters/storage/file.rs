//! File-backed key-value storage.
//!
//! Persists the whole map as one JSON object. Write failures are logged
//! and dropped so callers keep local-storage semantics: a failed persist
//! never fails the operation that triggered it.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Mutex;

use crate::ports::KeyValueStorage;

/// Storage persisting values to a single JSON file.
pub struct FileKeyValueStorage {
    path: PathBuf,
    // Guards read-modify-write cycles on the backing file.
    lock: Mutex<()>,
}

impl FileKeyValueStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    fn read_map(&self) -> HashMap<String, String> {
        match std::fs::read_to_string(&self.path) {
            Ok(raw) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                tracing::warn!(path = %self.path.display(), error = %e, "corrupt storage file, starting fresh");
                HashMap::new()
            }),
            Err(_) => HashMap::new(),
        }
    }

    fn write_map(&self, map: &HashMap<String, String>) {
        let serialized = match serde_json::to_string_pretty(map) {
            Ok(s) => s,
            Err(e) => {
                tracing::warn!(error = %e, "failed to serialize storage map");
                return;
            }
        };
        if let Err(e) = std::fs::write(&self.path, serialized) {
            tracing::warn!(path = %self.path.display(), error = %e, "failed to persist storage file");
        }
    }
}

impl KeyValueStorage for FileKeyValueStorage {
    fn get(&self, key: &str) -> Option<String> {
        let _guard = self.lock.lock().unwrap();
        self.read_map().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        let _guard = self.lock.lock().unwrap();
        let mut map = self.read_map();
        map.insert(key.to_string(), value.to_string());
        self.write_map(&map);
    }
}
