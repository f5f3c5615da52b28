use super::{DataStore, StoreError};
use serde::{de::DeserializeOwned, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// File-backed store: an in-memory map serialized to a JSON file after
/// every mutating call.
///
/// On-disk layout is a pretty-printed array of `[id, value]` pairs. On
/// construction the file is loaded if present; a missing file means an
/// empty store, and an unreadable or unparsable file is logged and
/// likewise treated as empty. Save failures are logged and swallowed, so
/// persisted state may trail in-memory state after an I/O error.
pub struct JsonFileStore<T> {
    entries: HashMap<String, T>,
    path: PathBuf,
}

impl<T: Serialize + DeserializeOwned> JsonFileStore<T> {
    /// Open the store at `path`, creating the parent directory if needed.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        if let Some(dir) = path.parent() {
            if let Err(e) = fs::create_dir_all(dir) {
                tracing::error!(dir = %dir.display(), error = %e, "failed to create data directory");
            }
        }
        let entries = match Self::load(&path) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!(file = %path.display(), error = %e, "could not load store file, starting empty");
                HashMap::new()
            }
        };
        Self { entries, path }
    }

    fn load(path: &Path) -> Result<HashMap<String, T>, StoreError> {
        if !path.exists() {
            return Ok(HashMap::new());
        }
        let contents = fs::read_to_string(path)?;
        let pairs: Vec<(String, T)> = serde_json::from_str(&contents)?;
        Ok(pairs.into_iter().collect())
    }

    fn save(&self) {
        let pairs: Vec<(&String, &T)> = self.entries.iter().collect();
        let result = serde_json::to_string_pretty(&pairs)
            .map_err(StoreError::from)
            .and_then(|json| fs::write(&self.path, json).map_err(StoreError::from));
        if let Err(e) = result {
            tracing::error!(file = %self.path.display(), error = %e, "failed to persist store file");
        }
    }
}

impl<T: Clone + Serialize + DeserializeOwned + Send> DataStore<T> for JsonFileStore<T> {
    fn get(&self, id: &str) -> Option<T> {
        self.entries.get(id).cloned()
    }

    fn get_all(&self) -> Vec<T> {
        self.entries.values().cloned().collect()
    }

    fn set(&mut self, id: &str, value: T) {
        self.entries.insert(id.to_string(), value);
        self.save();
    }

    fn delete(&mut self, id: &str) -> bool {
        let removed = self.entries.remove(id).is_some();
        if removed {
            self.save();
        }
        removed
    }

    fn has(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    fn count(&self) -> usize {
        self.entries.len()
    }

    fn clear(&mut self) {
        self.entries.clear();
        self.save();
    }
}
