use super::DataStore;
use std::collections::HashMap;

/// In-memory store backend. Records live exactly as long as the process.
#[derive(Debug, Default)]
pub struct MemoryStore<T> {
    entries: HashMap<String, T>,
}

impl<T> MemoryStore<T> {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }
}

impl<T: Clone + Send> DataStore<T> for MemoryStore<T> {
    fn get(&self, id: &str) -> Option<T> {
        self.entries.get(id).cloned()
    }

    fn get_all(&self) -> Vec<T> {
        self.entries.values().cloned().collect()
    }

    fn set(&mut self, id: &str, value: T) {
        self.entries.insert(id.to_string(), value);
    }

    fn delete(&mut self, id: &str) -> bool {
        self.entries.remove(id).is_some()
    }

    fn has(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    fn count(&self) -> usize {
        self.entries.len()
    }

    fn clear(&mut self) {
        self.entries.clear();
    }
}
