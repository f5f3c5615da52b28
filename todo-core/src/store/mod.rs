//! Generic key-value persistence underlying the repository.
//!
//! Two interchangeable backends implement [`DataStore`]: [`MemoryStore`]
//! keeps records for the process lifetime only, [`JsonFileStore`] also
//! serializes the whole map to a JSON file after every mutation. The
//! backend is chosen at construction time and injected into the repository.

mod json_file;
mod memory;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

/// Errors from the store load/save paths.
///
/// These never cross the [`DataStore`] boundary: both backends catch and
/// log I/O problems internally, so a failed write leaves the persisted
/// file stale rather than failing the caller.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Key-value contract shared by all store backends.
///
/// Reads hand out owned copies, never references into the store, so
/// callers cannot mutate persisted state behind the store's back.
pub trait DataStore<T>: Send {
    /// Get a single item by id.
    fn get(&self, id: &str) -> Option<T>;

    /// Get all items; iteration order is unspecified.
    fn get_all(&self) -> Vec<T>;

    /// Insert or overwrite an item.
    fn set(&mut self, id: &str, value: T);

    /// Remove an item. Returns true iff an entry existed.
    fn delete(&mut self, id: &str) -> bool;

    /// Whether an entry exists for `id`.
    fn has(&self, id: &str) -> bool;

    /// Current entry count.
    fn count(&self) -> usize;

    /// Remove all entries.
    fn clear(&mut self);
}
