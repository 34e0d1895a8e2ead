//! File-backed storage adapter
//!
//! Persists the whole key-value store as a single JSON object file:
//!
//! ```json
//! { "users": "[{\"username\":\"alice\",\"password\":\"...\"}]" }
//! ```
//!
//! Values are opaque strings to the store; callers own their encoding.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::domain::result::{Error, Result};
use crate::ports::StorageService;

/// JSON-file key-value store.
///
/// Writes are full-file overwrites and are not atomic against another
/// process using the same file; single-process usage is assumed.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Create a store backed by the given file. The file is created
    /// lazily on first write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_map(&self) -> Result<BTreeMap<String, String>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let content = std::fs::read_to_string(&self.path)
            .map_err(|e| Error::storage(format!("failed to read {}: {e}", self.path.display())))?;
        serde_json::from_str(&content)
            .map_err(|e| Error::storage(format!("malformed store file {}: {e}", self.path.display())))
    }

    fn write_map(&self, map: &BTreeMap<String, String>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(map)?;
        std::fs::write(&self.path, content)
            .map_err(|e| Error::storage(format!("failed to write {}: {e}", self.path.display())))
    }
}

impl StorageService for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.read_map()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        // Tolerate a corrupt store on write: the overwrite recovers it.
        let mut map = self.read_map().unwrap_or_default();
        map.insert(key.to_string(), value.to_string());
        self.write_map(&map)
    }
}
