//! File-backed key-value store
//!
//! All keys live in one JSON object at `<data_dir>/local_storage.json`.
//! Every call re-reads the document, so separate processes sharing a data
//! directory see each other's writes. Writes go to a temporary file that is
//! renamed over the document.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use super::{KeyValueStore, StorageError, StorageResult};

const DOCUMENT_NAME: &str = "local_storage.json";

/// Key-value store persisted as a single JSON document
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileStore {
    /// Open (creating the directory if needed) the store under `data_dir`
    pub fn open(data_dir: impl AsRef<Path>) -> StorageResult<Self> {
        let data_dir = data_dir.as_ref();
        std::fs::create_dir_all(data_dir)?;

        let store = Self {
            path: data_dir.join(DOCUMENT_NAME),
            lock: Mutex::new(()),
        };

        // Fail early on a document we could never read back
        store.load()?;

        tracing::debug!(path = ?store.path, "Opened key-value store");
        Ok(store)
    }

    /// Path of the backing document
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> StorageResult<BTreeMap<String, String>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }

        let content = std::fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }

        serde_json::from_str(&content).map_err(|e| StorageError::Corruption {
            path: self.path.clone(),
            reason: e.to_string(),
        })
    }

    fn persist(&self, items: &BTreeMap<String, String>) -> StorageResult<()> {
        let content = serde_json::to_string_pretty(items)?;
        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, content)?;
        std::fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    fn guard(&self) -> StorageResult<std::sync::MutexGuard<'_, ()>> {
        self.lock
            .lock()
            .map_err(|e| StorageError::Lock(e.to_string()))
    }
}

impl KeyValueStore for FileStore {
    fn get_item(&self, key: &str) -> StorageResult<Option<String>> {
        let _guard = self.guard()?;
        Ok(self.load()?.remove(key))
    }

    fn set_item(&self, key: &str, value: &str) -> StorageResult<()> {
        let _guard = self.guard()?;
        let mut items = self.load()?;
        items.insert(key.to_string(), value.to_string());
        self.persist(&items)
    }

    fn remove_item(&self, key: &str) -> StorageResult<()> {
        let _guard = self.guard()?;
        let mut items = self.load()?;
        if items.remove(key).is_some() {
            self.persist(&items)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_open_creates_directory() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        let store = FileStore::open(&nested).unwrap();
        assert!(nested.exists());
        assert_eq!(store.get_item("anything").unwrap(), None);
    }

    #[test]
    fn test_persistence() {
        let dir = tempdir().unwrap();

        {
            let store = FileStore::open(dir.path()).unwrap();
            store.set_item("restaurant_products", "[]").unwrap();
            store.set_item("other", "x").unwrap();
            store.remove_item("other").unwrap();
        }

        let reopened = FileStore::open(dir.path()).unwrap();
        assert_eq!(
            reopened.get_item("restaurant_products").unwrap().as_deref(),
            Some("[]")
        );
        assert_eq!(reopened.get_item("other").unwrap(), None);
    }

    #[test]
    fn test_shared_directory_sees_writes() {
        let dir = tempdir().unwrap();
        let a = FileStore::open(dir.path()).unwrap();
        let b = FileStore::open(dir.path()).unwrap();

        a.set_item("k", "from-a").unwrap();
        assert_eq!(b.get_item("k").unwrap().as_deref(), Some("from-a"));
    }

    #[test]
    fn test_corrupt_document_rejected() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join(DOCUMENT_NAME), "not json").unwrap();

        let result = FileStore::open(dir.path());
        assert!(matches!(result, Err(StorageError::Corruption { .. })));
    }

    #[test]
    fn test_empty_document_is_empty_store() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join(DOCUMENT_NAME), "").unwrap();

        let store = FileStore::open(dir.path()).unwrap();
        assert_eq!(store.get_item("k").unwrap(), None);
    }
}
