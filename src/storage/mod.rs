//! Key-Value Storage
//!
//! A string-keyed, string-valued store with the same shape as the browser's
//! `localStorage`. The mock product store persists through it.
//!
//! - **memory**: process-local map, used by tests and throwaway sessions
//! - **file**: a single JSON document on disk, used by the native binaries
//! - **error**: Error types
//!
//! # Example
//!
//! ```rust,no_run
//! use foodapp::storage::{FileStore, KeyValueStore};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = FileStore::open("./foodapp_data")?;
//!     store.set_item("greeting", "olá")?;
//!     assert_eq!(store.get_item("greeting")?.as_deref(), Some("olá"));
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod file;
pub mod memory;

pub use error::{StorageError, StorageResult};
pub use file::FileStore;
pub use memory::MemoryStore;

use std::sync::Arc;

/// Synchronous key-value store.
///
/// Individual calls are atomic; read-modify-write sequences built on top of
/// them are not.
pub trait KeyValueStore: Send + Sync {
    /// Value stored under `key`, if any
    fn get_item(&self, key: &str) -> StorageResult<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    fn set_item(&self, key: &str, value: &str) -> StorageResult<()>;

    /// Remove `key`; removing a missing key is not an error
    fn remove_item(&self, key: &str) -> StorageResult<()>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Arc<T> {
    fn get_item(&self, key: &str) -> StorageResult<Option<String>> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> StorageResult<()> {
        (**self).set_item(key, value)
    }

    fn remove_item(&self, key: &str) -> StorageResult<()> {
        (**self).remove_item(key)
    }
}
