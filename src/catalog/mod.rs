//! Product Catalog
//!
//! The product CRUD contract and its two interchangeable implementations.
//!
//! ## Architecture
//!
//! - **ProductStore**: the contract views and the CLI program against
//! - **HttpProductStore**: talks to the product REST API
//! - **LocalProductStore**: mock shim over a key-value store, seeded with two
//!   example products on first use
//!
//! Which one runs is decided once from configuration (see [`open_store`]);
//! there is no runtime fallback from one to the other.
//!
//! ## Example
//!
//! ```rust,no_run
//! use foodapp::catalog::{LocalProductStore, MockLatency, ProductDraft, ProductForm, ProductStore};
//! use foodapp::storage::MemoryStore;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = LocalProductStore::new(MemoryStore::new(), MockLatency::none());
//!
//!     let created = store.save(ProductDraft::New(ProductForm::new("Pudim", "9.50"))).await?;
//!     println!("created #{} at {}", created.id, created.display_price());
//!
//!     for product in store.list().await? {
//!         println!("{} - {}", product.name, product.display_price());
//!     }
//!     Ok(())
//! }
//! ```

mod error;
mod http;
mod local;
mod types;

pub use error::{CatalogError, CatalogResult};
pub use http::HttpProductStore;
pub use local::{LocalProductStore, MockLatency, PRODUCTS_KEY, RESTAURANT_KEY};
pub use types::{
    coerce_price, format_price, Category, ImageUpload, PriceInput, Product, ProductDraft,
    ProductForm, ProductId, ProductPayload, RestaurantProfile, UploadedImage,
};

use async_trait::async_trait;
use std::path::PathBuf;
use std::sync::Arc;

use crate::storage::{FileStore, StorageError};

/// The product CRUD contract
#[async_trait]
pub trait ProductStore: Send + Sync {
    /// Short name for logs ("http", "local")
    fn name(&self) -> &str;

    /// Current products in store order
    async fn list(&self) -> CatalogResult<Vec<Product>>;

    /// Insert or update, returning the stored record
    async fn save(&self, draft: ProductDraft) -> CatalogResult<Product>;

    /// Remove by identifier. Missing identifiers are not an error.
    async fn delete(&self, id: ProductId) -> CatalogResult<bool>;

    /// Store an image and return a reference usable as `Product::image`
    async fn upload_image(&self, file: ImageUpload) -> CatalogResult<String>;

    /// Overwrite the restaurant profile, returning the store's opaque reply
    async fn save_restaurant(&self, profile: &RestaurantProfile)
        -> CatalogResult<serde_json::Value>;
}

/// Which store implementation to run
#[derive(Debug, Clone, PartialEq)]
pub enum StoreBackend {
    /// Product REST API at `base_url`
    Http { base_url: String },
    /// Key-value mock persisted under `data_dir`
    Local {
        data_dir: PathBuf,
        latency: MockLatency,
    },
}

/// Build the configured store
pub fn open_store(backend: &StoreBackend) -> Result<Arc<dyn ProductStore>, StorageError> {
    match backend {
        StoreBackend::Http { base_url } => {
            tracing::info!(base_url = %base_url, "Using product API");
            Ok(Arc::new(HttpProductStore::new(base_url.clone())))
        }
        StoreBackend::Local { data_dir, latency } => {
            tracing::info!(
                data_dir = ?data_dir,
                "No API endpoint configured, using local mock store"
            );
            let kv = FileStore::open(data_dir)?;
            Ok(Arc::new(LocalProductStore::new(kv, latency.clone())))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_open_local_store_is_seeded() {
        let dir = tempdir().unwrap();
        let store = open_store(&StoreBackend::Local {
            data_dir: dir.path().to_path_buf(),
            latency: MockLatency::none(),
        })
        .unwrap();

        assert_eq!(store.name(), "local");
        assert_eq!(store.list().await.unwrap().len(), 2);
    }

    #[test]
    fn test_open_http_store() {
        let store = open_store(&StoreBackend::Http {
            base_url: "http://localhost:8080/api".to_string(),
        })
        .unwrap();
        assert_eq!(store.name(), "http");
    }
}
