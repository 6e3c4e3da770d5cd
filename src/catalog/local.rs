//! Mock product store
//!
//! Stands in for the product API when no endpoint is configured. Products
//! live as one JSON array under [`PRODUCTS_KEY`]; the restaurant profile
//! under [`RESTAURANT_KEY`]. Each call sleeps first to emulate network
//! latency. Nothing serializes overlapping calls, so concurrent saves race
//! and the last write wins.

use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use std::time::Duration;

use super::{
    CatalogError, CatalogResult, Category, ImageUpload, Product, ProductDraft, ProductId,
    ProductStore, RestaurantProfile,
};
use crate::storage::KeyValueStore;

/// Key holding the product array
pub const PRODUCTS_KEY: &str = "restaurant_products";

/// Key holding the restaurant profile
pub const RESTAURANT_KEY: &str = "restaurant_info";

/// Artificial delay per operation
#[derive(Debug, Clone, PartialEq)]
pub struct MockLatency {
    pub list: Duration,
    pub save: Duration,
    pub delete: Duration,
    pub upload: Duration,
    pub restaurant: Duration,
}

impl Default for MockLatency {
    fn default() -> Self {
        Self {
            list: Duration::from_millis(500),
            save: Duration::from_millis(800),
            delete: Duration::from_millis(600),
            upload: Duration::from_millis(1000),
            restaurant: Duration::from_millis(800),
        }
    }
}

impl MockLatency {
    /// No delay at all
    pub fn none() -> Self {
        Self {
            list: Duration::ZERO,
            save: Duration::ZERO,
            delete: Duration::ZERO,
            upload: Duration::ZERO,
            restaurant: Duration::ZERO,
        }
    }

    /// Same delay for every operation
    pub fn uniform(delay: Duration) -> Self {
        Self {
            list: delay,
            save: delay,
            delete: delay,
            upload: delay,
            restaurant: delay,
        }
    }
}

/// Product store backed by a key-value store
pub struct LocalProductStore<K> {
    kv: K,
    latency: MockLatency,
}

impl<K: KeyValueStore> LocalProductStore<K> {
    pub fn new(kv: K, latency: MockLatency) -> Self {
        Self { kv, latency }
    }

    /// The underlying key-value store
    pub fn kv(&self) -> &K {
        &self.kv
    }

    /// Last saved restaurant profile, if any
    pub fn restaurant(&self) -> CatalogResult<Option<RestaurantProfile>> {
        let raw = self
            .kv
            .get_item(RESTAURANT_KEY)
            .map_err(|e| CatalogError::Fetch(e.to_string()))?;

        match raw {
            Some(raw) => serde_json::from_str(&raw)
                .map(Some)
                .map_err(|e| CatalogError::Fetch(format!("unreadable restaurant profile: {}", e))),
            None => Ok(None),
        }
    }

    /// Read the product array, seeding it on first use.
    ///
    /// Unreadable JSON is logged and treated as an empty list.
    fn load_products(&self, on_error: fn(String) -> CatalogError) -> CatalogResult<Vec<Product>> {
        let raw = self
            .kv
            .get_item(PRODUCTS_KEY)
            .map_err(|e| on_error(e.to_string()))?;

        match raw {
            Some(raw) => match serde_json::from_str::<Vec<Product>>(&raw) {
                Ok(products) => Ok(products),
                Err(e) => {
                    tracing::error!(
                        key = PRODUCTS_KEY,
                        error = %e,
                        "Stored products are unreadable"
                    );
                    Ok(Vec::new())
                }
            },
            None => {
                let seed = seed_products();
                self.store_products(&seed, on_error)?;
                tracing::debug!(count = seed.len(), "Seeded local product store");
                Ok(seed)
            }
        }
    }

    fn store_products(
        &self,
        products: &[Product],
        on_error: fn(String) -> CatalogError,
    ) -> CatalogResult<()> {
        let raw = serde_json::to_string(products).map_err(|e| on_error(e.to_string()))?;
        self.kv
            .set_item(PRODUCTS_KEY, &raw)
            .map_err(|e| on_error(e.to_string()))
    }
}

/// Identifier for the next inserted product: max + 1, or 1 when empty
pub(crate) fn next_product_id(products: &[Product]) -> ProductId {
    products.iter().map(|p| p.id).max().unwrap_or(0) + 1
}

/// The two example products written on first use
fn seed_products() -> Vec<Product> {
    vec![
        Product {
            id: 1,
            name: "Prato Especial 1".to_string(),
            price: 45.90,
            description: "Descrição deliciosa do prato com ingredientes especiais e temperos únicos."
                .to_string(),
            prep_time: "30 min".to_string(),
            servings: "Serve 2".to_string(),
            image: None,
            category: Category::MainCourse,
        },
        Product {
            id: 2,
            name: "Suco Natural".to_string(),
            price: 12.90,
            description: "Suco natural de frutas da estação.".to_string(),
            prep_time: "10 min".to_string(),
            servings: "Serve 1".to_string(),
            image: None,
            category: Category::Drinks,
        },
    ]
}

#[async_trait]
impl<K: KeyValueStore> ProductStore for LocalProductStore<K> {
    fn name(&self) -> &str {
        "local"
    }

    async fn list(&self) -> CatalogResult<Vec<Product>> {
        tokio::time::sleep(self.latency.list).await;
        self.load_products(CatalogError::Fetch)
    }

    async fn save(&self, draft: ProductDraft) -> CatalogResult<Product> {
        tokio::time::sleep(self.latency.save).await;

        let mut products = self.load_products(CatalogError::Save)?;

        let saved = match draft {
            ProductDraft::New(form) => {
                let product = Product::from_form(next_product_id(&products), &form);
                products.push(product.clone());
                product
            }
            ProductDraft::Existing { id, form } => {
                let product = products
                    .iter_mut()
                    .find(|p| p.id == id)
                    .ok_or_else(|| CatalogError::Save(format!("no product with id {}", id)))?;
                product.apply(&form);
                product.clone()
            }
        };

        self.store_products(&products, CatalogError::Save)?;
        tracing::debug!(id = saved.id, "Saved product to local store");
        Ok(saved)
    }

    async fn delete(&self, id: ProductId) -> CatalogResult<bool> {
        tokio::time::sleep(self.latency.delete).await;

        let mut products = self.load_products(CatalogError::Delete)?;
        let before = products.len();
        products.retain(|p| p.id != id);

        if products.len() != before {
            self.store_products(&products, CatalogError::Delete)?;
            tracing::debug!(id, "Deleted product from local store");
        }
        Ok(true)
    }

    async fn upload_image(&self, file: ImageUpload) -> CatalogResult<String> {
        tokio::time::sleep(self.latency.upload).await;
        Ok(format!(
            "data:{};base64,{}",
            file.mime_type(),
            STANDARD.encode(&file.bytes)
        ))
    }

    async fn save_restaurant(
        &self,
        profile: &RestaurantProfile,
    ) -> CatalogResult<serde_json::Value> {
        tokio::time::sleep(self.latency.restaurant).await;

        let value = serde_json::to_value(profile).map_err(|e| CatalogError::Save(e.to_string()))?;
        self.kv
            .set_item(RESTAURANT_KEY, &value.to_string())
            .map_err(|e| CatalogError::Save(e.to_string()))?;
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ProductForm;
    use crate::storage::{MemoryStore, StorageError, StorageResult};
    use std::sync::Arc;

    fn empty_store() -> LocalProductStore<MemoryStore> {
        let kv = MemoryStore::new();
        kv.set_item(PRODUCTS_KEY, "[]").unwrap();
        LocalProductStore::new(kv, MockLatency::none())
    }

    fn form(name: &str, price: &str) -> ProductForm {
        ProductForm::new(name, price)
            .description("desc")
            .prep_time("15 min")
            .servings("Serve 1")
    }

    #[tokio::test]
    async fn test_seeded_on_first_use() {
        let store = LocalProductStore::new(MemoryStore::new(), MockLatency::none());
        let products = store.list().await.unwrap();

        assert_eq!(products.len(), 2);
        assert_eq!(products[0].id, 1);
        assert_eq!(products[0].name, "Prato Especial 1");
        assert_eq!(products[1].category, Category::Drinks);

        // Seed is persisted, not regenerated
        assert!(store.kv().get_item(PRODUCTS_KEY).unwrap().is_some());
    }

    #[tokio::test]
    async fn test_insert_then_update_scenario() {
        let store = empty_store();

        let created = store
            .save(ProductDraft::New(form("X", "10")))
            .await
            .unwrap();
        assert_eq!(created.id, 1);
        assert_eq!(created.price, 10.0);

        let listed = store.list().await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, 1);

        let updated = store
            .save(ProductDraft::Existing {
                id: 1,
                form: form("X", "15"),
            })
            .await
            .unwrap();
        assert_eq!(updated.price, 15.0);

        let listed = store.list().await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].price, 15.0);
    }

    #[tokio::test]
    async fn test_insert_uses_max_id_plus_one() {
        let store = LocalProductStore::new(MemoryStore::new(), MockLatency::none());

        // Seeded ids are 1 and 2; delete 1 so max stays 2
        store.delete(1).await.unwrap();
        let created = store
            .save(ProductDraft::New(form("Novo", "5")))
            .await
            .unwrap();
        assert_eq!(created.id, 3);
    }

    #[tokio::test]
    async fn test_update_preserves_count_and_position() {
        let store = LocalProductStore::new(MemoryStore::new(), MockLatency::none());
        let before = store.list().await.unwrap();

        store
            .save(ProductDraft::Existing {
                id: 1,
                form: form("Renamed", "abc").category(Category::Desserts),
            })
            .await
            .unwrap();

        let after = store.list().await.unwrap();
        assert_eq!(after.len(), before.len());
        assert_eq!(after[0].id, 1);
        assert_eq!(after[0].name, "Renamed");
        assert_eq!(after[0].price, 0.0);
        assert_eq!(after[0].category, Category::Desserts);
        assert_eq!(after[1], before[1]);
    }

    #[tokio::test]
    async fn test_update_missing_id_fails_without_change() {
        let store = LocalProductStore::new(MemoryStore::new(), MockLatency::none());
        let before = store.list().await.unwrap();

        let result = store
            .save(ProductDraft::Existing {
                id: 99,
                form: form("Ghost", "1"),
            })
            .await;

        assert!(matches!(result, Err(CatalogError::Save(_))));
        assert_eq!(store.list().await.unwrap(), before);
    }

    #[tokio::test]
    async fn test_delete_missing_id_is_silent() {
        let store = LocalProductStore::new(MemoryStore::new(), MockLatency::none());
        let before = store.list().await.unwrap();

        assert!(store.delete(42).await.unwrap());
        assert_eq!(store.list().await.unwrap(), before);
    }

    #[tokio::test]
    async fn test_delete_removes_record() {
        let store = LocalProductStore::new(MemoryStore::new(), MockLatency::none());
        assert!(store.delete(2).await.unwrap());

        let products = store.list().await.unwrap();
        assert_eq!(products.len(), 1);
        assert!(products.iter().all(|p| p.id != 2));
    }

    #[tokio::test]
    async fn test_upload_returns_data_url() {
        let store = empty_store();
        let url = store
            .upload_image(ImageUpload::new("dish.png", b"hello".to_vec()))
            .await
            .unwrap();
        assert_eq!(url, "data:image/png;base64,aGVsbG8=");
    }

    #[tokio::test]
    async fn test_unreadable_products_treated_as_empty() {
        let kv = MemoryStore::new();
        kv.set_item(PRODUCTS_KEY, "{broken").unwrap();
        let store = LocalProductStore::new(kv, MockLatency::none());

        assert!(store.list().await.unwrap().is_empty());

        let created = store
            .save(ProductDraft::New(form("Fresh", "3")))
            .await
            .unwrap();
        assert_eq!(created.id, 1);
    }

    #[tokio::test]
    async fn test_save_restaurant_overwrites() {
        let store = empty_store();
        assert_eq!(store.restaurant().unwrap(), None);

        let mut profile = RestaurantProfile::default();
        store.save_restaurant(&profile).await.unwrap();

        profile.restaurant_name = "Cantina".to_string();
        let reply = store.save_restaurant(&profile).await.unwrap();
        assert_eq!(reply["restaurantName"], "Cantina");
        assert_eq!(store.restaurant().unwrap(), Some(profile));
    }

    #[tokio::test]
    async fn test_overlapping_saves_both_land_or_last_wins() {
        let store = Arc::new(LocalProductStore::new(
            MemoryStore::new(),
            MockLatency::uniform(Duration::from_millis(5)),
        ));

        let a = {
            let store = Arc::clone(&store);
            tokio::spawn(async move {
                store
                    .save(ProductDraft::Existing {
                        id: 1,
                        form: ProductForm::new("A", "1"),
                    })
                    .await
            })
        };
        let b = {
            let store = Arc::clone(&store);
            tokio::spawn(async move {
                store
                    .save(ProductDraft::Existing {
                        id: 1,
                        form: ProductForm::new("B", "2"),
                    })
                    .await
            })
        };
        a.await.unwrap().unwrap();
        b.await.unwrap().unwrap();

        let products = store.list().await.unwrap();
        assert_eq!(products.len(), 2);
        assert!(products[0].name == "A" || products[0].name == "B");
    }

    struct FailingStore;

    impl KeyValueStore for FailingStore {
        fn get_item(&self, _key: &str) -> StorageResult<Option<String>> {
            Err(StorageError::Lock("unavailable".to_string()))
        }

        fn set_item(&self, _key: &str, _value: &str) -> StorageResult<()> {
            Err(StorageError::Lock("unavailable".to_string()))
        }

        fn remove_item(&self, _key: &str) -> StorageResult<()> {
            Err(StorageError::Lock("unavailable".to_string()))
        }
    }

    #[tokio::test]
    async fn test_storage_failures_map_to_operation_kind() {
        let store = LocalProductStore::new(FailingStore, MockLatency::none());

        assert!(matches!(store.list().await, Err(CatalogError::Fetch(_))));
        assert!(matches!(
            store.save(ProductDraft::New(ProductForm::default())).await,
            Err(CatalogError::Save(_))
        ));
        assert!(matches!(store.delete(1).await, Err(CatalogError::Delete(_))));
        assert!(matches!(
            store.save_restaurant(&RestaurantProfile::default()).await,
            Err(CatalogError::Save(_))
        ));
    }

    #[test]
    fn test_next_product_id() {
        assert_eq!(next_product_id(&[]), 1);
        let products = vec![
            Product::from_form(4, &ProductForm::default()),
            Product::from_form(2, &ProductForm::default()),
        ];
        assert_eq!(next_product_id(&products), 5);
    }
}
