//! # FoodApp
//!
//! Client side of a food-delivery platform: restaurant menus, an owner
//! dashboard for managing menu items, a user profile page and an auth form,
//! all over a product REST API or a local mock standing in for it.
//!
//! ## Modules
//!
//! - [`catalog`]: Product types and the `ProductStore` contract (HTTP and mock)
//! - [`storage`]: Key-value persistence behind the mock store
//! - [`profile`]: Addresses, favorites and order history
//! - [`views`]: Page state machines
//! - [`relay`]: Restaurant relay HTTP service
//! - [`config`]: Configuration loading
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use foodapp::catalog::{open_store, ProductDraft, ProductForm, Category};
//! use foodapp::config::Config;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // API when configured, local mock otherwise
//!     let (config, _origin) = Config::load_default();
//!     let store = open_store(&config.backend())?;
//!
//!     let draft = ProductDraft::New(
//!         ProductForm::new("Suco de Laranja", "8.50").category(Category::Drinks),
//!     );
//!     let saved = store.save(draft).await?;
//!     println!("Saved #{} for {}", saved.id, saved.display_price());
//!
//!     for product in store.list().await? {
//!         println!("{:>3}  {}", product.id, product.name);
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod catalog;
pub mod config;
pub mod logging;
pub mod profile;
pub mod relay;
pub mod storage;
pub mod views;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
