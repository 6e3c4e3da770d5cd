//! localStorage stand-in for the product API
//!
//! Same operations as the HTTP client, with an artificial delay and the
//! product list kept under `restaurant_products`.

use gloo_timers::future::TimeoutFuture;

use super::read_as_data_url;
use super::types::{Product, ProductPayload, RestaurantInfo};

const PRODUCTS_KEY: &str = "restaurant_products";
const RESTAURANT_KEY: &str = "restaurant_info";

fn storage() -> Result<web_sys::Storage, String> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or_else(|| "localStorage unavailable".to_string())
}

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
            category: "Pratos Principais".to_string(),
        },
        Product {
            id: 2,
            name: "Suco Natural".to_string(),
            price: 12.90,
            description: "Suco natural de frutas da estação.".to_string(),
            prep_time: "10 min".to_string(),
            servings: "Serve 1".to_string(),
            image: None,
            category: "Bebidas".to_string(),
        },
    ]
}

fn load_products() -> Result<Vec<Product>, String> {
    let storage = storage()?;
    let raw = storage
        .get_item(PRODUCTS_KEY)
        .map_err(|e| format!("{:?}", e))?;

    match raw {
        Some(raw) => Ok(serde_json::from_str(&raw).unwrap_or_else(|e| {
            web_sys::console::error_1(&format!("Stored products are unreadable: {}", e).into());
            Vec::new()
        })),
        None => {
            let seed = seed_products();
            store_products(&seed)?;
            Ok(seed)
        }
    }
}

fn store_products(products: &[Product]) -> Result<(), String> {
    let raw = serde_json::to_string(products).map_err(|e| e.to_string())?;
    storage()?
        .set_item(PRODUCTS_KEY, &raw)
        .map_err(|e| format!("{:?}", e))
}

pub async fn fetch_products() -> Result<Vec<Product>, String> {
    TimeoutFuture::new(500).await;
    load_products()
}

pub async fn save_product(payload: &ProductPayload) -> Result<Product, String> {
    TimeoutFuture::new(800).await;
    let mut products = load_products()?;

    let saved = match payload.id {
        Some(id) => {
            let slot = products
                .iter_mut()
                .find(|p| p.id == id)
                .ok_or_else(|| format!("product {} not found", id))?;
            *slot = payload.clone().into_product(id);
            slot.clone()
        }
        None => {
            let id = products.iter().map(|p| p.id).max().unwrap_or(0) + 1;
            let product = payload.clone().into_product(id);
            products.push(product.clone());
            product
        }
    };

    store_products(&products)?;
    Ok(saved)
}

pub async fn delete_product(id: u64) -> Result<bool, String> {
    TimeoutFuture::new(600).await;
    let mut products = load_products()?;
    let before = products.len();
    products.retain(|p| p.id != id);
    if products.len() != before {
        store_products(&products)?;
    }
    Ok(true)
}

/// Inline the image as a `data:` URL
pub async fn upload_image(file: &web_sys::File) -> Result<String, String> {
    TimeoutFuture::new(1000).await;
    read_as_data_url(file).await
}

pub async fn save_restaurant(info: &RestaurantInfo) -> Result<String, String> {
    TimeoutFuture::new(800).await;
    let raw = serde_json::to_string(info).map_err(|e| e.to_string())?;
    storage()?
        .set_item(RESTAURANT_KEY, &raw)
        .map_err(|e| format!("{:?}", e))?;
    Ok("Restaurant information saved".to_string())
}
