//! Product API access
//!
//! The transport is fixed at build time: `FOODAPP_API_URL` selects the HTTP
//! client; without it, debug builds use the localStorage mock and release
//! builds fall back to [`DEFAULT_API_BASE`]. There is no runtime fallback.
//!
//! Errors come back as the generic message shown to the user; the detail is
//! logged to the browser console.

pub mod client;
pub mod mock;
pub mod types;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

pub use types::{
    format_price, EditForm, Product, ProductPayload, RestaurantInfo, CATEGORIES,
};

/// API base URL used when none was configured at build time
pub const DEFAULT_API_BASE: &str = "http://localhost:8080/api";

/// Relay base URL used when none was configured at build time
pub const DEFAULT_RELAY_BASE: &str = "http://localhost:3000";

/// Whether products live in localStorage
pub fn use_mock() -> bool {
    option_env!("FOODAPP_API_URL").is_none() && cfg!(debug_assertions)
}

pub fn api_base() -> String {
    option_env!("FOODAPP_API_URL")
        .unwrap_or(DEFAULT_API_BASE)
        .trim_end_matches('/')
        .to_string()
}

pub fn relay_base() -> String {
    option_env!("FOODAPP_RELAY_URL")
        .unwrap_or(DEFAULT_RELAY_BASE)
        .trim_end_matches('/')
        .to_string()
}

fn report<T>(result: Result<T, String>, action: &str, user_message: &str) -> Result<T, String> {
    result.map_err(|detail| {
        web_sys::console::error_1(&format!("{} failed: {}", action, detail).into());
        user_message.to_string()
    })
}

pub async fn fetch_products() -> Result<Vec<Product>, String> {
    let result = if use_mock() {
        mock::fetch_products().await
    } else {
        client::fetch_products().await
    };
    report(result, "Fetching products", "Erro ao carregar produtos. Tente novamente mais tarde.")
}

pub async fn save_product(payload: &ProductPayload) -> Result<Product, String> {
    let result = if use_mock() {
        mock::save_product(payload).await
    } else {
        client::save_product(payload).await
    };
    report(result, "Saving product", "Erro ao salvar produto. Tente novamente.")
}

pub async fn delete_product(id: u64) -> Result<bool, String> {
    let result = if use_mock() {
        mock::delete_product(id).await
    } else {
        client::delete_product(id).await
    };
    report(result, "Deleting product", "Erro ao excluir produto. Tente novamente.")
}

pub async fn upload_image(file: &web_sys::File) -> Result<String, String> {
    let result = if use_mock() {
        mock::upload_image(file).await
    } else {
        client::upload_image(file).await
    };
    report(result, "Uploading image", "Erro ao enviar imagem. Tente novamente.")
}

/// Restaurant information goes through the relay, or localStorage in mock mode
pub async fn save_restaurant_info(info: &RestaurantInfo) -> Result<String, String> {
    let result = if use_mock() {
        mock::save_restaurant(info).await
    } else {
        client::submit_restaurant_info(info).await
    };
    report(result, "Saving restaurant information", "Houve um erro ao salvar as alterações.")
}

/// Read a picked file into a `data:` URL
pub async fn read_as_data_url(file: &web_sys::File) -> Result<String, String> {
    let reader = web_sys::FileReader::new().map_err(|e| format!("{:?}", e))?;

    let promise = js_sys::Promise::new(&mut |resolve, reject| {
        let onload = {
            let reader = reader.clone();
            Closure::wrap(Box::new(move |_: web_sys::Event| {
                let result = reader.result().unwrap_or(JsValue::NULL);
                let _ = resolve.call1(&JsValue::NULL, &result);
            }) as Box<dyn FnMut(_)>)
        };
        let onerror = Closure::wrap(Box::new(move |_: web_sys::Event| {
            let _ = reject.call1(&JsValue::NULL, &JsValue::from_str("could not read file"));
        }) as Box<dyn FnMut(_)>);

        reader.set_onload(Some(onload.as_ref().unchecked_ref()));
        reader.set_onerror(Some(onerror.as_ref().unchecked_ref()));
        onload.forget();
        onerror.forget();
    });

    reader
        .read_as_data_url(file)
        .map_err(|e| format!("{:?}", e))?;

    JsFuture::from(promise)
        .await
        .map_err(|e| format!("{:?}", e))?
        .as_string()
        .ok_or_else(|| "unexpected reader result".to_string())
}
