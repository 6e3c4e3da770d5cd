//! HTTP API Client
//!
//! Functions for communicating with the product REST API.

use gloo_net::http::{Request, Response};

use super::types::{MessageResponse, Product, ProductPayload, RestaurantInfo, UploadResponse};
use super::{api_base, relay_base};

async fn ensure_ok(response: Response) -> Result<Response, String> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let text = response.text().await.unwrap_or_default();
    Err(format!("HTTP {}: {}", status, text))
}

/// Fetch all products
pub async fn fetch_products() -> Result<Vec<Product>, String> {
    let response = Request::get(&format!("{}/products", api_base()))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    ensure_ok(response)
        .await?
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Create (no id) or update (with id) a product
pub async fn save_product(payload: &ProductPayload) -> Result<Product, String> {
    let request = match payload.id {
        Some(id) => Request::put(&format!("{}/products/{}", api_base(), id)),
        None => Request::post(&format!("{}/products", api_base())),
    };

    let response = request
        .json(payload)
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    ensure_ok(response)
        .await?
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Delete a product
pub async fn delete_product(id: u64) -> Result<bool, String> {
    let response = Request::delete(&format!("{}/products/{}", api_base(), id))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    ensure_ok(response).await?;
    Ok(true)
}

/// Upload an image as multipart field `file`
pub async fn upload_image(file: &web_sys::File) -> Result<String, String> {
    let form = web_sys::FormData::new().map_err(|e| format!("{:?}", e))?;
    form.append_with_blob_and_filename("file", file, &file.name())
        .map_err(|e| format!("{:?}", e))?;

    let response = Request::post(&format!("{}/upload", api_base()))
        .body(form)
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    let uploaded: UploadResponse = ensure_ok(response)
        .await?
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))?;

    Ok(uploaded.image_url)
}

/// Submit restaurant information through the relay
pub async fn submit_restaurant_info(info: &RestaurantInfo) -> Result<String, String> {
    let response = Request::post(&format!("{}/api/restaurants", relay_base()))
        .json(info)
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    let ok = response.ok();
    let reply: Option<MessageResponse> = response.json().await.ok();
    let message = reply.map(|r| r.message).unwrap_or_default();

    if ok {
        Ok(message)
    } else {
        Err(message)
    }
}
