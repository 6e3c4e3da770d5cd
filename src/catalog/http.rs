//! Product REST API client
//!
//! - `GET    {base}/products`
//! - `POST   {base}/products`
//! - `PUT    {base}/products/{id}`
//! - `DELETE {base}/products/{id}`
//! - `POST   {base}/upload` (multipart, field `file`)
//! - `POST   {base}/restaurant`
//!
//! No retries and no client-side timeout: a failed call is reported once
//! and the caller decides whether to try again.

use async_trait::async_trait;
use reqwest::{multipart, Client, Response};
use serde::Serialize;

use super::{
    CatalogError, CatalogResult, ImageUpload, Product, ProductDraft, ProductId, ProductPayload,
    ProductStore, RestaurantProfile, UploadedImage,
};

/// Product store talking to the REST API
pub struct HttpProductStore {
    client: Client,
    base_url: String,
}

/// `PUT` body: the payload plus the identifier being updated
#[derive(Debug, Serialize)]
struct UpdateBody<'a> {
    id: ProductId,
    #[serde(flatten)]
    payload: &'a ProductPayload,
}

impl HttpProductStore {
    /// Create a client for the API rooted at `base_url`
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(base_url, Client::new())
    }

    /// Create a client reusing an existing `reqwest::Client`
    pub fn with_client(base_url: impl Into<String>, client: Client) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    /// The normalized base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Describe a transport failure for logs
fn describe(err: &reqwest::Error) -> String {
    if err.is_timeout() {
        format!("request timed out: {}", err)
    } else if err.is_connect() {
        format!("API unreachable: {}", err)
    } else if err.is_decode() {
        format!("unexpected response body: {}", err)
    } else {
        err.to_string()
    }
}

/// Turn a non-2xx response into the given error kind
async fn ensure_success(
    response: Response,
    on_error: fn(String) -> CatalogError,
) -> CatalogResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let text = response.text().await.unwrap_or_default();
    tracing::warn!(status = status.as_u16(), body = %text, "Product API returned an error");
    Err(on_error(format!("HTTP {}: {}", status.as_u16(), text)))
}

#[async_trait]
impl ProductStore for HttpProductStore {
    fn name(&self) -> &str {
        "http"
    }

    async fn list(&self) -> CatalogResult<Vec<Product>> {
        let url = self.url("/products");
        tracing::debug!(url = %url, "Fetching products");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| CatalogError::Fetch(describe(&e)))?;

        ensure_success(response, CatalogError::Fetch)
            .await?
            .json()
            .await
            .map_err(|e| CatalogError::Fetch(describe(&e)))
    }

    async fn save(&self, draft: ProductDraft) -> CatalogResult<Product> {
        let payload = draft.form().to_payload();

        let request = match draft.id() {
            None => self.client.post(self.url("/products")).json(&payload),
            Some(id) => self
                .client
                .put(self.url(&format!("/products/{}", id)))
                .json(&UpdateBody {
                    id,
                    payload: &payload,
                }),
        };

        tracing::debug!(id = ?draft.id(), "Saving product");

        let response = request
            .send()
            .await
            .map_err(|e| CatalogError::Save(describe(&e)))?;

        ensure_success(response, CatalogError::Save)
            .await?
            .json()
            .await
            .map_err(|e| CatalogError::Save(describe(&e)))
    }

    async fn delete(&self, id: ProductId) -> CatalogResult<bool> {
        let url = self.url(&format!("/products/{}", id));
        tracing::debug!(url = %url, "Deleting product");

        let response = self
            .client
            .delete(&url)
            .send()
            .await
            .map_err(|e| CatalogError::Delete(describe(&e)))?;

        ensure_success(response, CatalogError::Delete).await?;
        Ok(true)
    }

    async fn upload_image(&self, file: ImageUpload) -> CatalogResult<String> {
        let mime = file.mime_type().to_string();
        let part = multipart::Part::bytes(file.bytes)
            .file_name(file.file_name)
            .mime_str(&mime)
            .map_err(|e| CatalogError::Upload(describe(&e)))?;
        let form = multipart::Form::new().part("file", part);

        let response = self
            .client
            .post(self.url("/upload"))
            .multipart(form)
            .send()
            .await
            .map_err(|e| CatalogError::Upload(describe(&e)))?;

        let uploaded: UploadedImage = ensure_success(response, CatalogError::Upload)
            .await?
            .json()
            .await
            .map_err(|e| CatalogError::Upload(describe(&e)))?;

        Ok(uploaded.image_url)
    }

    async fn save_restaurant(
        &self,
        profile: &RestaurantProfile,
    ) -> CatalogResult<serde_json::Value> {
        let response = self
            .client
            .post(self.url("/restaurant"))
            .json(profile)
            .send()
            .await
            .map_err(|e| CatalogError::Save(describe(&e)))?;

        ensure_success(response, CatalogError::Save)
            .await?
            .json()
            .await
            .map_err(|e| CatalogError::Save(describe(&e)))
    }
}
