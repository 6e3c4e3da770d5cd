//! Client for the relay's restaurant endpoint, used by the dashboard

use reqwest::Client;

use crate::catalog::{CatalogError, CatalogResult, RestaurantProfile};
use crate::relay::error::MessageResponse;

/// Posts restaurant profiles to `{base_url}/api/restaurants`
#[derive(Debug, Clone)]
pub struct RelayClient {
    client: Client,
    base_url: String,
}

impl RelayClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Submit the profile, returning the relay's confirmation message
    pub async fn save_restaurant(&self, profile: &RestaurantProfile) -> CatalogResult<String> {
        let url = format!("{}/api/restaurants", self.base_url);

        let response = self
            .client
            .post(&url)
            .json(profile)
            .send()
            .await
            .map_err(|e| CatalogError::Save(e.to_string()))?;

        let status = response.status();
        let reply: Option<MessageResponse> = response.json().await.ok();
        let message = reply.map(|r| r.message).unwrap_or_default();

        if status.is_success() {
            Ok(message)
        } else {
            Err(CatalogError::Save(format!(
                "HTTP {}: {}",
                status.as_u16(),
                message
            )))
        }
    }
}
