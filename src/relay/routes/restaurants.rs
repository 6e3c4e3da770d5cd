//! Restaurant Routes
//!
//! - POST /api/restaurants - Forward the restaurant profile downstream
//!
//! The body is forwarded as parsed JSON, without schema checks. One attempt
//! per request: a downstream timeout is reported as a failure even though the
//! downstream may still have applied the write.

use axum::{body::Bytes, extract::State, Json};
use serde_json::Value;
use std::sync::Arc;

use crate::relay::error::{MessageResponse, RelayError, RelayResult, SUCCESS_MESSAGE};
use crate::relay::state::RelayState;

/// POST /api/restaurants
pub async fn save_restaurant(
    State(state): State<Arc<RelayState>>,
    body: Bytes,
) -> RelayResult<Json<MessageResponse>> {
    let payload: Value =
        serde_json::from_slice(&body).map_err(|e| RelayError::InvalidBody(e.to_string()))?;

    let downstream = &state.config.downstream_url;
    tracing::debug!(downstream = %downstream, "Forwarding restaurant information");

    let response = state.client.post(downstream).json(&payload).send().await?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(RelayError::DownstreamStatus {
            status: status.as_u16(),
            body,
        });
    }

    tracing::info!(downstream = %downstream, "Restaurant information forwarded");
    Ok(Json(MessageResponse::new(SUCCESS_MESSAGE)))
}
