//! Relay State
//!
//! Shared state accessible by all relay handlers.
//! Wrapped in Arc for thread-safe sharing across async tasks.

use chrono::{DateTime, Utc};
use reqwest::Client;
use std::sync::Arc;
use std::time::Instant;

use crate::config::RelayConfig;
use crate::relay::RelayResult;

/// Shared state for all handlers
#[derive(Clone)]
pub struct RelayState {
    /// Client for the downstream service
    pub client: Client,
    /// Relay configuration
    pub config: Arc<RelayConfig>,
    /// Server start time for uptime tracking
    pub start_time: Instant,
    /// Wall-clock start time reported by /health
    pub started_at: DateTime<Utc>,
}

impl RelayState {
    /// Build state with a client honoring the configured timeout
    pub fn new(config: RelayConfig) -> RelayResult<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout())
            .build()?;

        Ok(Self {
            client,
            config: Arc::new(config),
            start_time: Instant::now(),
            started_at: Utc::now(),
        })
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}
