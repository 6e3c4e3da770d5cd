//! FoodApp Restaurant Relay
//!
//! Run with: cargo run --bin foodapp-relay
//!
//! # Configuration
//!
//! Read from the standard config locations (see `foodapp-cli config`), then
//! overridden by environment variables:
//! - `FOODAPP_RELAY_HOST`: Host to bind to (default: 0.0.0.0)
//! - `FOODAPP_RELAY_PORT`: Port to listen on (default: 3000)
//! - `FOODAPP_RELAY_DOWNSTREAM`: Where submissions are forwarded
//!   (default: http://localhost:8080/dishes)
//! - `FOODAPP_LOG_LEVEL` / `FOODAPP_LOG_FORMAT`: Logging (default: info, pretty)
//! - `RUST_LOG`: Full filter override

use anyhow::Context;
use foodapp::config::Config;
use foodapp::logging::init_tracing;
use foodapp::relay::{serve, RelayState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let (config, origin) = Config::load_default();
    init_tracing(&config.logging);
    origin.log();

    tracing::info!("Starting FoodApp relay v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        "Downstream timeout: {}s",
        config.relay.request_timeout_secs
    );

    let state = RelayState::new(config.relay.clone()).context("failed to build relay state")?;
    serve(state, &config.relay)
        .await
        .with_context(|| format!("relay failed on {}", config.relay.addr()))?;

    tracing::info!("FoodApp relay stopped");
    Ok(())
}
