//! Restaurant Relay
//!
//! Small HTTP service, built with Axum, that accepts the dashboard's
//! restaurant-profile submission and forwards it to a downstream service.
//!
//! # Endpoints
//!
//! - `POST /api/restaurants` - Forward the JSON body to the downstream URL
//! - `GET /health/live` - Liveness probe
//! - `GET /health` - Full health status
//!
//! # Example
//!
//! ```rust,no_run
//! use foodapp::config::RelayConfig;
//! use foodapp::relay::{serve, RelayState};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = RelayConfig::default();
//!     let state = RelayState::new(config.clone())?;
//!     serve(state, &config).await?;
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod error;
pub mod routes;
pub mod state;

pub use client::RelayClient;
pub use error::{MessageResponse, RelayError, RelayResult, FAILURE_MESSAGE, SUCCESS_MESSAGE};
pub use state::RelayState;

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::config::RelayConfig;

/// Build the relay router with all routes and middleware
pub fn build_router(state: RelayState) -> Router {
    let api_routes =
        Router::new().route("/restaurants", post(routes::restaurants::save_restaurant));

    let health_routes = Router::new()
        .route("/live", get(routes::health::liveness))
        .route("/", get(routes::health::full_health));

    Router::new()
        .nest("/api", api_routes)
        .nest("/health", health_routes)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(Arc::new(state))
}

/// Start the relay server
pub async fn serve(state: RelayState, config: &RelayConfig) -> RelayResult<()> {
    let router = build_router(state);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("FoodApp relay listening on {}", addr);
    tracing::info!("Forwarding restaurant information to {}", config.downstream_url);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| RelayError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("FoodApp relay shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::RestaurantProfile;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
        Json,
    };
    use serde_json::{json, Value};
    use std::sync::Mutex;
    use tower::util::ServiceExt;

    type Received = Arc<Mutex<Vec<Value>>>;

    async fn spawn(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}", addr)
    }

    /// Downstream that records bodies and answers with `status`
    async fn spawn_downstream(status: StatusCode) -> (String, Received) {
        let received: Received = Arc::default();
        let sink = Arc::clone(&received);
        let router = Router::new().route(
            "/dishes",
            post(move |Json(body): Json<Value>| {
                let sink = Arc::clone(&sink);
                async move {
                    sink.lock().unwrap().push(body);
                    (status, Json(json!({ "ok": status.is_success() })))
                }
            }),
        );
        let base = spawn(router).await;
        (format!("{}/dishes", base), received)
    }

    fn test_app(downstream_url: &str) -> Router {
        let config = RelayConfig {
            downstream_url: downstream_url.to_string(),
            request_timeout_secs: 5,
            ..Default::default()
        };
        build_router(RelayState::new(config).unwrap())
    }

    fn post_restaurant(body: impl Into<Body>) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/restaurants")
            .header("Content-Type", "application/json")
            .body(body.into())
            .unwrap()
    }

    async fn read_json(response: axum::response::Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health_live() {
        let app = test_app("http://127.0.0.1:9/dishes");

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health/live")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health_full() {
        let app = test_app("http://downstream.test/dishes");

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = read_json(response).await;
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["downstream_url"], "http://downstream.test/dishes");
    }

    #[tokio::test]
    async fn test_forwards_body_unchanged() {
        let (downstream, received) = spawn_downstream(StatusCode::CREATED).await;
        let app = test_app(&downstream);

        let profile = serde_json::to_value(RestaurantProfile::default()).unwrap();
        let response = app
            .oneshot(post_restaurant(profile.to_string()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            read_json(response).await,
            json!({ "message": SUCCESS_MESSAGE })
        );
        assert_eq!(received.lock().unwrap().as_slice(), &[profile]);
    }

    #[tokio::test]
    async fn test_downstream_error_status() {
        let (downstream, received) = spawn_downstream(StatusCode::BAD_GATEWAY).await;
        let app = test_app(&downstream);

        let response = app
            .oneshot(post_restaurant(r#"{"restaurantName": "X"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = read_json(response).await;
        assert_eq!(body["message"], FAILURE_MESSAGE);
        assert!(body["request_id"].is_string());
        assert_eq!(received.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_downstream_unreachable() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let app = test_app(&format!("http://{}/dishes", addr));
        let response = app
            .oneshot(post_restaurant(r#"{"restaurantName": "X"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(read_json(response).await["message"], FAILURE_MESSAGE);
    }

    #[tokio::test]
    async fn test_invalid_json_is_500() {
        let (downstream, received) = spawn_downstream(StatusCode::OK).await;
        let app = test_app(&downstream);

        let response = app.oneshot(post_restaurant("not json")).await.unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(read_json(response).await["message"], FAILURE_MESSAGE);
        assert!(received.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_client_round_trip() {
        let (downstream, _received) = spawn_downstream(StatusCode::OK).await;
        let relay = spawn(test_app(&downstream)).await;

        let client = RelayClient::new(format!("{}/", relay));
        let message = client
            .save_restaurant(&RestaurantProfile::default())
            .await
            .unwrap();
        assert_eq!(message, SUCCESS_MESSAGE);
    }

    #[tokio::test]
    async fn test_client_reports_failure() {
        let (downstream, _received) = spawn_downstream(StatusCode::INTERNAL_SERVER_ERROR).await;
        let relay = spawn(test_app(&downstream)).await;

        let result = RelayClient::new(relay)
            .save_restaurant(&RestaurantProfile::default())
            .await;
        match result {
            Err(crate::catalog::CatalogError::Save(detail)) => {
                assert!(detail.contains(FAILURE_MESSAGE))
            }
            other => panic!("expected save error, got {:?}", other),
        }
    }
}
