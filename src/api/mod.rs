//! Launch Dash HTTP API
//!
//! HTTP layer for the dashboard, built with Axum.
//!
//! # Endpoints
//!
//! ## Dashboard
//! - `GET /` - Dashboard page
//! - `GET /api/v1/layout` - Page description
//! - `POST /api/v1/callbacks` - Recompute charts after an input change
//!
//! ## Charts
//! - `GET /api/v1/charts/pie` - Success pie chart for a site
//! - `GET /api/v1/charts/scatter` - Payload scatter chart for a site and range
//! - `GET /api/v1/sites` - Launch sites and dataset summary
//!
//! ## Health
//! - `GET /health/live` - Liveness probe
//! - `GET /health/ready` - Readiness probe
//! - `GET /health` - Full health status
//!
//! # Example
//!
//! ```rust,ignore
//! use launch_dash::api::{serve, AppState};
//! use launch_dash::config::ServerConfig;
//! use launch_dash::data::load_csv;
//! use std::path::Path;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let dataset = load_csv(Path::new("spacex_launch_dash.csv"))?;
//!
//!     serve(AppState::new(dataset, ServerConfig::default())).await?;
//!     Ok(())
//! }
//! ```

pub mod dto;
pub mod error;
pub mod routes;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use state::AppState;

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Build the router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/layout", get(routes::dashboard::layout))
        .route("/callbacks", post(routes::callbacks::dispatch))
        .route("/charts/pie", get(routes::charts::pie))
        .route("/charts/scatter", get(routes::charts::scatter))
        .route("/sites", get(routes::sites::list_sites));

    let health_routes = Router::new()
        .route("/live", get(routes::health::liveness))
        .route("/ready", get(routes::health::readiness))
        .route("/", get(routes::health::full_health));

    let shared_state = Arc::new(state);

    Router::new()
        .route("/", get(routes::dashboard::index))
        .nest("/api/v1", api_routes)
        .nest("/health", health_routes)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(shared_state)
}

/// Start the dashboard server on the address held in the state's config
pub async fn serve(state: AppState) -> Result<(), ApiError> {
    let addr = state.config.addr();
    let router = build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Dashboard listening on http://{}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ApiError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("Dashboard shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
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
    use crate::config::ServerConfig;
    use crate::data::{LaunchDataset, LaunchRecord};
    use axum::{
        body::Body,
        http::{Request, StatusCode},
        response::Response,
    };
    use serde_json::Value;
    use tower::util::ServiceExt;

    fn create_test_app() -> Router {
        let dataset = LaunchDataset::new(vec![
            LaunchRecord::new("A", 500.0, 1, "FT"),
            LaunchRecord::new("A", 9000.0, 0, "Block 5"),
            LaunchRecord::new("B", 3000.0, 1, "FT"),
        ]);

        build_router(AppState::new(dataset, ServerConfig::default()))
    }

    async fn json_body(response: Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn post_json(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_health_live() {
        let response = create_test_app().oneshot(get_request("/health/live")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health_ready() {
        let response = create_test_app().oneshot(get_request("/health/ready")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health_full() {
        let response = create_test_app().oneshot(get_request("/health")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["records"], 3);
    }

    #[tokio::test]
    async fn test_index_page() {
        let response = create_test_app().oneshot(get_request("/")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let html = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(html.contains("/api/v1/callbacks"));
        // Responses older than the last one drawn for a chart are dropped.
        assert!(html.contains("if ((drawnSeq[id] || 0) > seq) continue;"));
    }

    #[tokio::test]
    async fn test_layout() {
        let response = create_test_app().oneshot(get_request("/api/v1/layout")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["title"], "SpaceX Launch Records Dashboard");

        let slider = body["children"]
            .as_array()
            .unwrap()
            .iter()
            .find(|c| c["id"] == "payload-slider")
            .unwrap();
        assert_eq!(slider["value"][0], 500.0);
        assert_eq!(slider["value"][1], 9000.0);
    }

    #[tokio::test]
    async fn test_callbacks_initial_load() {
        let response = create_test_app()
            .oneshot(post_json(
                "/api/v1/callbacks",
                r#"{"changed": [], "inputs": {"site-dropdown": "ALL", "payload-slider": [0, 10000]}}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        let outputs = body["outputs"].as_object().unwrap();
        assert_eq!(outputs.len(), 2);

        let scatter = &outputs["success-payload-scatter-chart"];
        let points: usize = scatter["data"]
            .as_array()
            .unwrap()
            .iter()
            .map(|t| t["x"].as_array().unwrap().len())
            .sum();
        assert_eq!(points, 3);
    }

    #[tokio::test]
    async fn test_callbacks_site_change() {
        let response = create_test_app()
            .oneshot(post_json(
                "/api/v1/callbacks",
                r#"{"changed": ["site-dropdown"], "inputs": {"site-dropdown": "A", "payload-slider": [0, 10000]}}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        let pie = &body["outputs"]["success-pie-chart"];
        assert_eq!(pie["data"][0]["labels"], serde_json::json!([0, 1]));
        assert_eq!(pie["data"][0]["values"], serde_json::json!([1, 1]));
        assert_eq!(
            pie["layout"]["title"]["text"],
            "Success vs Failure Launches at A"
        );
    }

    #[tokio::test]
    async fn test_callbacks_unknown_input() {
        let response = create_test_app()
            .oneshot(post_json(
                "/api/v1/callbacks",
                r#"{"changed": ["year-picker"], "inputs": {"site-dropdown": "ALL"}}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = json_body(response).await;
        assert_eq!(body["error"]["code"], "CALLBACK_ERROR");
    }

    #[tokio::test]
    async fn test_callbacks_invalid_json() {
        let response = create_test_app()
            .oneshot(post_json("/api/v1/callbacks", "not json"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = json_body(response).await;
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert!(body["request_id"].is_string());
    }

    #[tokio::test]
    async fn test_scatter_non_numeric_bound_is_json_error() {
        let response = create_test_app()
            .oneshot(get_request("/api/v1/charts/scatter?site=A&low=heavy&high=10000"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = json_body(response).await;
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert!(body["error"]["message"]
            .as_str()
            .unwrap()
            .starts_with("Validation error: Failed to deserialize query string"));
    }

    #[tokio::test]
    async fn test_pie_malformed_query_is_json_error() {
        let response = create_test_app()
            .oneshot(get_request("/api/v1/charts/pie?low=1e&site=A"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = json_body(response).await;
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_scatter_empty_selection() {
        let response = create_test_app()
            .oneshot(get_request("/api/v1/charts/scatter?site=B&low=0&high=2000"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert!(body["data"].as_array().unwrap().is_empty());
        assert_eq!(body["layout"]["title"]["text"], "Payload vs Success for B");
    }

    #[tokio::test]
    async fn test_pie_chart_all_sites() {
        let response = create_test_app()
            .oneshot(get_request("/api/v1/charts/pie"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["data"][0]["values"], serde_json::json!([1, 2]));
    }

    #[tokio::test]
    async fn test_sites() {
        let response = create_test_app().oneshot(get_request("/api/v1/sites")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["sites"], serde_json::json!(["A", "B"]));
        assert_eq!(body["total_records"], 3);
        assert_eq!(body["payload_bounds"], serde_json::json!([500.0, 9000.0]));
    }
}
