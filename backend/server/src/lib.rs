//! # Feedback Endpoint
//!
//! Receiving end of the classroom feedback form.
//!
//! ## Behaviour
//! - `POST /api/submit-feedback` takes any JSON body, logs it, answers `{"message":"Success"}`
//! - No schema checks, the form validates before sending
//! - No persistence, the log line is the only record of a submission
//! - A body that is not JSON is the only failure, answered with `400 {"detail": ...}`
//! - `GET /health` for container probes
//!
//! ## Configuration
//! - `RUST_PORT`: listening port, default `8008`
//! - `RUST_LOG`: tracing filter, e.g. `RUST_LOG=info`
//!
//! ## Notes
//! The form is usually served from a different origin than this endpoint, so CORS allows any origin
//! to post JSON here.
//!
//! Enable the `verbose` feature to pretty print every payload on stdout.
//!
//! ```sh
//! RUST_LOG=info cargo run -p server --features verbose
//! ```
use std::{sync::Arc, time::Duration};

use axum::{
    Router,
    http::{Method, header::CONTENT_TYPE},
    routing::{get, post},
};

use signal::{
    ctrl_c,
    unix::{SignalKind, signal},
};
use tokio::{net::TcpListener, signal};
use tower_http::cors::{Any, CorsLayer};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

pub mod config;
pub mod error;
pub mod routes;
pub mod state;

use payloads::{HEALTH_PATH, SUBMIT_PATH};
use routes::{health_handler, submit_feedback_handler};
use state::State;

pub async fn start_server() -> anyhow::Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    info!("Initializing state...");
    let state = State::new()?;

    info!("Starting server...");

    let address = format!("0.0.0.0:{}", state.config.port);
    info!("Binding to {address}");

    let listener = TcpListener::bind(&address).await?;
    info!("Server running on {address}");

    axum::serve(listener, app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutting down...");

    Ok(())
}

pub fn app(state: Arc<State>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::POST, Method::GET, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(60 * 60));

    Router::new()
        .route(SUBMIT_PATH, post(submit_feedback_handler))
        .route(HEALTH_PATH, get(health_handler))
        .layer(cors)
        .with_state(state)
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {e}");
            std::future::pending::<()>().await;
        }

        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install signal handler: {e}");
                std::future::pending::<()>().await;
            }
        }

        info!("Received terminate signal, shutting down");
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

#[cfg(test)]
mod tests {
    use reqwest::{Client, StatusCode};
    use serde_json::{Value, json};

    use super::*;
    use crate::config::Config;

    async fn spawn_app() -> String {
        let state = Arc::new(State {
            config: Config { port: 0 },
        });

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let address = listener.local_addr().unwrap();

        tokio::spawn(async move {
            axum::serve(listener, app(state)).await.unwrap();
        });

        format!("http://{address}")
    }

    #[tokio::test]
    async fn test_any_json_is_acknowledged() {
        let base = spawn_app().await;

        let response = Client::new()
            .post(format!("{base}{SUBMIT_PATH}"))
            .json(&json!({ "anything": [1, 2, 3] }))
            .send()
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body: Value = response.json().await.unwrap();
        assert_eq!(body, json!({ "message": "Success" }));
    }

    #[tokio::test]
    async fn test_malformed_body_has_detail() {
        let base = spawn_app().await;

        let response = Client::new()
            .post(format!("{base}{SUBMIT_PATH}"))
            .header(CONTENT_TYPE, "application/json")
            .body("{not json")
            .send()
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: Value = response.json().await.unwrap();
        let detail = body["detail"].as_str().unwrap();
        assert!(detail.starts_with("Malformed payload"));
    }

    #[tokio::test]
    async fn test_missing_content_type_rejected() {
        let base = spawn_app().await;

        let response = Client::new()
            .post(format!("{base}{SUBMIT_PATH}"))
            .body(r#"{"difficultPoint":"x"}"#)
            .send()
            .await
            .unwrap();

        assert!(response.status().is_client_error());
    }

    #[tokio::test]
    async fn test_health() {
        let base = spawn_app().await;

        let response = Client::new()
            .get(format!("{base}{HEALTH_PATH}"))
            .send()
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_preflight_allows_json_post() {
        let base = spawn_app().await;

        let response = Client::new()
            .request(Method::OPTIONS, format!("{base}{SUBMIT_PATH}"))
            .header("origin", "http://classroom.example")
            .header("access-control-request-method", "POST")
            .header("access-control-request-headers", "content-type")
            .send()
            .await
            .unwrap();

        assert!(response.status().is_success());
        assert_eq!(
            response
                .headers()
                .get("access-control-allow-origin")
                .and_then(|v| v.to_str().ok()),
            Some("*")
        );
    }
}
