//! HTTP responder.
//!
//! Exposes the two analysis endpoints over axum:
//! - `POST /api/analyze-url` — detailed report
//! - `POST /api/analyze` — summary
//!
//! Cross-origin access is open (any origin, GET/POST/OPTIONS, content-type
//! header); the CORS layer answers preflight requests itself. Failures map
//! to a status code and a message only.

mod handlers;

use axum::http::header::CONTENT_TYPE;
use axum::http::Method;
use axum::routing::post;
use axum::Router;
use log::info;
use tower_http::cors::{Any, CorsLayer};

use crate::config::Config;
use handlers::{analyze_handler, analyze_url_handler};

/// Shared state for the analysis handlers.
#[derive(Clone)]
pub struct AppState {
    /// Outbound HTTP client, configured once at startup with the
    /// User-Agent and fetch timeout.
    pub client: reqwest::Client,
}

/// Builds the application router.
///
/// Separate from [`run_server`] so tests can drive the router directly
/// without binding a socket.
pub fn app(client: reqwest::Client) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE]);

    Router::new()
        .route("/api/analyze-url", post(analyze_url_handler))
        .route("/api/analyze", post(analyze_handler))
        .layer(cors)
        .with_state(AppState { client })
}

/// Binds the configured address and serves the analysis endpoints.
///
/// # Errors
///
/// Returns an error if the listener cannot bind or the server fails.
pub async fn run_server(config: &Config, client: reqwest::Client) -> Result<(), anyhow::Error> {
    let listener = tokio::net::TcpListener::bind(&config.bind)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind server to {}: {}", config.bind, e))?;

    info!("page_insight listening on http://{}/", config.bind);
    info!("  - Detailed: POST http://{}/api/analyze-url", config.bind);
    info!("  - Summary:  POST http://{}/api/analyze", config.bind);

    axum::serve(listener, app(client))
        .await
        .map_err(|e| anyhow::anyhow!("Server error: {}", e))?;

    Ok(())
}
