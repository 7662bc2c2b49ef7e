//! HTTP server exposing the emotion detector.
//!
//! Thin plumbing around [`EmotionClient`]: a plain-text endpoint kept
//! wire-compatible with the original service, a JSON variant, a static
//! landing page and a health check. All state lives in [`ServerState`];
//! nothing is shared between requests beyond the client itself.

use crate::classify::ClassificationResult;
use crate::classify::client::EmotionClient;
use crate::config::ServerConfig;
use crate::error::AppError;
use crate::format;
use axum::{
    extract::{Query, State},
    response::Html,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

/// Landing page with the analysis form.
const INDEX_HTML: &str = include_str!("../../assets/index.html");

/// Shared server state
#[derive(Clone)]
pub struct ServerState {
    client: Arc<EmotionClient>,
}

impl ServerState {
    pub fn new(client: EmotionClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }
}

/// Build the application router.
pub fn router(state: ServerState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Landing page
        .route("/", get(index))
        // Plain-text endpoint, compatible with the original service
        .route("/emotionDetector", get(emotion_detector))
        // Structured variant of the same call
        .route("/api/emotion", get(emotion_json))
        // Health check
        .route("/api/health", get(health_check))
        .layer(cors)
        .with_state(state)
}

/// Build the classifier client and serve until shutdown.
pub async fn start(config: ServerConfig) -> Result<(), AppError> {
    let client = EmotionClient::new(config.client)
        .map_err(|e| AppError::config(format!("failed to build HTTP client: {e}")))?;
    let app = router(ServerState::new(client));

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    log::info!("[emotion_server] Starting on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

// --- Request/response types ---

#[derive(Debug, Deserialize)]
struct DetectorQuery {
    /// Missing parameter is treated the same as empty input.
    #[serde(rename = "textToAnalyze", default)]
    text_to_analyze: Option<String>,
}

#[derive(Serialize)]
struct HealthResponse {
    ok: bool,
    version: &'static str,
}

// --- Handlers ---

async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

async fn emotion_detector(
    State(state): State<ServerState>,
    Query(query): Query<DetectorQuery>,
) -> String {
    let text = query.text_to_analyze.unwrap_or_default();
    let result = state.client.detect(&text).await;

    match format::render(&result) {
        Ok(summary) => summary,
        Err(err) => {
            log::info!("[emotion_server] {err}");
            err.user_message().to_owned()
        }
    }
}

async fn emotion_json(
    State(state): State<ServerState>,
    Query(query): Query<DetectorQuery>,
) -> Json<ClassificationResult> {
    let text = query.text_to_analyze.unwrap_or_default();
    Json(state.client.detect(&text).await)
}

async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        ok: true,
        version: env!("CARGO_PKG_VERSION"),
    })
}
