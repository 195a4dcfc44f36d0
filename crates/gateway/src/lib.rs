//! HTTP API gateway for weatherwear.
//!
//! Exposes `POST /api/agent`, which runs one orchestration loop per request,
//! and `GET /health`.
//!
//! Built on Axum for async HTTP.

use axum::extract::DefaultBodyLimit;
use axum::{
    Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;
use tracing::{error, info};

use weatherwear_agent::{AgentError, AgentLoop};
use weatherwear_config::AppConfig;
use weatherwear_tools::ToolExecutor;

/// Request bodies above this size are rejected before reaching a handler.
const BODY_LIMIT: usize = 1024 * 1024;

/// Shared application state for the gateway.
#[derive(Clone)]
pub struct GatewayState {
    pub agent: Arc<AgentLoop>,
}

/// Failures while serving.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        source: std::io::Error,
    },

    #[error("Server error: {0}")]
    Serve(#[from] std::io::Error),
}

/// Wire the provider, search client and tools described by `config` into an agent.
pub fn build_agent(config: &AppConfig) -> AgentLoop {
    let provider = weatherwear_providers::chat_provider(&config.chat);
    let search = weatherwear_providers::search_client(&config.search);
    let tools = Arc::new(ToolExecutor::new(search));

    AgentLoop::new(
        provider,
        tools,
        &config.chat.model,
        config.chat.temperature,
    )
    .with_max_tokens(config.chat.max_tokens)
    .with_max_tool_rounds(config.agent.max_tool_rounds)
}

/// Build the Axum router with all gateway routes.
pub fn build_router(state: GatewayState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/api/agent", post(agent_handler))
        .layer(DefaultBodyLimit::max(BODY_LIMIT))
        .layer(tower_http::trace::TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the gateway HTTP server.
///
/// The agent and its HTTP clients are built once and shared by every request.
pub async fn start(config: AppConfig) -> Result<(), GatewayError> {
    let addr = format!("{}:{}", config.gateway.host, config.gateway.port);

    let agent = build_agent(&config);
    info!(
        provider = agent.provider_name(),
        model = agent.model(),
        chat_key = config.has_chat_key(),
        search_key = config.has_search_key(),
        "Agent ready"
    );

    let app = build_router(GatewayState {
        agent: Arc::new(agent),
    });

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|source| GatewayError::Bind {
            addr: addr.clone(),
            source,
        })?;
    info!(addr = %addr, "Gateway listening");
    axum::serve(listener, app).await?;

    Ok(())
}

// --- Handlers ---

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// The body of `POST /api/agent`. A missing or `null` message is an empty query.
#[derive(Debug, Deserialize)]
pub struct AgentRequest {
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AgentResponse {
    pub message: String,
}

/// An agent failure rendered as `500 {"error": ...}`.
struct AgentFailure(AgentError);

impl IntoResponse for AgentFailure {
    fn into_response(self) -> Response {
        let body = serde_json::json!({ "error": self.0.to_string() });
        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}

async fn agent_handler(
    State(state): State<GatewayState>,
    Json(payload): Json<AgentRequest>,
) -> Result<Json<AgentResponse>, AgentFailure> {
    let message = payload.message.unwrap_or_default();
    info!(message_len = message.len(), "Agent request received");

    match state.agent.run(&message).await {
        Ok(message) => Ok(Json(AgentResponse { message })),
        Err(e) => {
            error!(error = %e, "Agent processing failed");
            Err(AgentFailure(e))
        }
    }
}
