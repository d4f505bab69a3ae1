//! Router assembly and server startup.

use {
    axum::{
        Json, Router,
        routing::{get, post},
    },
    tower_http::{
        cors::{Any, CorsLayer},
        trace::TraceLayer,
    },
    tracing::info,
};

use devdict_config::DevdictConfig;

use crate::{a2a, services::GatewayServices, telex_routes};

/// Build the gateway router (shared between production startup and tests).
pub fn build_app(services: GatewayServices) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/a2a/agent/devdictionary", post(a2a::a2a_handler))
        .route("/a2a/health", get(a2a_health_handler))
        .route("/telex/webhook", post(telex_routes::webhook_handler))
        .route("/telex/health", get(telex_health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(services)
}

/// Start the gateway HTTP server and serve until shutdown.
pub async fn start_gateway(config: &DevdictConfig) -> anyhow::Result<()> {
    let services = GatewayServices::live(&config.telex);
    let app = build_app(services);

    let addr = format!("{}:{}", config.server.bind, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(%addr, "devdict gateway listening");

    axum::serve(listener, app).await?;
    Ok(())
}

// ── Health ───────────────────────────────────────────────────────────────────

fn unix_now() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}

async fn a2a_health_handler() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "devdict a2a agent",
        "protocol": "JSON-RPC 2.0",
        "timestamp": unix_now(),
    }))
}

async fn telex_health_handler() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "devdict bot",
        "timestamp": unix_now(),
    }))
}
