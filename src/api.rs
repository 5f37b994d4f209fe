//! HTTP surface of the relay
//!
//! `POST /webhooks` receives gateway events, `GET /health` is for probes.

use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use tracing::{info, warn, Instrument};

use crate::dispatcher::Dispatcher;
use crate::models::InboundMessage;

/// =============================
/// API State
/// =============================

#[derive(Clone)]
pub struct ApiState {
    pub dispatcher: Arc<Dispatcher>,
}

/// =============================
/// Health Endpoint
/// =============================

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

/// =============================
/// Webhook Endpoint
/// =============================

async fn webhook_handler(
    State(state): State<ApiState>,
    body: Bytes,
) -> (StatusCode, String) {
    let request_id = uuid::Uuid::new_v4();
    let span = tracing::info_span!("webhook", %request_id);

    async move {
        info!(body = %String::from_utf8_lossy(&body), "Received request body");

        let inbound: InboundMessage = match serde_json::from_slice(&body) {
            Ok(msg) => msg,
            Err(e) => {
                warn!("Rejecting malformed webhook body: {}", e);
                return (StatusCode::BAD_REQUEST, e.to_string());
            }
        };

        info!(
            from = %inbound.from,
            message_id = %inbound.message.id,
            text = %inbound.message.text,
            "Received message"
        );

        state.dispatcher.process(&inbound).await;

        (StatusCode::OK, String::new())
    }
    .instrument(span)
    .await
}

/// =============================
/// Router
/// =============================

pub fn create_router(dispatcher: Arc<Dispatcher>) -> Router {
    let state = ApiState { dispatcher };

    Router::new()
        .route("/health", get(health))
        .route("/webhooks", post(webhook_handler))
        .with_state(state)
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
}

/// =============================
/// Server Startup
/// =============================

pub async fn start_server(
    dispatcher: Arc<Dispatcher>,
    port: u16,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let router = create_router(dispatcher);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port)).await?;

    info!("Webhook relay listening on http://0.0.0.0:{}", port);

    axum::serve(listener, router).await?;

    Ok(())
}
