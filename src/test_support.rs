//! Throwaway HTTP servers standing in for the backend, AI agent and gateway.

use crate::config::RelayConfig;
use axum::Router;
use std::time::Duration;

/// Serve `router` on an ephemeral local port and return its base URL.
pub async fn spawn_mock(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind mock listener");
    let addr = listener.local_addr().expect("mock local_addr");
    tokio::spawn(async move {
        let _ = axum::serve(listener, router).await;
    });
    format!("http://{}", addr)
}

/// A base URL nothing is listening on.
pub fn dead_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind free port");
    let port = listener.local_addr().expect("local_addr").port();
    drop(listener);
    format!("http://127.0.0.1:{}", port)
}

pub fn test_config() -> RelayConfig {
    RelayConfig {
        banking_token: "test-token".to_string(),
        gateway_password: "test-pass".to_string(),
        banking_base_url: dead_url(),
        gateway_base_url: dead_url(),
        ai_agent_url: format!("{}/webhook/ai-agent", dead_url()),
        http_timeout: Duration::from_secs(2),
        ..RelayConfig::default()
    }
}
