//! Outbound reply sender
//!
//! Replies go back through the gateway's `/send/message` API. Delivery is
//! fire-and-forget from the webhook's point of view: errors are returned so
//! the caller can log them, never retried.

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::{error, info};

use crate::config::RelayConfig;
use crate::error::RelayError;
use crate::identifier::normalize_sender;
use crate::models::OutboundMessage;
use crate::Result;

/// Transport for chat replies
#[async_trait]
pub trait ReplySender: Send + Sync {
    async fn send(&self, message: &OutboundMessage) -> Result<()>;
}

pub struct GatewaySender {
    client: Client,
    url: String,
    user: String,
    password: String,
}

impl GatewaySender {
    pub fn new(config: &RelayConfig) -> Result<Self> {
        let client = Client::builder()
            .pool_idle_timeout(Duration::from_secs(60))
            .pool_max_idle_per_host(8)
            .timeout(config.http_timeout)
            .build()?;

        Ok(Self {
            client,
            url: format!(
                "{}/send/message",
                config.gateway_base_url.trim_end_matches('/')
            ),
            user: config.gateway_user.clone(),
            password: config.gateway_password.clone(),
        })
    }
}

#[async_trait]
impl ReplySender for GatewaySender {
    async fn send(&self, message: &OutboundMessage) -> Result<()> {
        let payload = OutboundMessage {
            phone: normalize_sender(&message.phone),
            ..message.clone()
        };

        info!(
            phone = %payload.phone,
            reply_message_id = ?payload.reply_message_id,
            "Sending reply through gateway"
        );

        let response = self
            .client
            .post(&self.url)
            .basic_auth(&self.user, Some(&self.password))
            .json(&payload)
            .send()
            .await
            .map_err(|e| {
                error!("Gateway send failed: {}", e);
                RelayError::SendError(e.to_string())
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            error!("Failed to read gateway response: {}", e);
            RelayError::SendError(e.to_string())
        })?;

        info!(%status, body = %body, "Gateway response");

        if !status.is_success() {
            return Err(RelayError::SendError(format!(
                "gateway returned {}: {}",
                status, body
            )));
        }

        Ok(())
    }
}
