//! AI agent client
//!
//! Unrecognized chat text is handed to an external agent webhook which answers
//! with `{"reply": "..."}`.

use reqwest::Client;
use std::time::Duration;
use tracing::{error, info};

use crate::config::RelayConfig;
use crate::error::RelayError;
use crate::models::{AgentReply, InboundMessage};
use crate::Result;

/// Reply sent when the agent cannot be reached or answers nothing usable.
pub const AGENT_FAILURE_REPLY: &str = "⚠ Error: Gagal menghubungi AI agent.";

pub struct AgentClient {
    client: Client,
    url: String,
}

impl AgentClient {
    pub fn new(config: &RelayConfig) -> Result<Self> {
        let client = Client::builder()
            .pool_idle_timeout(Duration::from_secs(90))
            .pool_max_idle_per_host(8)
            .timeout(config.http_timeout)
            .build()?;

        Ok(Self {
            client,
            url: config.ai_agent_url.clone(),
        })
    }

    /// Forward the inbound envelope and return the agent's reply text.
    pub async fn forward(&self, message: &InboundMessage) -> Result<String> {
        info!(message_id = %message.message.id, "Forwarding message to AI agent");

        let response = self
            .client
            .post(&self.url)
            .json(message)
            .send()
            .await
            .map_err(|e| {
                error!("AI agent request failed: {}", e);
                RelayError::AgentError(format!("request failed: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            error!("AI agent error response ({}): {}", status, error_text);
            return Err(RelayError::AgentError(format!(
                "agent returned {}: {}",
                status, error_text
            )));
        }

        let agent_reply: AgentReply = response.json().await.map_err(|e| {
            error!("Failed to parse AI agent response: {}", e);
            RelayError::AgentError(format!("parse error: {}", e))
        })?;

        agent_reply
            .reply
            .filter(|reply| !reply.trim().is_empty())
            .ok_or_else(|| RelayError::AgentError("empty reply from AI agent".to_string()))
    }
}
