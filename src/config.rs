//! Relay configuration
//!
//! Endpoints, credentials and reply branding are built once at startup and
//! injected into the clients.

use crate::error::RelayError;
use crate::Result;
use std::env;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct RelayConfig {
    /// Port the webhook listener binds on 0.0.0.0.
    pub port: u16,

    /// Banking backend base URL (the `/api/...` paths are appended).
    pub banking_base_url: String,

    /// Token sent with every banking query.
    pub banking_token: String,

    /// Gateway base URL (`/send/message` is appended).
    pub gateway_base_url: String,

    pub gateway_user: String,
    pub gateway_password: String,

    /// Full URL of the AI agent webhook.
    pub ai_agent_url: String,

    /// Timeout applied to every outbound call.
    pub http_timeout: Duration,

    /// Contact shown at the bottom of every templated reply.
    pub contact_name: String,
    pub contact_phone: String,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            port: 8080,
            banking_base_url: "https://tabungan.musahefiz.id".to_string(),
            banking_token: String::new(),
            gateway_base_url: "http://192.168.37.3:8000".to_string(),
            gateway_user: "admin".to_string(),
            gateway_password: String::new(),
            ai_agent_url: "http://localhost:5678/webhook/ai-agent".to_string(),
            http_timeout: Duration::from_secs(30),
            contact_name: "Nur Indah".to_string(),
            contact_phone: "081326825016".to_string(),
        }
    }
}

impl RelayConfig {
    /// Create configuration from environment variables.
    ///
    /// Required:
    /// - `RELAY_BANKING_TOKEN`
    /// - `RELAY_GATEWAY_PASSWORD`
    ///
    /// Optional (defaults in [`RelayConfig::default`]):
    /// - `RELAY_PORT` (falls back to `PORT`)
    /// - `RELAY_BANKING_BASE_URL`
    /// - `RELAY_GATEWAY_BASE_URL`
    /// - `RELAY_GATEWAY_USER`
    /// - `RELAY_AI_AGENT_URL`
    /// - `RELAY_HTTP_TIMEOUT_SECS`
    /// - `RELAY_CONTACT_NAME`
    /// - `RELAY_CONTACT_PHONE`
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary key lookup, so tests don't touch process env.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let banking_token = lookup("RELAY_BANKING_TOKEN")
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| RelayError::ConfigError("RELAY_BANKING_TOKEN not set".to_string()))?;

        let gateway_password = lookup("RELAY_GATEWAY_PASSWORD")
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| {
                RelayError::ConfigError("RELAY_GATEWAY_PASSWORD not set".to_string())
            })?;

        let port = match lookup("RELAY_PORT").or_else(|| lookup("PORT")) {
            Some(raw) => raw.trim().parse::<u16>().map_err(|e| {
                RelayError::ConfigError(format!("invalid port '{}': {}", raw, e))
            })?,
            None => defaults.port,
        };

        let http_timeout = match lookup("RELAY_HTTP_TIMEOUT_SECS") {
            Some(raw) => {
                let secs = raw.trim().parse::<u64>().map_err(|e| {
                    RelayError::ConfigError(format!("invalid timeout '{}': {}", raw, e))
                })?;
                if secs == 0 {
                    return Err(RelayError::ConfigError(
                        "RELAY_HTTP_TIMEOUT_SECS must be greater than zero".to_string(),
                    ));
                }
                Duration::from_secs(secs)
            }
            None => defaults.http_timeout,
        };

        Ok(Self {
            port,
            banking_base_url: trim_base(
                lookup("RELAY_BANKING_BASE_URL").unwrap_or(defaults.banking_base_url),
            ),
            banking_token,
            gateway_base_url: trim_base(
                lookup("RELAY_GATEWAY_BASE_URL").unwrap_or(defaults.gateway_base_url),
            ),
            gateway_user: lookup("RELAY_GATEWAY_USER").unwrap_or(defaults.gateway_user),
            gateway_password,
            ai_agent_url: lookup("RELAY_AI_AGENT_URL").unwrap_or(defaults.ai_agent_url),
            http_timeout,
            contact_name: lookup("RELAY_CONTACT_NAME").unwrap_or(defaults.contact_name),
            contact_phone: lookup("RELAY_CONTACT_PHONE").unwrap_or(defaults.contact_phone),
        })
    }
}

fn trim_base(url: String) -> String {
    url.trim().trim_end_matches('/').to_string()
}
