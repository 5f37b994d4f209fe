//! Banking backend client
//!
//! Every lookup is a `{telp, token}` POST answered by a `{code, msg, ...}`
//! envelope. `code == 0` means the phone number is not registered and the
//! backend message is shown as-is. Failures become one of the fixed
//! user-facing error strings; nothing is retried.

mod queries;

pub use queries::{AccountQuery, BalanceQuery, HistoryQuery, InfoQuery};

use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, error, info, warn};

use crate::config::RelayConfig;
use crate::error::RelayError;
use crate::format::Contact;
use crate::models::AccountRequest;
use crate::Result;

/// Decoded backend answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup<R> {
    NotRegistered(String),
    Found(R),
}

/// Connection-pooled banking client
#[derive(Clone)]
pub struct BankingClient {
    client: Client,
    base_url: String,
    token: String,
    contact: Contact,
}

impl BankingClient {
    pub fn new(config: &RelayConfig) -> Result<Self> {
        let client = Client::builder()
            .pool_idle_timeout(Duration::from_secs(60))
            .pool_max_idle_per_host(8)
            .timeout(config.http_timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: config.banking_base_url.trim_end_matches('/').to_string(),
            token: config.banking_token.clone(),
            contact: Contact {
                name: config.contact_name.clone(),
                phone: config.contact_phone.clone(),
            },
        })
    }

    /// POST the lookup for `phone` and decode the envelope.
    pub async fn query<Q: AccountQuery>(&self, phone: &str) -> Result<Lookup<Q::Record>> {
        let url = format!("{}{}", self.base_url, Q::PATH);
        info!(query = Q::NAME, phone = %phone, "Querying banking backend");

        let response = self
            .client
            .post(&url)
            .json(&AccountRequest {
                telp: phone,
                token: &self.token,
            })
            .send()
            .await
            .map_err(RelayError::from_backend_send)?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(RelayError::from_backend_read)?;

        if !status.is_success() {
            warn!(query = Q::NAME, %status, "Banking backend returned non-success status");
        }

        debug!(
            query = Q::NAME,
            body = %String::from_utf8_lossy(&body),
            "Banking backend response"
        );

        decode_envelope::<Q>(&body)
    }

    /// Run a lookup and turn the outcome into the chat reply.
    pub async fn reply<Q: AccountQuery>(&self, phone: &str) -> String {
        match self.query::<Q>(phone).await {
            Ok(Lookup::NotRegistered(msg)) => {
                info!(query = Q::NAME, phone = %phone, "Phone not registered");
                msg
            }
            Ok(Lookup::Found(record)) => Q::render(&record, &self.contact),
            Err(e) => {
                error!(query = Q::NAME, "Banking lookup failed: {}", e);
                e.user_message().to_string()
            }
        }
    }

    pub async fn balance(&self, phone: &str) -> String {
        self.reply::<BalanceQuery>(phone).await
    }

    pub async fn history(&self, phone: &str) -> String {
        self.reply::<HistoryQuery>(phone).await
    }

    pub async fn info(&self, phone: &str) -> String {
        self.reply::<InfoQuery>(phone).await
    }
}

fn decode_envelope<Q: AccountQuery>(body: &[u8]) -> Result<Lookup<Q::Record>> {
    let envelope: Value = serde_json::from_slice(body)
        .map_err(|e| RelayError::UndecodableResponse(format!("invalid JSON: {}", e)))?;

    let code = envelope
        .get("code")
        .and_then(Value::as_i64)
        .ok_or_else(|| RelayError::UndecodableResponse("missing numeric 'code'".to_string()))?;

    if code == 0 {
        let msg = envelope
            .get("msg")
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|msg| !msg.is_empty())
            .ok_or_else(|| {
                RelayError::UndecodableResponse("'code' 0 without a 'msg'".to_string())
            })?;
        return Ok(Lookup::NotRegistered(msg.to_string()));
    }

    let record = match Q::RECORD_KEY.and_then(|key| envelope.get(key)) {
        Some(raw) if !raw.is_null() => serde_json::from_value(raw.clone()).map_err(|e| {
            RelayError::UndecodableResponse(format!("invalid '{}' record: {}", Q::NAME, e))
        })?,
        _ => Q::Record::default(),
    };

    Ok(Lookup::Found(record))
}
