//! Wire models for the gateway, banking backend and AI agent

use serde::{Deserialize, Serialize};

//
// ================= Gateway =================
//

/// Envelope the gateway posts to `/webhooks`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct InboundMessage {
    pub from: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub message: MessageBody,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MessageBody {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub text: String,
}

/// The gateway sends `null` for fields it has no value for.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl InboundMessage {
    pub fn new(from: impl Into<String>, id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            message: MessageBody {
                id: id.into(),
                text: text.into(),
            },
        }
    }
}

/// Body of a `/send/message` call.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OutboundMessage {
    pub phone: String,
    pub message: String,
    #[serde(
        default,
        serialize_with = "empty_when_none",
        deserialize_with = "none_when_empty"
    )]
    pub reply_message_id: Option<String>,
}

fn empty_when_none<S>(value: &Option<String>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_str(value.as_deref().unwrap_or(""))
}

fn none_when_empty<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.filter(|v| !v.is_empty()))
}

//
// ================= Banking backend =================
//

/// Query body shared by every banking endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct AccountRequest<'a> {
    pub telp: &'a str,
    pub token: &'a str,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct AccountBalanceRecord {
    #[serde(default)]
    pub nama: String,
    #[serde(default)]
    pub saldo: String,
    #[serde(default)]
    pub updated: String,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct AccountHistoryRecord {
    #[serde(default)]
    pub nama: String,
    #[serde(default)]
    pub mutasi: Vec<HistoryEntry>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct HistoryEntry {
    #[serde(default)]
    pub tgl: String,
    #[serde(default)]
    pub total: String,
    #[serde(default)]
    pub jenis: String,
    #[serde(default)]
    pub keterangan: String,
}

/// The info endpoint carries nothing beyond `code` and `msg`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct AccountInfoRecord {}

//
// ================= AI agent =================
//

#[derive(Debug, Clone, Deserialize)]
pub struct AgentReply {
    #[serde(default)]
    pub reply: Option<String>,
}
