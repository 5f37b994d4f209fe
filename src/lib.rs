//! Savings Account Webhook Relay
//!
//! Receives chat messages from a WhatsApp gateway and answers them:
//! - `saldo` / `mutasi` / `bantuan` are looked up on the savings backend
//! - anything else is passed to an AI agent
//! - the reply is posted back through the gateway
//!
//! FLOW:
//! WEBHOOK → CLASSIFY → (BANKING | AI AGENT) → SEND

pub mod agent_client;
pub mod api;
pub mod banking;
pub mod classifier;
pub mod config;
pub mod dispatcher;
pub mod error;
pub mod format;
pub mod identifier;
pub mod models;
pub mod sender;

#[cfg(test)]
mod test_support;

pub use error::Result;

// Re-export common types
pub use models::*;
pub use classifier::{Command, CommandClassifier};
pub use config::RelayConfig;
pub use dispatcher::Dispatcher;
