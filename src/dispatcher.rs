//! Command dispatcher
//!
//! INBOUND → CLASSIFY → (BANKING | AI AGENT) → SEND
//!
//! Exactly one reply is handed to the sender per inbound message.

use std::sync::Arc;
use tracing::{error, info, warn};

use crate::agent_client::{AgentClient, AGENT_FAILURE_REPLY};
use crate::banking::BankingClient;
use crate::classifier::{command_text, Command, CommandClassifier};
use crate::config::RelayConfig;
use crate::identifier::normalize_sender;
use crate::models::{InboundMessage, OutboundMessage};
use crate::sender::{GatewaySender, ReplySender};
use crate::Result;

pub struct Dispatcher {
    banking: BankingClient,
    agent: AgentClient,
    sender: Arc<dyn ReplySender>,
}

impl Dispatcher {
    pub fn new(banking: BankingClient, agent: AgentClient, sender: Arc<dyn ReplySender>) -> Self {
        Self {
            banking,
            agent,
            sender,
        }
    }

    /// Wire up the production clients from configuration.
    pub fn from_config(config: &RelayConfig) -> Result<Self> {
        Ok(Self::new(
            BankingClient::new(config)?,
            AgentClient::new(config)?,
            Arc::new(GatewaySender::new(config)?),
        ))
    }

    /// Compute the reply for `inbound` and send it back to the chat.
    pub async fn process(&self, inbound: &InboundMessage) {
        let clientno = normalize_sender(&inbound.from);
        let text = command_text(&inbound.message.text);

        info!(
            clientno = %clientno,
            message_id = %inbound.message.id,
            "Processing message"
        );

        let reply = self.reply_for(&clientno, &text, inbound).await;

        let outbound = OutboundMessage {
            phone: inbound.from.clone(),
            message: reply,
            reply_message_id: Some(inbound.message.id.clone()).filter(|id| !id.is_empty()),
        };

        if let Err(e) = self.sender.send(&outbound).await {
            error!(clientno = %clientno, "Failed to deliver reply: {}", e);
        }
    }

    /// Pick the reply for already-lowercased `text`. Never empty.
    pub async fn reply_for(&self, clientno: &str, text: &str, inbound: &InboundMessage) -> String {
        let command = CommandClassifier::classify(text);
        info!(?command, "Classified message");

        match command {
            Command::Balance => self.banking.balance(clientno).await,
            Command::History => self.banking.history(clientno).await,
            Command::Info => self.banking.info(clientno).await,
            Command::Forward => match self.agent.forward(inbound).await {
                Ok(reply) => reply,
                Err(e) => {
                    warn!("AI agent unavailable: {}", e);
                    AGENT_FAILURE_REPLY.to_string()
                }
            },
        }
    }
}
