//! Error types for the webhook relay

use thiserror::Error;

/// Result type alias for relay operations
pub type Result<T> = std::result::Result<T, RelayError>;

/// User-facing replies for backend failures.
pub const TIMEOUT_REPLY: &str =
    "⚠ Error: Connection to the server timed out. Please try again later.";
pub const CONNECTION_REPLY: &str =
    "⚠ Error: Unable to connect to the server. Please try again later.";
pub const UNREADABLE_REPLY: &str =
    "⚠ Error: Unable to read the server response. Please try again later.";
pub const UNDECODABLE_REPLY: &str =
    "⚠ Error: Unable to process the server response. Please try again later.";

#[derive(Error, Debug)]
pub enum RelayError {

    // =============================
    // Startup
    // =============================

    #[error("Configuration error: {0}")]
    ConfigError(String),

    // =============================
    // Banking backend
    // =============================

    #[error("Backend timed out: {0}")]
    BackendTimeout(String),

    #[error("Backend unreachable: {0}")]
    BackendUnreachable(String),

    #[error("Backend response unreadable: {0}")]
    UnreadableResponse(String),

    #[error("Backend response undecodable: {0}")]
    UndecodableResponse(String),

    // =============================
    // AI agent and gateway
    // =============================

    #[error("AI agent error: {0}")]
    AgentError(String),

    #[error("Gateway send error: {0}")]
    SendError(String),

    // =============================
    // External Library Conversions
    // =============================

    #[error("HTTP client error: {0}")]
    HttpError(#[from] reqwest::Error),
}

impl RelayError {
    /// Classify a failed send against the backend.
    pub fn from_backend_send(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            RelayError::BackendTimeout(e.to_string())
        } else {
            RelayError::BackendUnreachable(e.to_string())
        }
    }

    /// Classify a failed body read from the backend.
    pub fn from_backend_read(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            RelayError::BackendTimeout(e.to_string())
        } else {
            RelayError::UnreadableResponse(e.to_string())
        }
    }

    /// Text sent back to the chat when a backend lookup fails.
    pub fn user_message(&self) -> &'static str {
        match self {
            RelayError::BackendTimeout(_) => TIMEOUT_REPLY,
            RelayError::UnreadableResponse(_) => UNREADABLE_REPLY,
            RelayError::UndecodableResponse(_) => UNDECODABLE_REPLY,
            RelayError::HttpError(e) if e.is_timeout() => TIMEOUT_REPLY,
            _ => CONNECTION_REPLY,
        }
    }
}
