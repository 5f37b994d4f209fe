//! Command Classifier
//!
//! Maps the chat text onto the fixed command set:
//! - Balance: `saldo`, `ceksaldo`
//! - History: `mutasi`, `cekmutasi`
//! - Info: `help`, `bantuan`
//! - anything else is handed to the AI agent

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Balance,
    History,
    Info,
    Forward,
}

const BALANCE_KEYWORDS: &[&str] = &["saldo", "ceksaldo"];
const HISTORY_KEYWORDS: &[&str] = &["mutasi", "cekmutasi"];
const INFO_KEYWORDS: &[&str] = &["help", "bantuan"];

/// Command classifier
pub struct CommandClassifier;

impl CommandClassifier {
    /// Classify already-lowercased text. Only exact keyword matches count.
    pub fn classify(text: &str) -> Command {
        if BALANCE_KEYWORDS.contains(&text) {
            Command::Balance
        } else if HISTORY_KEYWORDS.contains(&text) {
            Command::History
        } else if INFO_KEYWORDS.contains(&text) {
            Command::Info
        } else {
            Command::Forward
        }
    }
}

/// Lowercase form used for matching, with surrounding whitespace dropped.
pub fn command_text(raw: &str) -> String {
    raw.trim().to_lowercase()
}
