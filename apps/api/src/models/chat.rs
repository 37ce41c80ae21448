use chrono::Local;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Coach,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: u32,
    pub role: ChatRole,
    pub text: String,
    pub timestamp: String,
}

impl ChatMessage {
    /// Builds a message stamped with the local wall-clock time (`HH:MM`).
    pub fn now(id: u32, role: ChatRole, text: impl Into<String>) -> Self {
        Self {
            id,
            role,
            text: text.into(),
            timestamp: Local::now().format("%H:%M").to_string(),
        }
    }
}
