//! Prototype session persistence: one login flag, profile and chat log, plus the
//! student's checklist. Values are JSON documents stored under fixed keys.
//!
//! Absent or unreadable values fall back to defaults and are never surfaced as
//! errors. Only I/O failures propagate.

pub mod checklist;
pub mod handlers;
pub mod store;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::models::chat::{ChatMessage, ChatRole};
use crate::models::checklist::ChecklistItem;
use crate::models::profile::UserProfile;

pub use store::{FileSessionStore, InMemorySessionStore};

pub const SESSION_KEY: &str = "nole-session";
pub const CHECKLIST_KEY: &str = "nole-checklist";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid storage key '{0}'")]
    InvalidKey(String),

    #[error("could not encode value: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Key-value storage for raw JSON documents.
#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn load(&self, key: &str) -> Result<Option<String>, StoreError>;
    async fn save(&self, key: &str, value: &str) -> Result<(), StoreError>;
    async fn remove(&self, key: &str) -> Result<(), StoreError>;
}

/// Decodes the value under `key`. Corrupt documents read as absent.
pub async fn load_json<T: DeserializeOwned>(
    store: &dyn SessionStore,
    key: &str,
) -> Result<Option<T>, StoreError> {
    let Some(raw) = store.load(key).await? else {
        return Ok(None);
    };
    match serde_json::from_str(&raw) {
        Ok(value) => Ok(Some(value)),
        Err(e) => {
            warn!("discarding unreadable value under '{key}': {e}");
            Ok(None)
        }
    }
}

pub async fn save_json<T: Serialize>(
    store: &dyn SessionStore,
    key: &str,
    value: &T,
) -> Result<(), StoreError> {
    let raw = serde_json::to_string(value)?;
    store.save(key, &raw).await
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionState {
    pub is_logged_in: bool,
    pub user_profile: Option<UserProfile>,
    pub chat_messages: Vec<ChatMessage>,
}

impl SessionState {
    /// A fresh session for `profile` with an empty chat log.
    pub fn logged_in(profile: UserProfile) -> Self {
        Self {
            is_logged_in: true,
            user_profile: Some(profile),
            chat_messages: Vec::new(),
        }
    }

    /// Appends a message numbered after the current log.
    pub fn push_message(&mut self, role: ChatRole, text: impl Into<String>) -> &ChatMessage {
        let id = self.chat_messages.len() as u32 + 1;
        self.chat_messages.push(ChatMessage::now(id, role, text));
        &self.chat_messages[self.chat_messages.len() - 1]
    }

    pub fn clear_chat(&mut self) {
        self.chat_messages.clear();
    }

    /// Skills of the logged-in profile, if any were given.
    pub fn profile_skills(&self) -> Option<&[String]> {
        self.user_profile
            .as_ref()
            .map(|p| p.skills.as_slice())
            .filter(|skills| !skills.is_empty())
    }
}

pub async fn load_session(store: &dyn SessionStore) -> Result<SessionState, StoreError> {
    Ok(load_json(store, SESSION_KEY).await?.unwrap_or_default())
}

pub async fn save_session(store: &dyn SessionStore, session: &SessionState) -> Result<(), StoreError> {
    save_json(store, SESSION_KEY, session).await
}

/// The stored checklist, or `seed()` when nothing readable is stored.
pub async fn load_checklist(
    store: &dyn SessionStore,
    seed: impl FnOnce() -> Vec<ChecklistItem>,
) -> Result<Vec<ChecklistItem>, StoreError> {
    Ok(load_json(store, CHECKLIST_KEY).await?.unwrap_or_else(seed))
}

pub async fn save_checklist(
    store: &dyn SessionStore,
    items: &[ChecklistItem],
) -> Result<(), StoreError> {
    save_json(store, CHECKLIST_KEY, &items).await
}
