//! Conversational session store.
//!
//! Each (agent, user, session) triple owns its own message history. The
//! store is an explicit injected dependency with a defined lifecycle
//! (create, read, append, expire) rather than state hidden inside an agent
//! runtime. Concurrent turns against the same key have undefined ordering;
//! the store only guarantees map consistency.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::llm_client::ChatMessage;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SessionKey {
    pub app_name: String,
    pub user_id: String,
    pub session_id: String,
}

impl SessionKey {
    pub fn new(
        app_name: impl Into<String>,
        user_id: impl Into<String>,
        session_id: impl Into<String>,
    ) -> Self {
        SessionKey {
            app_name: app_name.into(),
            user_id: user_id.into(),
            session_id: session_id.into(),
        }
    }
}

#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Creates the session if absent. Returns false when it already existed;
    /// an existing session is never touched.
    async fn create(&self, key: &SessionKey) -> bool;

    /// Message history for the session, None when it does not exist.
    async fn read(&self, key: &SessionKey) -> Option<Vec<ChatMessage>>;

    /// Appends messages, creating the session when absent.
    async fn append(&self, key: &SessionKey, messages: Vec<ChatMessage>);

    /// Removes the session. Returns whether it existed.
    async fn expire(&self, key: &SessionKey) -> bool;
}

/// In-memory session store; state lives for the process lifetime.
#[derive(Default)]
pub struct InMemorySessionStore {
    inner: RwLock<HashMap<SessionKey, Vec<ChatMessage>>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn create(&self, key: &SessionKey) -> bool {
        let mut inner = self.inner.write().await;
        if inner.contains_key(key) {
            return false;
        }
        inner.insert(key.clone(), Vec::new());
        true
    }

    async fn read(&self, key: &SessionKey) -> Option<Vec<ChatMessage>> {
        self.inner.read().await.get(key).cloned()
    }

    async fn append(&self, key: &SessionKey, messages: Vec<ChatMessage>) {
        let mut inner = self.inner.write().await;
        inner.entry(key.clone()).or_default().extend(messages);
    }

    async fn expire(&self, key: &SessionKey) -> bool {
        self.inner.write().await.remove(key).is_some()
    }
}
