//! In-memory implementation of MessageRepository
//!
//! Used by tests and for running the API without a database. Data is lost
//! on restart.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use moodboard::{DomainError, Message, MessageRepository, NewMessage};

#[derive(Debug, Default)]
struct Inner {
    messages: Vec<Message>,
    last_id: i64,
}

/// In-memory message store
#[derive(Debug, Clone, Default)]
pub struct InMemoryMessageRepository {
    inner: Arc<RwLock<Inner>>,
}

impl InMemoryMessageRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored messages
    pub async fn len(&self) -> usize {
        self.inner.read().await.messages.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl MessageRepository for InMemoryMessageRepository {
    async fn add(&self, message: &NewMessage) -> Result<Message, DomainError> {
        let mut inner = self.inner.write().await;
        inner.last_id += 1;
        let stored = Message::from_new(inner.last_id, message.clone());
        inner.messages.push(stored.clone());
        Ok(stored)
    }

    async fn update(&self, message: &Message) -> Result<Message, DomainError> {
        let mut inner = self.inner.write().await;
        let stored = inner
            .messages
            .iter_mut()
            .find(|m| m.id == message.id)
            .ok_or_else(|| DomainError::not_found("Message", message.id))?;

        let Some(sentiment) = message.sentiment.clone() else {
            return Ok(stored.clone());
        };

        *stored = stored.clone().with_sentiment(sentiment)?;
        Ok(stored.clone())
    }

    async fn find_all(&self) -> Result<Vec<Message>, DomainError> {
        let mut messages = self.inner.read().await.messages.clone();
        // Stable: ties keep insertion (id) order
        messages.sort_by_key(|m| m.sent_at);
        Ok(messages)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Message>, DomainError> {
        let inner = self.inner.read().await;
        Ok(inner.messages.iter().find(|m| m.id == id).cloned())
    }
}
