//! Message Repository Port
//!
//! Abstract interface for Message persistence operations.

use async_trait::async_trait;

use crate::domain::{errors::DomainError, Message, NewMessage};

/// Repository interface for Message entities
#[async_trait]
pub trait MessageRepository: Send + Sync {
    /// Store a new message and assign its id
    async fn add(&self, message: &NewMessage) -> Result<Message, DomainError>;

    /// Persist the sentiment of an existing message
    ///
    /// Fails with `NotFound` for an unknown id and with `Conflict` when the
    /// stored message already carries a sentiment.
    async fn update(&self, message: &Message) -> Result<Message, DomainError>;

    /// All messages, oldest first
    async fn find_all(&self) -> Result<Vec<Message>, DomainError>;

    /// Find a Message by ID
    async fn find_by_id(&self, id: i64) -> Result<Option<Message>, DomainError>;
}
