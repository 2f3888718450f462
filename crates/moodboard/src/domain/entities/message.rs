//! Message Entity
//!
//! A single post on the board plus its optional sentiment annotation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::errors::DomainError;
use crate::domain::value_objects::Sentiment;

/// Maximum nickname length in characters
pub const MAX_NICKNAME_LEN: usize = 100;

/// Maximum content length in characters
pub const MAX_CONTENT_LEN: usize = 1000;

/// A validated message that has not been stored yet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewMessage {
    pub nickname: String,
    pub content: String,
    pub sent_at: DateTime<Utc>,
}

impl NewMessage {
    /// Validate input and stamp the current time
    pub fn new(
        nickname: impl Into<String>,
        content: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let nickname = nickname.into();
        let content = content.into();

        require_text("nickname", &nickname, MAX_NICKNAME_LEN)?;
        require_text("content", &content, MAX_CONTENT_LEN)?;

        Ok(Self {
            nickname,
            content,
            sent_at: Utc::now(),
        })
    }

    /// Set timestamp
    pub fn with_sent_at(mut self, sent_at: DateTime<Utc>) -> Self {
        self.sent_at = sent_at;
        self
    }
}

fn require_text(field: &str, value: &str, max_len: usize) -> Result<(), DomainError> {
    if value.is_empty() {
        return Err(DomainError::Validation(format!("{field} must not be empty")));
    }
    let len = value.chars().count();
    if len > max_len {
        return Err(DomainError::Validation(format!(
            "{field} must be at most {max_len} characters (got {len})"
        )));
    }
    Ok(())
}

/// A stored message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    /// Store-assigned, never reused
    pub id: i64,
    pub nickname: String,
    pub content: String,
    pub sent_at: DateTime<Utc>,
    /// Set at most once after creation
    pub sentiment: Option<Sentiment>,
}

impl Message {
    /// Build the stored form of a new message
    pub fn from_new(id: i64, message: NewMessage) -> Self {
        Self {
            id,
            nickname: message.nickname,
            content: message.content,
            sent_at: message.sent_at,
            sentiment: None,
        }
    }

    pub fn is_annotated(&self) -> bool {
        self.sentiment.is_some()
    }

    /// Attach a sentiment; a message can only be annotated once
    pub fn with_sentiment(self, sentiment: Sentiment) -> Result<Self, DomainError> {
        if self.is_annotated() {
            return Err(DomainError::Conflict(format!(
                "message {} already has a sentiment",
                self.id
            )));
        }
        Ok(Self {
            sentiment: Some(sentiment),
            ..self
        })
    }

    pub fn sentiment_label(&self) -> Option<&str> {
        self.sentiment.as_ref().map(|s| s.label.as_str())
    }

    pub fn sentiment_score(&self) -> Option<f64> {
        self.sentiment.as_ref().and_then(|s| s.score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_message_stamps_now() {
        let before = Utc::now();
        let message = NewMessage::new("ayse", "merhaba").unwrap();
        let after = Utc::now();

        assert_eq!(message.nickname, "ayse");
        assert_eq!(message.content, "merhaba");
        assert!(message.sent_at >= before && message.sent_at <= after);
    }

    #[test]
    fn test_empty_fields_rejected() {
        assert!(matches!(
            NewMessage::new("", "hello"),
            Err(DomainError::Validation(_))
        ));
        assert!(matches!(
            NewMessage::new("bob", ""),
            Err(DomainError::Validation(_))
        ));
    }

    #[test]
    fn test_whitespace_is_kept_verbatim() {
        let message = NewMessage::new(" ", "  hello ").unwrap();
        assert_eq!(message.nickname, " ");
        assert_eq!(message.content, "  hello ");
    }

    #[test]
    fn test_length_limits_count_characters() {
        let nickname = "ğ".repeat(MAX_NICKNAME_LEN);
        assert!(NewMessage::new(nickname, "ok").is_ok());

        let too_long = "x".repeat(MAX_NICKNAME_LEN + 1);
        assert!(NewMessage::new(too_long, "ok").is_err());

        let content = "y".repeat(MAX_CONTENT_LEN + 1);
        let err = NewMessage::new("bob", content).unwrap_err();
        assert!(err.to_string().contains("content"));
    }

    #[test]
    fn test_sentiment_set_once() {
        let message = Message::from_new(1, NewMessage::new("bob", "hi").unwrap());
        assert!(!message.is_annotated());

        let annotated = message
            .with_sentiment(Sentiment::new("POSITIVE", Some(0.9)).unwrap())
            .unwrap();
        assert_eq!(annotated.sentiment_label(), Some("POSITIVE"));
        assert_eq!(annotated.sentiment_score(), Some(0.9));

        let again = annotated.with_sentiment(Sentiment::new("NEGATIVE", None).unwrap());
        assert!(matches!(again, Err(DomainError::Conflict(_))));
    }
}
