//! Message request/response DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use moodboard::Message;

/// Create Message request
///
/// Both fields are optional at the wire level so that a missing field is
/// reported as a validation error rather than a decode failure.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct CreateMessageRequest {
    #[serde(default)]
    #[schema(example = "ayse")]
    pub nickname: Option<String>,
    #[serde(default)]
    #[schema(example = "Bu harika bir gün!")]
    pub content: Option<String>,
}

/// Message response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MessageResponse {
    pub id: i64,
    pub nickname: String,
    pub content: String,
    pub sent_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = "POSITIVE")]
    pub sentiment_label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = 0.93)]
    pub sentiment_score: Option<f64>,
}

impl From<Message> for MessageResponse {
    fn from(message: Message) -> Self {
        let (sentiment_label, sentiment_score) = match message.sentiment {
            Some(sentiment) => (Some(sentiment.label), sentiment.score),
            None => (None, None),
        };

        Self {
            id: message.id,
            nickname: message.nickname,
            content: message.content,
            sent_at: message.sent_at,
            sentiment_label,
            sentiment_score,
        }
    }
}
