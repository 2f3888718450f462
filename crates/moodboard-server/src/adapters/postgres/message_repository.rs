//! PostgreSQL implementation of MessageRepository

use async_trait::async_trait;
use sqlx::PgPool;

use moodboard::{DomainError, Message, MessageRepository, NewMessage, Sentiment};

/// PostgreSQL implementation of MessageRepository
pub struct PgMessageRepository {
    pool: PgPool,
}

impl PgMessageRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Internal row type for sqlx mapping
#[derive(sqlx::FromRow)]
struct MessageRow {
    id: i64,
    nickname: String,
    content: String,
    sent_at: chrono::DateTime<chrono::Utc>,
    sentiment_label: Option<String>,
    sentiment_score: Option<f64>,
}

impl From<MessageRow> for Message {
    fn from(row: MessageRow) -> Self {
        Self {
            id: row.id,
            nickname: row.nickname,
            content: row.content,
            sent_at: row.sent_at,
            // A score without a label is never written
            sentiment: row.sentiment_label.map(|label| Sentiment {
                label,
                score: row.sentiment_score,
            }),
        }
    }
}

#[async_trait]
impl MessageRepository for PgMessageRepository {
    async fn add(&self, message: &NewMessage) -> Result<Message, DomainError> {
        let row = sqlx::query_as::<_, MessageRow>(
            r#"
            INSERT INTO messages (nickname, content, sent_at)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(&message.nickname)
        .bind(&message.content)
        .bind(message.sent_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::Repository(e.to_string()))?;

        Ok(row.into())
    }

    async fn update(&self, message: &Message) -> Result<Message, DomainError> {
        let row = sqlx::query_as::<_, MessageRow>(
            r#"
            UPDATE messages
            SET sentiment_label = $2, sentiment_score = $3
            WHERE id = $1 AND sentiment_label IS NULL
            RETURNING *
            "#,
        )
        .bind(message.id)
        .bind(message.sentiment_label())
        .bind(message.sentiment_score())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::Repository(e.to_string()))?;

        if let Some(row) = row {
            return Ok(row.into());
        }

        // Nothing updated: either the id is unknown or it was annotated already
        let exists =
            sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM messages WHERE id = $1)")
                .bind(message.id)
                .fetch_one(&self.pool)
                .await
                .map_err(|e| DomainError::Repository(e.to_string()))?;

        if exists {
            Err(DomainError::Conflict(format!(
                "message {} already has a sentiment",
                message.id
            )))
        } else {
            Err(DomainError::not_found("Message", message.id))
        }
    }

    async fn find_all(&self) -> Result<Vec<Message>, DomainError> {
        let rows = sqlx::query_as::<_, MessageRow>("SELECT * FROM messages ORDER BY sent_at, id")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::Repository(e.to_string()))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Message>, DomainError> {
        let row = sqlx::query_as::<_, MessageRow>("SELECT * FROM messages WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Repository(e.to_string()))?;

        Ok(row.map(Into::into))
    }
}
