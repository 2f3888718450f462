//! Message Application Service (Use Case)
//!
//! Stores posts and annotates them with the classifier's verdict.

use std::sync::Arc;
use std::time::Duration;

use moodboard::{DomainError, Message, MessageRepository, NewMessage, SentimentClassifier};

/// Default upper bound for one classifier call
pub const DEFAULT_CLASSIFY_TIMEOUT: Duration = Duration::from_secs(10);

/// Application service for Message operations
pub struct MessageService {
    repo: Arc<dyn MessageRepository>,
    classifier: Option<Arc<dyn SentimentClassifier>>,
    classify_timeout: Duration,
}

impl MessageService {
    /// `classifier = None` disables sentiment analysis
    pub fn new(
        repo: Arc<dyn MessageRepository>,
        classifier: Option<Arc<dyn SentimentClassifier>>,
    ) -> Self {
        Self {
            repo,
            classifier,
            classify_timeout: DEFAULT_CLASSIFY_TIMEOUT,
        }
    }

    pub fn with_classify_timeout(mut self, timeout: Duration) -> Self {
        self.classify_timeout = timeout;
        self
    }

    pub fn classification_enabled(&self) -> bool {
        self.classifier.is_some()
    }

    /// Get all messages, oldest first
    pub async fn list_all(&self) -> Result<Vec<Message>, DomainError> {
        self.repo.find_all().await
    }

    /// Get a message by ID
    pub async fn get_by_id(&self, id: i64) -> Result<Option<Message>, DomainError> {
        self.repo.find_by_id(id).await
    }

    /// Create a new message
    ///
    /// Validation and storage errors are returned. Classification is
    /// attempted afterwards and its failures only show up in the log.
    pub async fn create(&self, nickname: String, content: String) -> Result<Message, DomainError> {
        let message = NewMessage::new(nickname, content)?;
        let saved = self.repo.add(&message).await?;

        tracing::info!("Created Message: {} by {}", saved.id, saved.nickname);

        Ok(self.annotate(saved).await)
    }

    /// Attach a sentiment to a freshly stored message, or return it untouched
    async fn annotate(&self, message: Message) -> Message {
        let Some(classifier) = &self.classifier else {
            return message;
        };

        let outcome =
            tokio::time::timeout(self.classify_timeout, classifier.classify(&message.content))
                .await;

        let sentiment = match outcome {
            Ok(Ok(sentiment)) => sentiment,
            Ok(Err(e)) => {
                tracing::warn!("Sentiment analysis failed for message {}: {}", message.id, e);
                return message;
            }
            Err(_) => {
                tracing::warn!(
                    "Sentiment analysis timed out after {:?} for message {}",
                    self.classify_timeout,
                    message.id
                );
                return message;
            }
        };

        let annotated = match message.clone().with_sentiment(sentiment) {
            Ok(annotated) => annotated,
            Err(e) => {
                tracing::warn!("Cannot annotate message {}: {}", message.id, e);
                return message;
            }
        };

        match self.repo.update(&annotated).await {
            Ok(updated) => {
                tracing::info!(
                    "Message {} classified as {} ({:?})",
                    updated.id,
                    updated.sentiment_label().unwrap_or_default(),
                    updated.sentiment_score()
                );
                updated
            }
            Err(e) => {
                tracing::warn!("Failed to store sentiment for message {}: {}", message.id, e);
                message
            }
        }
    }
}
