//! Sentiment Classifier Port
//!
//! Abstract interface for the external sentiment-analysis service.

use async_trait::async_trait;

use crate::domain::{errors::DomainError, Sentiment};

/// Service interface for classifying message text
///
/// Callers treat every error as "no sentiment": classification is
/// best-effort and never fails the operation that requested it.
#[async_trait]
pub trait SentimentClassifier: Send + Sync {
    /// Classify a single text
    async fn classify(&self, text: &str) -> Result<Sentiment, DomainError>;
}
