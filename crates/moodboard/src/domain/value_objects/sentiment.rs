//! Sentiment - Classifier verdict attached to a message

use serde::{Deserialize, Serialize};

use crate::domain::errors::DomainError;

/// Maximum label length in characters
pub const MAX_LABEL_LEN: usize = 50;

/// Label and optional confidence returned by the classifier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sentiment {
    /// e.g. POSITIVE, NEGATIVE, NEUTRAL
    pub label: String,
    /// Confidence, normally in [0, 1]. Stored as the classifier reports it;
    /// the range is not enforced.
    pub score: Option<f64>,
}

impl Sentiment {
    /// A sentiment needs a non-empty label that fits the store
    pub fn new(label: impl Into<String>, score: Option<f64>) -> Result<Self, DomainError> {
        let label = label.into();
        if label.is_empty() {
            return Err(DomainError::Validation(
                "sentiment label must not be empty".to_string(),
            ));
        }
        if label.chars().count() > MAX_LABEL_LEN {
            return Err(DomainError::Validation(format!(
                "sentiment label must be at most {MAX_LABEL_LEN} characters"
            )));
        }
        Ok(Self { label, score })
    }
}
