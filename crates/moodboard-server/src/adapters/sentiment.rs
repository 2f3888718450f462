//! HTTP Sentiment Classifier
//!
//! Calls a Gradio-style prediction endpoint: `POST {base}/api/predict` with
//! `{"data": [text]}`.

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use std::time::Duration;

use moodboard::{DomainError, Prediction, Sentiment, SentimentClassifier};

#[derive(Serialize)]
struct PredictRequest<'a> {
    data: [&'a str; 1],
}

/// HTTP implementation of SentimentClassifier
pub struct HttpSentimentClassifier {
    client: Client,
    endpoint: String,
}

impl HttpSentimentClassifier {
    pub fn new(base_url: &str) -> Result<Self, DomainError> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(5))
            .build()
            .map_err(|e| {
                DomainError::ExternalService(format!("Failed to build HTTP client: {e}"))
            })?;

        Ok(Self {
            client,
            endpoint: format!("{}/api/predict", base_url.trim_end_matches('/')),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl SentimentClassifier for HttpSentimentClassifier {
    async fn classify(&self, text: &str) -> Result<Sentiment, DomainError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(&PredictRequest { data: [text] })
            .send()
            .await
            .map_err(|e| DomainError::ExternalService(format!("Classifier unreachable: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(DomainError::ExternalService(format!(
                "Classifier returned {status}"
            )));
        }

        let body = response.bytes().await.map_err(|e| {
            DomainError::ExternalService(format!("Failed to read classifier response: {e}"))
        })?;

        let prediction = Prediction::from_slice(&body)?;
        tracing::debug!("Classifier prediction: {:?}", prediction);

        prediction.into_sentiment()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_trims_trailing_slash() {
        let classifier = HttpSentimentClassifier::new("http://localhost:7860/").unwrap();
        assert_eq!(classifier.endpoint(), "http://localhost:7860/api/predict");
    }

    #[test]
    fn test_request_shape() {
        let body = serde_json::to_value(PredictRequest { data: ["merhaba"] }).unwrap();
        assert_eq!(body, serde_json::json!({"data": ["merhaba"]}));
    }
}
