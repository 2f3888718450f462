//! Moodboard API Client

use anyhow::{bail, Context, Result};
use chrono::{DateTime, Utc};
use reqwest::{Client, Response};
use serde::{Deserialize, Serialize};

/// API Client for Moodboard
pub struct MoodboardClient {
    client: Client,
    base_url: String,
}

// ============================================
// API Types
// ============================================

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageResponse {
    pub id: i64,
    pub nickname: String,
    pub content: String,
    pub sent_at: DateTime<Utc>,
    #[serde(default)]
    pub sentiment_label: Option<String>,
    #[serde(default)]
    pub sentiment_score: Option<f64>,
}

#[derive(Debug, Serialize)]
pub struct CreateMessageRequest<'a> {
    pub nickname: &'a str,
    pub content: &'a str,
}

impl MoodboardClient {
    /// Create a new API client
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Test connection with health check
    pub async fn health(&self) -> Result<bool> {
        let url = format!("{}/health", self.base_url);
        tracing::debug!("GET {}", url);
        let resp = self.client.get(&url).send().await?;
        Ok(resp.status().is_success())
    }

    /// List all messages, oldest first
    pub async fn list_messages(&self) -> Result<Vec<MessageResponse>> {
        let url = format!("{}/messages", self.base_url);
        tracing::debug!("GET {}", url);
        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .context("Failed to connect to Moodboard API")?;

        let messages: Vec<MessageResponse> = check(resp)
            .await?
            .json()
            .await
            .context("Failed to parse response")?;

        Ok(messages)
    }

    /// Post a message
    pub async fn post_message(&self, nickname: &str, content: &str) -> Result<MessageResponse> {
        let url = format!("{}/messages", self.base_url);
        tracing::debug!("POST {}", url);
        let resp = self
            .client
            .post(&url)
            .json(&CreateMessageRequest { nickname, content })
            .send()
            .await
            .context("Failed to connect to Moodboard API")?;

        let message: MessageResponse = check(resp)
            .await?
            .json()
            .await
            .context("Failed to parse response")?;

        Ok(message)
    }
}

async fn check(resp: Response) -> Result<Response> {
    if !resp.status().is_success() {
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        bail!("API error ({}): {}", status, body);
    }
    Ok(resp)
}
