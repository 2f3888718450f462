//! Moodboard API Server
//!
//! Wires the Moodboard domain to Postgres, the sentiment classifier and an
//! axum router. The binary in `main.rs` runs it on Shuttle.

use axum::{routing::get, Json, Router};
use serde::Serialize;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::{OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;

pub mod adapters;
pub mod application;
pub mod config;
pub mod models;
pub mod routes;

use adapters::HttpSentimentClassifier;
use application::MessageService;
use config::Settings;
use moodboard::{DomainError, MessageRepository, SentimentClassifier};

/// Application state shared across all routes
#[derive(Clone)]
pub struct AppState {
    pub message_service: Arc<MessageService>,
}

impl AppState {
    /// Assemble the service from a repository and the loaded settings
    pub fn new(repo: Arc<dyn MessageRepository>, settings: &Settings) -> Result<Self, DomainError> {
        let classifier: Option<Arc<dyn SentimentClassifier>> = match &settings.ai_url {
            Some(url) => {
                let classifier = HttpSentimentClassifier::new(url)?;
                tracing::info!("🎭 Sentiment analysis enabled: {}", classifier.endpoint());
                Some(Arc::new(classifier))
            }
            None => {
                tracing::warn!("⚠️  No AI_URL set - sentiment analysis disabled");
                None
            }
        };

        let message_service =
            MessageService::new(repo, classifier).with_classify_timeout(settings.ai_timeout);

        Ok(Self {
            message_service: Arc::new(message_service),
        })
    }
}

#[derive(Serialize, ToSchema)]
pub struct HealthCheck {
    status: String,
    message: String,
    version: String,
}

/// Health check
#[utoipa::path(
    get,
    path = "/health",
    responses((status = 200, description = "Service is up", body = HealthCheck)),
    tag = "Health"
)]
pub async fn health_check() -> Json<HealthCheck> {
    Json(HealthCheck {
        status: "ok".to_string(),
        message: "Moodboard API is running".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Build the full router with shared state
pub fn app(state: AppState) -> Router {
    let openapi = routes::swagger::ApiDoc::openapi();

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
        .route("/health", get(health_check))
        .merge(routes::messages::router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
