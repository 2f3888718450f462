use anyhow::Context;
use sqlx::PgPool;
use std::sync::Arc;

use moodboard_server::adapters::PgMessageRepository;
use moodboard_server::config::Settings;
use moodboard_server::{app, AppState};

#[shuttle_runtime::main]
async fn main(
    #[shuttle_shared_db::Postgres] pool: PgPool,
    #[shuttle_runtime::Secrets] secrets: shuttle_runtime::SecretStore,
) -> shuttle_axum::ShuttleAxum {
    tracing::info!("💬 Moodboard API initializing...");

    let settings = Settings::load(&secrets);

    // Run migrations
    sqlx::migrate!()
        .run(&pool)
        .await
        .context("Failed to run database migrations")?;

    tracing::info!("✅ Database migrations completed");

    let repo = Arc::new(PgMessageRepository::new(pool));
    let state = AppState::new(repo, &settings).context("Failed to initialize services")?;

    let router = app(state);

    tracing::info!("📚 Swagger UI: /swagger-ui");
    tracing::info!("✅ Moodboard API ready");

    Ok(router.into())
}
