//! PgMessageRepository against a real database.
//!
//! Runs only when `DATABASE_URL` points at a Postgres instance; skipped otherwise.

use chrono::{Duration, Utc};
use sqlx::PgPool;

use moodboard::{DomainError, Message, MessageRepository, NewMessage, Sentiment};
use moodboard_server::adapters::PgMessageRepository;

async fn connect() -> Option<PgPool> {
    let Ok(url) = std::env::var("DATABASE_URL") else {
        eprintln!("SKIP: DATABASE_URL not set, skipping Postgres repository test");
        return None;
    };

    let pool = PgPool::connect(&url).await.expect("connect to DATABASE_URL");
    sqlx::migrate!().run(&pool).await.expect("run migrations");
    Some(pool)
}

#[tokio::test]
async fn test_pg_add_update_and_read_back() {
    let Some(pool) = connect().await else {
        return;
    };
    let repo = PgMessageRepository::new(pool);

    let stored = repo
        .add(&NewMessage::new("pg-test", "Bu harika bir gün!").unwrap())
        .await
        .unwrap();
    assert!(stored.id > 0);
    assert_eq!(stored.sentiment, None);

    let annotated = stored
        .clone()
        .with_sentiment(Sentiment::new("POSITIVE", Some(0.93)).unwrap())
        .unwrap();
    let updated = repo.update(&annotated).await.unwrap();
    assert_eq!(updated.sentiment_label(), Some("POSITIVE"));
    assert_eq!(updated.sentiment_score(), Some(0.93));
    assert_eq!(updated.sent_at, stored.sent_at);

    // Second annotation is refused
    let again = stored
        .with_sentiment(Sentiment::new("NEGATIVE", None).unwrap())
        .unwrap();
    assert!(matches!(
        repo.update(&again).await,
        Err(DomainError::Conflict(_))
    ));

    let found = repo.find_by_id(updated.id).await.unwrap();
    assert_eq!(found, Some(updated));
}

#[tokio::test]
async fn test_pg_update_unknown_id() {
    let Some(pool) = connect().await else {
        return;
    };
    let repo = PgMessageRepository::new(pool);

    let ghost = Message::from_new(i64::MAX, NewMessage::new("pg-test", "ghost").unwrap())
        .with_sentiment(Sentiment::new("NEUTRAL", None).unwrap())
        .unwrap();
    assert!(matches!(
        repo.update(&ghost).await,
        Err(DomainError::NotFound { .. })
    ));
}

#[tokio::test]
async fn test_pg_find_all_is_chronological() {
    let Some(pool) = connect().await else {
        return;
    };
    let repo = PgMessageRepository::new(pool);

    let now = Utc::now();
    repo.add(
        &NewMessage::new("pg-test", "later")
            .unwrap()
            .with_sent_at(now + Duration::seconds(1)),
    )
    .await
    .unwrap();
    repo.add(&NewMessage::new("pg-test", "earlier").unwrap().with_sent_at(now))
        .await
        .unwrap();

    let all = repo.find_all().await.unwrap();
    assert!(all.windows(2).all(|w| w[0].sent_at <= w[1].sent_at));
}
