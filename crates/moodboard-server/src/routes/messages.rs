//! Message Routes
//!
//! HTTP handlers that delegate to MessageService for business logic.

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    routing::get,
    Json, Router,
};

use moodboard::DomainError;

use crate::models::{CreateMessageRequest, MessageResponse};
use crate::AppState;

/// Map a domain error onto an HTTP status and message
fn to_http_error(e: DomainError) -> (StatusCode, String) {
    match e {
        DomainError::Validation(msg) => (StatusCode::BAD_REQUEST, msg),
        DomainError::NotFound { .. } => (StatusCode::NOT_FOUND, e.to_string()),
        _ => {
            tracing::error!("Request failed: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        }
    }
}

/// List all messages
#[utoipa::path(
    get,
    path = "/messages",
    responses(
        (status = 200, description = "All messages, oldest first", body = Vec<MessageResponse>),
        (status = 500, description = "Internal server error")
    ),
    tag = "Messages"
)]
pub async fn list_messages(
    State(state): State<AppState>,
) -> Result<Json<Vec<MessageResponse>>, (StatusCode, String)> {
    let messages = state
        .message_service
        .list_all()
        .await
        .map_err(to_http_error)?;

    Ok(Json(messages.into_iter().map(Into::into).collect()))
}

/// Post a new message
///
/// The text is classified before the response is sent; a failing or slow
/// classifier only means the message comes back without sentiment.
#[utoipa::path(
    post,
    path = "/messages",
    request_body = CreateMessageRequest,
    responses(
        (status = 201, description = "Message created", body = MessageResponse,
            headers(("Location" = String, description = "URL of the new message"))),
        (status = 400, description = "Missing, empty or oversized nickname/content"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Messages"
)]
pub async fn create_message(
    State(state): State<AppState>,
    Json(payload): Json<CreateMessageRequest>,
) -> Result<(StatusCode, [(header::HeaderName, String); 1], Json<MessageResponse>), (StatusCode, String)>
{
    let message = state
        .message_service
        .create(
            payload.nickname.unwrap_or_default(),
            payload.content.unwrap_or_default(),
        )
        .await
        .map_err(to_http_error)?;

    let location = format!("/messages/{}", message.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(message.into()),
    ))
}

/// Get message by ID
#[utoipa::path(
    get,
    path = "/messages/{id}",
    params(("id" = i64, Path, description = "Message ID")),
    responses(
        (status = 200, description = "Message found", body = MessageResponse),
        (status = 404, description = "Message not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Messages"
)]
pub async fn get_message(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<MessageResponse>, (StatusCode, String)> {
    let message = state
        .message_service
        .get_by_id(id)
        .await
        .map_err(to_http_error)?
        .ok_or_else(|| to_http_error(DomainError::not_found("Message", id)))?;

    Ok(Json(message.into()))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/messages", get(list_messages).post(create_message))
        .route("/messages/:id", get(get_message))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_mapping() {
        let (status, body) = to_http_error(DomainError::Validation("nickname must not be empty".into()));
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, "nickname must not be empty");

        let (status, body) = to_http_error(DomainError::not_found("Message", 3));
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, "Entity not found: Message with id 3");

        let (status, _) = to_http_error(DomainError::Repository("down".into()));
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
