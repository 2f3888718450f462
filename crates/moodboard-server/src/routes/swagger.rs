//! OpenAPI Documentation
//!
//! Centralized API documentation using utoipa.

use utoipa::OpenApi;

use crate::models::{CreateMessageRequest, MessageResponse};
use crate::HealthCheck;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::health_check,
        // Message endpoints
        super::messages::list_messages,
        super::messages::create_message,
        super::messages::get_message,
    ),
    info(
        title = "Moodboard API",
        version = "0.1.0",
        description = "Message board with best-effort sentiment analysis of every post.",
        license(name = "MIT"),
    ),
    servers(
        (url = "/", description = "Current server"),
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Messages", description = "Post and list messages"),
    ),
    components(
        schemas(
            HealthCheck,
            CreateMessageRequest,
            MessageResponse,
        )
    ),
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_message_routes() {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key("/messages"));
        assert!(doc.paths.paths.contains_key("/messages/{id}"));
        assert!(doc.paths.paths.contains_key("/health"));
    }
}
