//! Application Layer (Use Cases)
//!
//! Orchestrates domain operations and coordinates between
//! repositories and external services.

mod message_service;

pub use message_service::{MessageService, DEFAULT_CLASSIFY_TIMEOUT};
