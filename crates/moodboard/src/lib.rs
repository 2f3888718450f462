//! Moodboard Domain Library
//!
//! Core domain types and interfaces for the Moodboard message board.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain/`): Pure business entities and logic
//!   - `entities/`: Core domain models (Message, NewMessage)
//!   - `value_objects/`: Immutable value types (Sentiment, Prediction)
//!   - `errors/`: Domain-specific error types
//!
//! - **Ports** (`ports/`): Abstract interfaces (traits)
//!   - `repositories/`: Data access interfaces
//!   - `services/`: External service interfaces
//!
//! # Usage
//!
//! ```rust,ignore
//! use moodboard::{Message, NewMessage, Sentiment};
//! use moodboard::{MessageRepository, SentimentClassifier};
//! ```

pub mod domain;
pub mod ports;

// Re-export commonly used types
pub use domain::{
    DomainError, Message, NewMessage, Prediction, PredictionHead, Sentiment, MAX_CONTENT_LEN,
    MAX_LABEL_LEN, MAX_NICKNAME_LEN,
};
pub use ports::{MessageRepository, SentimentClassifier};
