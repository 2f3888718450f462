//! Infrastructure Adapters
//!
//! Implementations of domain ports for external systems.

pub mod memory;
pub mod postgres;
pub mod sentiment;

// Re-exports
pub use memory::InMemoryMessageRepository;
pub use postgres::PgMessageRepository;
pub use sentiment::HttpSentimentClassifier;
