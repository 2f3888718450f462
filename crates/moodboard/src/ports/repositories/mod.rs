//! Repository Ports
//!
//! Abstract interfaces for data persistence operations.

mod message_repository;

pub use message_repository::*;
