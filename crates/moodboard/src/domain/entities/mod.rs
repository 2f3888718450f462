//! Domain Entities
//!
//! Pure domain models without infrastructure dependencies.
//! - Message: a stored post with its optional sentiment
//! - NewMessage: a validated post that has not been stored yet

mod message;

pub use message::*;
