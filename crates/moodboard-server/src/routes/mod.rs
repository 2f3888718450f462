//! Moodboard API Routes
//!
//! - /messages - Post and list messages
//! - /messages/:id - Single message

pub mod messages;
pub mod swagger;
