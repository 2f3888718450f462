//! Value Objects
//!
//! Immutable objects defined by their attributes rather than identity.

mod prediction;
mod sentiment;

pub use prediction::*;
pub use sentiment::*;
