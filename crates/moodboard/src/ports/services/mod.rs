//! Service Ports
//!
//! Abstract interfaces for external services.

mod sentiment_classifier;

pub use sentiment_classifier::*;
