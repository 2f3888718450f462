//! Server configuration
//!
//! Values come from Shuttle secrets first, then the process environment
//! (including a `.env` file).

use std::time::Duration;

use crate::application::DEFAULT_CLASSIFY_TIMEOUT;

/// Classifier base URL; unset or empty disables sentiment analysis
pub const AI_URL: &str = "AI_URL";
/// Classifier timeout in seconds
pub const AI_TIMEOUT_SECS: &str = "AI_TIMEOUT_SECS";

/// Application configuration
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub ai_url: Option<String>,
    pub ai_timeout: Duration,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            ai_url: None,
            ai_timeout: DEFAULT_CLASSIFY_TIMEOUT,
        }
    }
}

impl Settings {
    /// Build settings from a key lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let ai_url = lookup(AI_URL)
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty());

        let ai_timeout = match lookup(AI_TIMEOUT_SECS) {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => {
                    tracing::warn!(
                        "⚠️  Invalid {}={:?}, using {:?}",
                        AI_TIMEOUT_SECS,
                        raw,
                        DEFAULT_CLASSIFY_TIMEOUT
                    );
                    DEFAULT_CLASSIFY_TIMEOUT
                }
            },
            None => DEFAULT_CLASSIFY_TIMEOUT,
        };

        Self { ai_url, ai_timeout }
    }

    /// Shuttle secrets, falling back to environment variables
    pub fn load(secrets: &shuttle_runtime::SecretStore) -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| secrets.get(key).or_else(|| std::env::var(key).ok()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn settings(pairs: &[(&str, &str)]) -> Settings {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Settings::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        assert_eq!(settings(&[]), Settings::default());
    }

    #[test]
    fn test_blank_url_disables_classifier() {
        assert_eq!(settings(&[(AI_URL, "")]).ai_url, None);
        assert_eq!(settings(&[(AI_URL, "   ")]).ai_url, None);
    }

    #[test]
    fn test_url_and_timeout() {
        let s = settings(&[(AI_URL, " http://ai:7860 "), (AI_TIMEOUT_SECS, "3")]);
        assert_eq!(s.ai_url.as_deref(), Some("http://ai:7860"));
        assert_eq!(s.ai_timeout, Duration::from_secs(3));
    }

    #[test]
    fn test_bad_timeout_falls_back() {
        assert_eq!(
            settings(&[(AI_TIMEOUT_SECS, "soon")]).ai_timeout,
            DEFAULT_CLASSIFY_TIMEOUT
        );
        assert_eq!(
            settings(&[(AI_TIMEOUT_SECS, "0")]).ai_timeout,
            DEFAULT_CLASSIFY_TIMEOUT
        );
    }
}
