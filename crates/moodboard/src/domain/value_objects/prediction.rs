//! Prediction - Tolerant decoding of classifier responses
//!
//! The classifier answers `{"data": [...]}` where the first element is either
//! a bare label or a `{label, score}` object, and an optional numeric second
//! element carries the score. When both a head score and a numeric second
//! element are present, the second element wins.

use serde_json::Value;

use crate::domain::errors::DomainError;
use crate::domain::value_objects::Sentiment;

/// First element of the `data` array
#[derive(Debug, Clone, PartialEq)]
pub enum PredictionHead {
    /// `"POSITIVE"`
    Label(String),
    /// `{"label": "POSITIVE", "score": 0.6}`, either field may be missing
    Scored {
        label: Option<String>,
        score: Option<f64>,
    },
    /// Anything else (number, null, nested array)
    Unrecognized,
}

impl PredictionHead {
    fn from_value(value: &Value) -> Self {
        match value {
            Value::String(label) => Self::Label(label.clone()),
            Value::Object(fields) => Self::Scored {
                label: fields
                    .get("label")
                    .and_then(Value::as_str)
                    .map(str::to_owned),
                score: fields.get("score").and_then(Value::as_f64),
            },
            _ => Self::Unrecognized,
        }
    }
}

/// Decoded classifier response
#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    /// `None` when `data` is empty
    pub head: Option<PredictionHead>,
    /// Second element of `data`, if numeric
    pub trailing_score: Option<f64>,
}

impl Prediction {
    /// Decode a raw response body
    pub fn from_slice(body: &[u8]) -> Result<Self, DomainError> {
        let value: Value = serde_json::from_slice(body).map_err(|e| {
            DomainError::ExternalService(format!("Classifier returned invalid JSON: {e}"))
        })?;
        Self::from_json(&value)
    }

    /// Decode an already parsed response
    pub fn from_json(value: &Value) -> Result<Self, DomainError> {
        let data = value
            .get("data")
            .and_then(Value::as_array)
            .ok_or_else(|| {
                DomainError::ExternalService("Classifier response has no `data` array".to_string())
            })?;

        Ok(Self {
            head: data.first().map(PredictionHead::from_value),
            trailing_score: data.get(1).and_then(Value::as_f64),
        })
    }

    /// Resolve label and score
    pub fn into_sentiment(self) -> Result<Sentiment, DomainError> {
        let (label, head_score) = match self.head {
            Some(PredictionHead::Label(label)) => (Some(label), None),
            Some(PredictionHead::Scored { label, score }) => (label, score),
            Some(PredictionHead::Unrecognized) | None => (None, None),
        };

        let label = label.filter(|l| !l.is_empty()).ok_or_else(|| {
            DomainError::ExternalService("Classifier response has no label".to_string())
        })?;

        Sentiment::new(label, self.trailing_score.or(head_score))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn decode(value: Value) -> Result<Sentiment, DomainError> {
        Prediction::from_json(&value)?.into_sentiment()
    }

    #[test]
    fn test_label_with_trailing_score() {
        let sentiment = decode(json!({"data": ["NEGATIVE", 0.87]})).unwrap();
        assert_eq!(sentiment.label, "NEGATIVE");
        assert_eq!(sentiment.score, Some(0.87));
    }

    #[test]
    fn test_bare_label() {
        let sentiment = decode(json!({"data": ["NEUTRAL"]})).unwrap();
        assert_eq!(sentiment.label, "NEUTRAL");
        assert_eq!(sentiment.score, None);
    }

    #[test]
    fn test_object_head() {
        let sentiment = decode(json!({"data": [{"label": "POSITIVE", "score": 0.6}]})).unwrap();
        assert_eq!(sentiment.label, "POSITIVE");
        assert_eq!(sentiment.score, Some(0.6));
    }

    #[test]
    fn test_object_head_without_score() {
        let sentiment = decode(json!({"data": [{"label": "POSITIVE"}]})).unwrap();
        assert_eq!(sentiment.score, None);
    }

    #[test]
    fn test_trailing_score_overrides_object_score() {
        let sentiment =
            decode(json!({"data": [{"label": "POSITIVE", "score": 0.6}, 0.9]})).unwrap();
        assert_eq!(sentiment.label, "POSITIVE");
        assert_eq!(sentiment.score, Some(0.9));
    }

    #[test]
    fn test_non_numeric_trailing_element_ignored() {
        let sentiment =
            decode(json!({"data": [{"label": "POSITIVE", "score": 0.6}, "0.9"]})).unwrap();
        assert_eq!(sentiment.score, Some(0.6));
    }

    #[test]
    fn test_non_string_label_is_missing() {
        let prediction = Prediction::from_json(&json!({"data": [{"label": 2, "score": 0.4}]})).unwrap();
        assert_eq!(
            prediction.head,
            Some(PredictionHead::Scored {
                label: None,
                score: Some(0.4)
            })
        );
        assert!(prediction.into_sentiment().is_err());
    }

    #[test]
    fn test_missing_data_array() {
        assert!(Prediction::from_json(&json!({"label": "POSITIVE"})).is_err());
        assert!(Prediction::from_json(&json!({"data": "POSITIVE"})).is_err());
        assert!(Prediction::from_json(&json!(["POSITIVE", 0.5])).is_err());
    }

    #[test]
    fn test_empty_data_or_label() {
        assert!(decode(json!({"data": []})).is_err());
        assert!(decode(json!({"data": ["", 0.5]})).is_err());
        assert!(decode(json!({"data": [null, 0.5]})).is_err());
    }

    #[test]
    fn test_invalid_json_body() {
        let err = Prediction::from_slice(b"<html>502</html>").unwrap_err();
        assert!(matches!(err, DomainError::ExternalService(_)));
    }

    #[test]
    fn test_from_slice_with_extra_fields() {
        let body = br#"{"data": ["POSITIVE", 0.75], "duration": 0.12, "is_generating": false}"#;
        let sentiment = Prediction::from_slice(body).unwrap().into_sentiment().unwrap();
        assert_eq!(sentiment.label, "POSITIVE");
        assert_eq!(sentiment.score, Some(0.75));
    }
}
