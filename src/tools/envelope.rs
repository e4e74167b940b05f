//! The success/error result mapping returned by every tool

use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::{Map, Value};

use crate::error::AppError;

/// Key used by the failure shape.
pub const ERROR_KEY: &str = "error";

/// Result of one tool invocation.
///
/// Serializes to a JSON object holding either `{<key>: payload, <echoes>...}`
/// or `{"error": message}`, never both and never neither.
#[derive(Debug, Clone, PartialEq)]
pub enum Envelope {
    Success {
        key: &'static str,
        payload: Value,
        /// Input parameters repeated alongside the payload, in insertion order.
        echoes: Vec<(&'static str, Value)>,
    },
    Error {
        message: String,
    },
}

impl Envelope {
    pub fn success(key: &'static str, payload: Value) -> Self {
        Envelope::Success {
            key,
            payload,
            echoes: Vec::new(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Envelope::Error {
            message: message.into(),
        }
    }

    pub fn from_error(error: &AppError) -> Self {
        Self::error(error.to_string())
    }

    /// Repeats an input parameter next to the payload. No-op on error envelopes.
    pub fn with_echo(mut self, name: &'static str, value: impl Into<Value>) -> Self {
        if let Envelope::Success { echoes, .. } = &mut self {
            echoes.push((name, value.into()));
        }
        self
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Envelope::Error { .. })
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            Envelope::Error { message } => Some(message),
            Envelope::Success { .. } => None,
        }
    }

    pub fn payload(&self) -> Option<&Value> {
        match self {
            Envelope::Success { payload, .. } => Some(payload),
            Envelope::Error { .. } => None,
        }
    }

    pub fn result_key(&self) -> &'static str {
        match self {
            Envelope::Success { key, .. } => key,
            Envelope::Error { .. } => ERROR_KEY,
        }
    }

    pub fn into_value(self) -> Value {
        let mut map = Map::new();
        match self {
            Envelope::Success {
                key,
                payload,
                echoes,
            } => {
                map.insert(key.to_string(), payload);
                for (name, value) in echoes {
                    map.insert(name.to_string(), value);
                }
            }
            Envelope::Error { message } => {
                map.insert(ERROR_KEY.to_string(), Value::String(message));
            }
        }
        Value::Object(map)
    }
}

impl Serialize for Envelope {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Envelope::Success {
                key,
                payload,
                echoes,
            } => {
                let mut map = serializer.serialize_map(Some(1 + echoes.len()))?;
                map.serialize_entry(key, payload)?;
                for (name, value) in echoes {
                    map.serialize_entry(name, value)?;
                }
                map.end()
            }
            Envelope::Error { message } => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry(ERROR_KEY, message)?;
                map.end()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_success_shape() {
        let envelope = Envelope::success("teams", json!([{"abbr": "BOS"}]));
        assert!(!envelope.is_error());
        assert_eq!(envelope.into_value(), json!({"teams": [{"abbr": "BOS"}]}));
    }

    #[test]
    fn test_error_shape() {
        let envelope = Envelope::error("API Error");
        assert_eq!(envelope.error_message(), Some("API Error"));
        assert_eq!(envelope.payload(), None);
        assert_eq!(envelope.into_value(), json!({"error": "API Error"}));
    }

    #[test]
    fn test_echoes_include_absent_values_as_null() {
        let envelope = Envelope::success("games", json!([]))
            .with_echo("team", "BUF")
            .with_echo("month", None::<String>);

        assert_eq!(
            envelope.into_value(),
            json!({"games": [], "team": "BUF", "month": null})
        );
    }

    #[test]
    fn test_echo_on_error_is_ignored() {
        let envelope = Envelope::error("boom").with_echo("team", "BUF");
        assert_eq!(envelope.into_value(), json!({"error": "boom"}));
    }

    #[test]
    fn test_serialize_matches_into_value() {
        let envelope =
            Envelope::success("bracket", json!({"series": []})).with_echo("year", "2024");
        let serialized = serde_json::to_value(&envelope).unwrap();
        assert_eq!(serialized, envelope.into_value());
    }

    #[test]
    fn test_from_app_error_uses_display() {
        let envelope = Envelope::from_error(&AppError::invalid_season_id("1999"));
        assert_eq!(envelope.error_message(), Some("Invalid Season Id 1999"));
        assert_eq!(envelope.result_key(), ERROR_KEY);
    }
}
