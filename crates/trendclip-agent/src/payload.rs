//! Result payload normalization.
//!
//! The agent framework double-encodes nested structures: a result may arrive
//! as a raw JSON string, or as an object whose fields are themselves
//! JSON-encoded strings. Normalization converts any of these into a plain
//! field map without ever failing; malformed input degrades to best-effort
//! partial structure.

use serde_json::{Map, Value};

/// A classified agent result payload.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    /// Null, absent, empty-string, or non-object result.
    Empty,
    /// A string the remote sent that is not valid JSON.
    Unparsed(String),
    /// A structured field map, string-encoded fields already unwrapped.
    Structured(Map<String, Value>),
}

impl Payload {
    /// Classify and normalize a raw result value.
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::Null => Payload::Empty,
            Value::String(s) if s.is_empty() => Payload::Empty,
            Value::String(s) => match serde_json::from_str::<Value>(s) {
                Ok(Value::Object(fields)) => Payload::Structured(fields),
                Ok(_) => Payload::Empty,
                Err(_) => Payload::Unparsed(s.clone()),
            },
            Value::Object(fields) => Payload::Structured(unwrap_string_fields(fields)),
            _ => Payload::Empty,
        }
    }

    /// Classify an optional result (absent result is an empty payload).
    pub fn from_result(result: Option<&Value>) -> Self {
        result.map(Self::from_value).unwrap_or(Payload::Empty)
    }

    /// Materialize the payload as a field map safe for lookups.
    /// An unparseable string becomes `{"text": <original>}`.
    pub fn into_map(self) -> Map<String, Value> {
        match self {
            Payload::Empty => Map::new(),
            Payload::Unparsed(text) => {
                let mut fields = Map::new();
                fields.insert("text".to_string(), Value::String(text));
                fields
            }
            Payload::Structured(fields) => fields,
        }
    }
}

/// Shallow-copy an object, replacing each string-valued field with its JSON
/// parse result when the string parses; unparseable strings stay untouched.
fn unwrap_string_fields(fields: &Map<String, Value>) -> Map<String, Value> {
    fields
        .iter()
        .map(|(key, value)| {
            let value = match value {
                Value::String(s) => {
                    serde_json::from_str::<Value>(s).unwrap_or_else(|_| value.clone())
                }
                other => other.clone(),
            };
            (key.clone(), value)
        })
        .collect()
}
