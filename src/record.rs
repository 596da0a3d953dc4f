use serde_json::{Map, Value};

/// Nested key/value structure produced by the command-output parser.
pub type Record = Map<String, Value>;

/// Placeholder written for a leaf key absent from a row's mapping.
pub const MISSING: &str = "N/A";

pub fn missing() -> Value {
    Value::String(MISSING.to_string())
}

/// Text form of a scalar as written by every textual sink.
pub fn cell_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        // Arrays and objects never fail to serialize
        other => serde_json::to_string(other).unwrap_or_default(),
    }
}
