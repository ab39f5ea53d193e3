use std::collections::HashMap;

use chrono::{DateTime, Utc};

/// A JSON-like value checked against a type.
///
/// Integers and floats are kept apart the way JSON parsers report them, but
/// both are `number` to the type language. `Date` has no JSON spelling; it
/// comes from callers that build values directly, or from the CLI's
/// `--parse-dates` option.
///
/// # Examples
///
/// ```
/// use shape_lang::Value;
/// use serde_json::json;
///
/// let value = Value::from(json!({ "name": "Alice", "tags": ["a", 1] }));
/// assert_eq!(value.type_name(), "object");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// JSON null
    Null,

    /// JSON boolean (true/false)
    Boolean(bool),

    /// Floating-point number
    Float(f64),

    /// Integer number (preserved separately from floats). Wide enough for
    /// every integer JSON parsers report, signed or unsigned.
    Integer(i128),

    /// UTF-8 string
    String(String),

    /// Point in time
    Date(DateTime<Utc>),

    /// Array of values (homogeneous or heterogeneous)
    Array(Vec<Value>),

    /// Object with string keys. A key that is absent is "undefined".
    Object(HashMap<String, Value>),
}

impl Value {
    /// Kind name used in validation messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Boolean(_) => "boolean",
            Value::Integer(_) | Value::Float(_) => "number",
            Value::String(_) => "string",
            Value::Date(_) => "Date",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        }
    }

    /// Short rendering of the value for messages. Containers are summarized.
    pub fn describe(&self) -> String {
        match self {
            Value::Null => "null".to_string(),
            Value::Boolean(b) => b.to_string(),
            Value::Integer(n) => n.to_string(),
            Value::Float(n) => n.to_string(),
            Value::String(s) => serde_json::Value::from(s.as_str()).to_string(),
            Value::Date(d) => d.to_rfc3339(),
            Value::Array(items) => format!("array of {} element(s)", items.len()),
            Value::Object(obj) => format!("object with {} key(s)", obj.len()),
        }
    }

    /// Get as float
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Integer(n) => Some(*n as f64),
            Value::Float(n) => Some(*n),
            _ => None,
        }
    }
}

impl From<serde_json::Value> for Value {
    fn from(v: serde_json::Value) -> Self {
        match v {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Boolean(b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Value::Integer(i.into())
                } else if let Some(u) = n.as_u64() {
                    Value::Integer(u.into())
                } else {
                    n.as_f64().map_or(Value::Null, Value::Float)
                }
            }
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(arr) => {
                Value::Array(arr.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(obj) => {
                Value::Object(obj.into_iter().map(|(k, v)| (k, Value::from(v))).collect())
            }
        }
    }
}
