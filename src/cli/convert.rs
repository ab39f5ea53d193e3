//! JSON -> shape Value conversion for CLI input

use chrono::{DateTime, Utc};

use crate::Value;

/// Convert serde_json::Value to a shape Value.
///
/// With `parse_dates`, strings that are valid RFC 3339 timestamps become
/// [`Value::Date`] so that `Date` types can be checked from JSON input.
pub fn json_to_value(v: serde_json::Value, parse_dates: bool) -> Value {
    if !parse_dates {
        return Value::from(v);
    }

    match v {
        serde_json::Value::String(s) => match DateTime::parse_from_rfc3339(&s) {
            Ok(date) => Value::Date(date.with_timezone(&Utc)),
            Err(_) => Value::String(s),
        },
        serde_json::Value::Array(arr) => Value::Array(
            arr.into_iter()
                .map(|item| json_to_value(item, parse_dates))
                .collect(),
        ),
        serde_json::Value::Object(obj) => Value::Object(
            obj.into_iter()
                .map(|(k, v)| (k, json_to_value(v, parse_dates)))
                .collect(),
        ),
        other => Value::from(other),
    }
}
