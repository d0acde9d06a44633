//! Query-string semantics of filter values.
//!
//! Filter values arrive as loosely typed JSON from the table component. These
//! helpers decide when a value counts as unset, when it counts as true, and
//! how it is written into a query string.

use serde_json::Value;

/// Returns true for values that must not produce a query parameter:
/// `null` and the empty string.
pub fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}

/// Truthiness as the table component sees it.
///
/// `null`, `false`, `0` and `""` are false. Arrays and objects are true even
/// when empty.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Renders a value as query-parameter text.
///
/// Strings are written verbatim, arrays as their comma-joined elements
/// (`null` elements render empty) and objects as compact JSON. Floats with no
/// fractional part render as integers, so `2.0` is written `2`.
pub fn render_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => match n.as_f64() {
            Some(f) if n.is_f64() && f == 0.0 => "0".to_string(),
            Some(f) if n.is_f64() => f.to_string(),
            _ => n.to_string(),
        },
        Value::String(s) => s.clone(),
        Value::Array(items) => items.iter().map(render_value).collect::<Vec<_>>().join(","),
        Value::Object(_) => value.to_string(),
    }
}
