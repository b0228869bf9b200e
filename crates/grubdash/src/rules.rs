//! Field predicates shared by the dish and order checks.
//!
//! Submitted numbers arrive as raw JSON so that the checks, not the body parser,
//! decide whether `"5"`, `5.5` or `-1` is acceptable.

use serde_json::Value;

/// `true` for a present, non-empty JSON string. Any other value fails.
pub fn has_text(field: &Option<Value>) -> bool {
    field
        .as_ref()
        .and_then(Value::as_str)
        .is_some_and(|s| !s.is_empty())
}

/// The submitted string, or empty when absent or not a string.
pub fn text(field: Option<Value>) -> String {
    match field {
        Some(Value::String(s)) => s,
        _ => String::new(),
    }
}

/// A submitted value as it reads in a message: strings unquoted, anything else as JSON.
pub fn shown(field: &Option<Value>) -> String {
    match field {
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
        None => String::new(),
    }
}

/// Whether a submitted value counts as "provided": not null, `false`, `0`, or `""`.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// The value as an integer strictly greater than zero.
///
/// Integral floats (`5.0`) are accepted; fractions, strings, zero and negatives are not.
pub fn positive_integer(value: &Value) -> Option<u64> {
    if let Some(n) = value.as_u64() {
        return (n > 0).then_some(n);
    }
    let f = value.as_f64()?;
    if f.fract() == 0.0 && f >= 1.0 && f <= u64::MAX as f64 {
        Some(f as u64)
    } else {
        None
    }
}

/// A submitted id agrees with the target id when it is not truthy or is the same string.
///
/// A non-string id (e.g. `5`) never agrees.
pub fn ids_agree(submitted: &Option<Value>, target: &str) -> bool {
    match submitted {
        Some(id) if is_truthy(id) => id.as_str() == Some(target),
        _ => true,
    }
}
