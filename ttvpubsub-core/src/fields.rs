//! src/fields.rs
//!
//! Lenient accessors over a parsed `serde_json::Value`. None of these fail: a missing
//! key, a `null`, or a value of the wrong shape all come back as the type's default.

use serde_json::Value;
use tracing::debug;

/// Integer at `key`. Accepts a JSON integer, a JSON number with no fractional part
/// (`500.0`), or a string holding an integer (surrounding whitespace and a leading
/// sign are fine). Anything else is 0.
pub fn int_or_zero(parent: &Value, key: &str) -> i64 {
    match parent.get(key) {
        None | Some(Value::Null) => 0,
        Some(v) => parse_i64(v).unwrap_or_else(|| {
            debug!("field '{}' is not an integer ({}), using 0", key, v);
            0
        }),
    }
}

/// Text at `key`. Strings are taken as-is, other scalars and containers as their JSON text,
/// `null`/missing as "".
pub fn string_or_empty(parent: &Value, key: &str) -> String {
    match parent.get(key) {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

/// Borrowed string at `key`, only if the value really is a JSON string.
pub fn str_field<'a>(parent: &'a Value, key: &str) -> Option<&'a str> {
    parent.get(key).and_then(Value::as_str)
}

/// Nested object at `key`. Present-but-not-an-object counts as absent.
pub fn object_field<'a>(parent: &'a Value, key: &str) -> Option<&'a Value> {
    parent.get(key).filter(|v| v.is_object())
}

fn parse_i64(v: &Value) -> Option<i64> {
    match v {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().and_then(whole_f64)),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

// `i64::MAX as f64` rounds up to 2^63, hence the exclusive upper bound.
fn whole_f64(f: f64) -> Option<i64> {
    if f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64 {
        Some(f as i64)
    } else {
        None
    }
}
