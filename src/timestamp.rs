//! Timestamp normalization for `timestamp` and `modtime` fields.
//!
//! Numeric values are treated as Unix epochs in whole seconds and formatted
//! as a UTC calendar string. String values are checked against a loose
//! ISO 8601 pattern and passed through unchanged either way; a string that
//! does not match the pattern is flagged with a diagnostic.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

/// Display format for normalized epoch timestamps.
const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S UTC";

/// Loose ISO 8601 shape: date, any separator, time, optional fraction,
/// then a GMT/z/Z zone marker.
static ISO8601_LOOSE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\d{4}-?\d{2}-?\d{2}\D\d{2}:?\d{2}:?\d{2}(\.\d*)?(GMT|z|Z)")
        .expect("ISO 8601 pattern is valid")
});

/// Normalize a raw `timestamp`/`modtime` value into a display string.
///
/// Returns the display string and an optional diagnostic for values that
/// could not be interpreted. The display string is empty when the value's
/// type is unrecognized; the field still renders, with an empty value.
pub fn normalize(value: &Value) -> (String, Option<String>) {
    match value {
        Value::Number(n) => {
            let seconds = if let Some(i) = n.as_i64() {
                i
            } else if let Some(f) = n.as_f64() {
                // Fractional seconds are truncated, not rounded.
                #[allow(clippy::cast_possible_truncation)]
                {
                    f.trunc() as i64
                }
            } else {
                return (String::new(), Some(format!("epoch out of range: {n}")));
            };
            match jiff::Timestamp::from_second(seconds) {
                Ok(ts) => {
                    let text = ts
                        .to_zoned(jiff::tz::TimeZone::UTC)
                        .strftime(TIME_FORMAT)
                        .to_string();
                    (text, None)
                }
                Err(_) => (String::new(), Some(format!("epoch out of range: {n}"))),
            }
        }
        Value::String(s) => {
            if ISO8601_LOOSE.is_match(s) {
                (s.clone(), None)
            } else {
                (
                    s.clone(),
                    Some(format!("unrecognized timestamp format: {s:?}")),
                )
            }
        }
        other => (
            String::new(),
            Some(format!(
                "unrecognized timestamp value type: {}",
                type_name(other)
            )),
        ),
    }
}

/// Short JSON type name for diagnostics.
fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
