//! Record decoding and classification.
//!
//! One input line decodes into an ordered sequence of key/value pairs
//! (`serde_json` is built with `preserve_order`, so object iteration follows
//! the source key order). Each pair becomes a [`Datum`], either normalized
//! for a recognized key or passed through untouched, and a severity datum is
//! synthesized when the record carries no explicit `level`.

use serde_json::{Map, Value};

use crate::timestamp;

/// One classified field of a record.
///
/// Immutable once constructed; [`renamed`](Self::renamed) returns a view
/// with a display key set, it does not mutate in place.
#[derive(Debug)]
pub struct Datum {
    original_key: String,
    display_key: Option<&'static str>,
    value: Value,
}

impl Datum {
    /// A datum displayed under its original key.
    pub fn new(original_key: String, value: Value) -> Self {
        Self {
            original_key,
            display_key: None,
            value,
        }
    }

    /// This datum with a display key replacing the original for output.
    pub fn renamed(mut self, display_key: &'static str) -> Self {
        self.display_key = Some(display_key);
        self
    }

    /// The key used for display: the display key when set, the original
    /// key otherwise.
    pub fn key(&self) -> &str {
        self.display_key.unwrap_or(&self.original_key)
    }

    /// The key as it appeared in the source JSON.
    pub fn original_key(&self) -> &str {
        &self.original_key
    }

    pub fn value(&self) -> &Value {
        &self.value
    }
}

/// The classified form of one decoded JSON log record.
///
/// Datums keep the source key order, so extra-block output is deterministic
/// run to run. Warnings carry non-fatal diagnostics (unrecognized timestamp
/// shapes) for the caller to report.
#[derive(Debug, Default)]
pub struct Record {
    pub datums: Vec<Datum>,
    pub warnings: Vec<String>,
}

/// Outcome of decoding and classifying one input line.
#[derive(Debug)]
pub enum LineOutcome {
    /// The line decoded to a JSON object and was classified.
    Record(Record),
    /// Empty or whitespace-only line; nothing to render.
    Blank,
    /// The line is not a JSON object; reported and skipped.
    Malformed(String),
}

/// Decode one raw line and classify it.
pub fn classify_line(line: &str) -> LineOutcome {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return LineOutcome::Blank;
    }

    let parsed: Value = match serde_json::from_str(trimmed) {
        Ok(v) => v,
        Err(e) => return LineOutcome::Malformed(e.to_string()),
    };
    let Value::Object(map) = parsed else {
        return LineOutcome::Malformed("not a JSON object".to_string());
    };

    LineOutcome::Record(classify(map))
}

/// Classify a decoded record's pairs into a [`Record`].
///
/// Recognized keys are normalized and renamed for display:
/// - `error`: kept only when non-empty; marks the record as carrying an error
/// - `level`: string values uppercased; null treated as absent
/// - `message`/`msg`: both displayed as `Message`
/// - `timestamp`/`modtime`: value through the timestamp normalizer
///
/// Every other key passes through unchanged. When no usable `level` was
/// present, a severity datum is appended: `ERROR` if the record carried an
/// error, `INFO` otherwise.
pub fn classify(map: Map<String, Value>) -> Record {
    let mut record = Record {
        datums: Vec::with_capacity(map.len() + 1),
        warnings: Vec::new(),
    };
    let mut level_seen = false;
    let mut error_seen = false;

    for (key, value) in map {
        if key == "error" {
            match value {
                Value::Null => {}
                Value::String(s) if s.is_empty() => {}
                other => {
                    error_seen = true;
                    record.datums.push(Datum::new(key, other).renamed("Error"));
                }
            }
        } else if key == "level" {
            match value {
                // A null level is treated as absent; severity synthesis
                // still applies.
                Value::Null => {}
                Value::String(s) => {
                    level_seen = true;
                    record
                        .datums
                        .push(Datum::new(key, Value::String(s.to_uppercase())).renamed("Level"));
                }
                other => {
                    level_seen = true;
                    record.datums.push(Datum::new(key, other).renamed("Level"));
                }
            }
        } else if key == "message" || key == "msg" {
            record.datums.push(Datum::new(key, value).renamed("Message"));
        } else if key == "timestamp" || key == "modtime" {
            let display = if key == "timestamp" {
                "TimeStamp"
            } else {
                "ModTime"
            };
            let (text, warning) = timestamp::normalize(&value);
            if let Some(w) = warning {
                record.warnings.push(format!("{key}: {w}"));
            }
            record
                .datums
                .push(Datum::new(key, Value::String(text)).renamed(display));
        } else {
            record.datums.push(Datum::new(key, value));
        }
    }

    if !level_seen {
        let severity = if error_seen { "ERROR" } else { "INFO" };
        record.datums.push(
            Datum::new("level".to_string(), Value::String(severity.to_string())).renamed("Level"),
        );
    }

    record
}
