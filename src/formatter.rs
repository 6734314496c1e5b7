//! Fixed-width line rendering for classified records.
//!
//! Priority fields print left to right in table order, each as a
//! `| Label: value ` segment padded to its column width class. Fields the
//! table does not know end up in a single trailing compact block:
//! `| Extra: {"key": value, ...}`.

use std::fmt::Write;

use owo_colors::{OwoColorize, Style};
use serde_json::Value;

use crate::classify::{self, LineOutcome, Record};
use crate::priority::PRIORITY_FIELDS;

/// Classify one raw line and render it into `out`.
///
/// `out` is left empty for blank or malformed lines; classification
/// warnings are dropped here. The CLI driver uses the finer-grained
/// [`classify_line`](crate::classify::classify_line) /
/// [`render_record`] pair so it can report diagnostics.
pub fn format_line(line: &str, use_color: bool, out: &mut String) {
    out.clear();
    if let LineOutcome::Record(record) = classify::classify_line(line) {
        render_record(&record, use_color, out);
    }
}

/// Render one classified record as a single line (no trailing newline).
///
/// Matching is on each datum's *original* key: classification renames the
/// display key, but the renderer scans by the key as it appeared in the
/// source JSON. A record holding both `message` and `msg` therefore emits
/// two `Message` segments, one per table entry.
pub fn render_record(record: &Record, use_color: bool, out: &mut String) {
    let mut fields_used: Vec<&str> = Vec::new();

    for field in PRIORITY_FIELDS {
        for datum in &record.datums {
            if datum.original_key() != field.key {
                continue;
            }
            let text = cell_text(datum.value());
            let width = field.width.chars();
            let plain_len = "| ".len() + field.label.len() + ": ".len() + text.len() + 1;

            if use_color
                && field.key == "level"
                && let Some(style) = level_style(&text)
            {
                // Pad from the unstyled length so ANSI escapes do not
                // disturb column alignment.
                let _ = write!(out, "| {}: {} ", field.label, text.style(style));
                for _ in plain_len..width {
                    out.push(' ');
                }
            } else {
                let segment = format!("| {}: {} ", field.label, text);
                let _ = write!(out, "{segment:<width$}");
            }
            fields_used.push(field.key);
        }
    }

    let mut extra = String::new();
    for datum in &record.datums {
        if fields_used.contains(&datum.original_key()) {
            continue;
        }
        if !extra.is_empty() {
            extra.push_str(", ");
        }
        // Value::String's Display is compact JSON, which quotes and escapes
        // the key; non-string values render in their natural form.
        let _ = write!(extra, "{}: {}", Value::from(datum.key()), datum.value());
    }
    if !extra.is_empty() {
        let _ = write!(out, "| Extra: {{{extra}}}");
    }
}

/// Text for a priority cell: strings bare, null empty, everything else in
/// its compact JSON form.
fn cell_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Style for a level cell value by severity name. Unrecognized names
/// render unstyled.
fn level_style(level: &str) -> Option<Style> {
    match level {
        "TRACE" => Some(Style::new().cyan().bold()),
        "DEBUG" => Some(Style::new().blue().bold()),
        "INFO" => Some(Style::new().green().bold()),
        "WARN" | "WARNING" => Some(Style::new().yellow().bold()),
        "ERROR" => Some(Style::new().red().bold()),
        "FATAL" => Some(Style::new().magenta().bold()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(line: &str) -> String {
        let mut out = String::new();
        format_line(line, false, &mut out);
        out
    }

    #[test]
    fn test_scenario_level_msg_extra() {
        let out = render(r#"{"level":"info","msg":"started","pid":42}"#);
        assert!(out.contains("| Level: INFO"));
        assert!(out.contains("| Message: started"));
        assert!(out.contains(r#"| Extra: {"pid": 42}"#));
    }

    #[test]
    fn test_scenario_error_only() {
        let out = render(r#"{"error":"boom"}"#);
        assert!(out.contains("| Level: ERROR"));
        assert!(out.contains("| Error: boom"));
    }

    #[test]
    fn test_scenario_epoch_zero() {
        let out = render(r#"{"timestamp":0,"message":"x"}"#);
        assert!(out.contains("| TimeStamp: 1970-01-01 00:00:00 UTC"));
    }

    #[test]
    fn test_priority_order_is_table_order() {
        // Source order deliberately scrambled; output follows the table.
        let out = render(r#"{"msg":"m","level":"info","timestamp":0,"logger":"db"}"#);
        let ts = out.find("TimeStamp:").unwrap();
        let level = out.find("Level:").unwrap();
        let logger = out.find("Logger:").unwrap();
        let msg = out.find("Message:").unwrap();
        assert!(ts < level && level < logger && logger < msg);
    }

    #[test]
    fn test_column_widths() {
        let out = render(r#"{"timestamp":0,"level":"info","msg":"x"}"#);
        // Wide timestamp column: segment padded to 37.
        let level_pos = out.find("| Level:").unwrap();
        assert_eq!(level_pos, 37);
        // Narrow level column: next segment starts 17 later.
        let msg_pos = out.find("| Message:").unwrap();
        assert_eq!(msg_pos - level_pos, 17);
    }

    #[test]
    fn test_long_value_not_truncated() {
        let long = "y".repeat(60);
        let out = render(&format!(r#"{{"logger":"{long}"}}"#));
        assert!(out.contains(&long));
    }

    #[test]
    fn test_message_and_msg_render_twice() {
        let out = render(r#"{"message":"a","msg":"b"}"#);
        assert_eq!(out.matches("| Message:").count(), 2);
        let a = out.find("| Message: a").unwrap();
        let b = out.find("| Message: b").unwrap();
        assert!(a < b, "table rank orders the two segments");
    }

    #[test]
    fn test_extra_preserves_source_order() {
        let out = render(r#"{"level":"info","zebra":"z","alpha":"a","middle":1}"#);
        let extra = &out[out.find("| Extra:").unwrap()..];
        let z = extra.find(r#""zebra""#).unwrap();
        let a = extra.find(r#""alpha""#).unwrap();
        let m = extra.find(r#""middle""#).unwrap();
        assert!(z < a && a < m);
    }

    #[test]
    fn test_extra_value_quoting() {
        let out = render(r#"{"level":"info","name":"ari","count":3,"ok":true,"gone":null}"#);
        let extra = &out[out.find("| Extra:").unwrap()..];
        assert!(extra.contains(r#""name": "ari""#));
        assert!(extra.contains(r#""count": 3"#));
        assert!(extra.contains(r#""ok": true"#));
        assert!(extra.contains(r#""gone": null"#));
        assert!(!extra.contains(", }"), "no dangling separator");
    }

    #[test]
    fn test_extra_block_omitted_when_empty() {
        let out = render(r#"{"level":"info","msg":"x"}"#);
        assert!(!out.contains("Extra:"));
    }

    #[test]
    fn test_extra_nested_values_compact_json() {
        let out = render(r#"{"level":"info","http":{"status":200},"tags":["a","b"]}"#);
        let extra = &out[out.find("| Extra:").unwrap()..];
        assert!(extra.contains(r#""http": {"status":200}"#));
        assert!(extra.contains(r#""tags": ["a","b"]"#));
    }

    #[test]
    fn test_modtime_renders_in_extra_with_display_key() {
        let out = render(r#"{"modtime":0,"level":"info"}"#);
        assert!(!out.contains("| ModTime:"));
        assert!(out.contains(r#"| Extra: {"ModTime": "1970-01-01 00:00:00 UTC"}"#));
    }

    #[test]
    fn test_blank_and_malformed_yield_empty() {
        let mut out = String::new();
        format_line("", false, &mut out);
        assert!(out.is_empty());
        format_line("{broken", false, &mut out);
        assert!(out.is_empty());
    }

    #[test]
    fn test_colorized_level_keeps_alignment() {
        let mut plain = String::new();
        let mut colored = String::new();
        let line = r#"{"timestamp":0,"level":"info","msg":"x"}"#;
        format_line(line, false, &mut plain);
        format_line(line, true, &mut colored);
        assert!(colored.contains("\x1b["), "expected ANSI escapes");
        // Message column starts at the same visual offset: strip the
        // escapes and compare.
        let stripped: String = strip_ansi(&colored);
        assert_eq!(stripped, plain);
    }

    fn strip_ansi(s: &str) -> String {
        let mut out = String::with_capacity(s.len());
        let mut chars = s.chars();
        while let Some(c) = chars.next() {
            if c == '\x1b' {
                for esc in chars.by_ref() {
                    if esc == 'm' {
                        break;
                    }
                }
            } else {
                out.push(c);
            }
        }
        out
    }

    #[test]
    fn test_unrecognized_level_renders_unstyled_value() {
        let mut out = String::new();
        format_line(r#"{"level":"verbose"}"#, true, &mut out);
        assert!(out.contains("VERBOSE"));
    }

    #[test]
    fn test_thread_and_exception_match_by_original_key() {
        let out = render(r#"{"thread":"main","exception":"java.lang.Npe"}"#);
        assert!(out.contains("| Thread: main"));
        assert!(out.contains("| Exception: java.lang.Npe"));
        assert!(!out.contains("Extra:"));
    }
}
