//! `ari` — render newline-delimited JSON log files as aligned text lines.
//!
//! This library provides the core classification and rendering functionality
//! for the `ari` CLI tool. Each JSON log record becomes one fixed-width line:
//! recognized fields (timestamp, thread, level, logger, message, error,
//! exception) print in a fixed order with fixed column widths, a severity is
//! derived when absent, and the remaining fields collapse into a trailing
//! compact `Extra` block.
//!
//! # Example
//!
//! ```
//! use ari::format_line;
//!
//! let mut out = String::new();
//! format_line(r#"{"level":"info","msg":"started","pid":42}"#, false, &mut out);
//! assert!(out.contains("| Level: INFO"));
//! assert!(out.contains("| Message: started"));
//! assert!(out.contains(r#"| Extra: {"pid": 42}"#));
//! ```

pub mod classify;
pub mod cli;
pub mod config;
pub mod error;
pub mod formatter;
pub mod priority;
pub mod timestamp;

// Re-export primary API types for convenience.
pub use classify::{Datum, LineOutcome, Record, classify_line};
pub use config::Config;
pub use error::AriError;
pub use formatter::{format_line, render_record};
pub use priority::{ColumnWidth, PRIORITY_FIELDS, PriorityField};
