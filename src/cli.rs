//! Command-line argument definitions for `ari`.
//!
//! Uses [`clap`] derive macros for argument parsing.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Render newline-delimited JSON log files as aligned human-readable lines.
///
/// Each input line is decoded as one JSON object. Recognized fields
/// (timestamp, thread, level, logger, message, error, exception) print in a
/// fixed order with fixed column widths; everything else ends up in a
/// trailing `Extra` block. Malformed lines are reported and skipped.
#[derive(Debug, Parser)]
#[command(name = "ari", version, about, long_about = None)]
pub struct Cli {
    /// Log files to render, processed in argument order.
    #[arg(required = true, value_name = "JSONLOGFILE")]
    pub files: Vec<PathBuf>,

    /// Control color output.
    ///
    /// `auto` enables colors only when stdout is a TTY and `NO_COLOR` is unset.
    #[arg(short = 'c', long, value_enum)]
    pub color: Option<ColorMode>,

    /// Do not convert numbers to be more human friendly.
    #[arg(short = 'r', long)]
    pub raw_numbers: bool,

    /// Verbosity 0, errors only.
    #[arg(short = 'Q', long, conflicts_with_all = ["terse", "verbose", "verbosity"])]
    pub quiet: bool,

    /// Verbosity 1, limited field output.
    #[arg(short = 'T', long, conflicts_with_all = ["verbose", "verbosity"])]
    pub terse: bool,

    /// Verbosity 2, all visual output.
    #[arg(short = 'v', long, conflicts_with = "verbosity")]
    pub verbose: bool,

    /// Set verbosity directly (0-2).
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u8).range(0..=2))]
    pub verbosity: Option<u8>,

    /// Path to configuration file.
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// The verbosity selected by flags, if any flag was given.
    pub fn verbosity_override(&self) -> Option<u8> {
        if self.quiet {
            Some(0)
        } else if self.terse {
            Some(1)
        } else if self.verbose {
            Some(2)
        } else {
            self.verbosity
        }
    }
}

/// Color output mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    /// Enable colors only when stdout is a TTY.
    Auto,
    /// Always enable colors.
    Always,
    /// Never enable colors.
    Never,
}
