use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, IsTerminal, Write};
use std::path::Path;
use std::process::ExitCode;

use clap::Parser;

use ari::classify::{LineOutcome, classify_line};
use ari::cli::{Cli, ColorMode};
use ari::config::Config;
use ari::formatter::render_record;

fn main() -> ExitCode {
    // Reset SIGPIPE to default behavior so `ari big.jsonl | head` exits
    // cleanly instead of surfacing a BrokenPipe write error.
    reset_sigpipe();

    let cli = Cli::parse();

    let config = match Config::from_cli(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("ari: {e}");
            return ExitCode::from(1);
        }
    };

    let use_color = resolve_color_mode(config.color_mode);

    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());
    let mut line_buf = String::new();

    for path in &cli.files {
        if config.verbosity >= 1
            && let Err(e) = writeln!(writer, "Processing: {:?}", path.display().to_string())
        {
            return exit_for_write_error(&e);
        }

        // A file that cannot be opened is reported and skipped; the
        // remaining file arguments are still processed.
        let file = match File::open(path) {
            Ok(f) => f,
            Err(e) => {
                eprintln!("ari: {}: {e}", path.display());
                continue;
            }
        };

        if let Err(e) = process_file(path, file, &config, use_color, &mut writer, &mut line_buf) {
            return exit_for_write_error(&e);
        }
    }

    if let Err(e) = writer.flush() {
        return exit_for_write_error(&e);
    }

    ExitCode::SUCCESS
}

/// Render every line of one opened file.
///
/// Read errors abandon the rest of this file only. The returned error is
/// always a stdout write failure.
fn process_file(
    path: &Path,
    file: File,
    config: &Config,
    use_color: bool,
    writer: &mut impl Write,
    line_buf: &mut String,
) -> io::Result<()> {
    let reader = BufReader::new(file);

    for line_result in reader.lines() {
        let line = match line_result {
            Ok(l) => l,
            Err(e) if e.kind() == io::ErrorKind::InvalidData => continue,
            Err(e) => {
                eprintln!("ari: {}: read error: {e}", path.display());
                return Ok(());
            }
        };

        match classify_line(&line) {
            LineOutcome::Blank => {}
            LineOutcome::Malformed(err) => {
                if config.verbosity >= 2 {
                    eprintln!("ari: {}: skipping line {:?}: {err}", path.display(), line);
                } else {
                    eprintln!("ari: {}: skipping line: {err}", path.display());
                }
            }
            LineOutcome::Record(record) => {
                if config.verbosity >= 1 {
                    for warning in &record.warnings {
                        eprintln!("ari: {}: {warning}", path.display());
                    }
                }
                line_buf.clear();
                render_record(&record, use_color, line_buf);
                writeln!(writer, "{line_buf}")?;
            }
        }
    }

    Ok(())
}

fn exit_for_write_error(e: &io::Error) -> ExitCode {
    if e.kind() == io::ErrorKind::BrokenPipe {
        return ExitCode::SUCCESS;
    }
    eprintln!("ari: write error: {e}");
    ExitCode::from(2)
}

fn resolve_color_mode(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            let stdout = io::stdout();
            if !stdout.is_terminal() {
                return false;
            }
            if std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty()) {
                return false;
            }
            if std::env::var("TERM").is_ok_and(|v| v == "dumb") {
                return false;
            }
            if std::env::var_os("FORCE_COLOR").is_some_and(|v| !v.is_empty()) {
                return true;
            }
            true
        }
    }
}

/// Reset SIGPIPE to the default (terminate) behavior.
///
/// By default, Rust ignores SIGPIPE to surface `BrokenPipe` I/O errors.
/// Restoring `SIG_DFL` lets the OS handle the signal normally when output
/// is piped into a pager or `head`.
#[cfg(unix)]
fn reset_sigpipe() {
    unsafe {
        libc::signal(libc::SIGPIPE, libc::SIG_DFL);
    }
}

#[cfg(not(unix))]
fn reset_sigpipe() {}
