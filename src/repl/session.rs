//! # REPL session
//!
//! A [`Session`] owns the [`RecordStore`] shared by successive commands and
//! turns each [`Command`] into the lines to print. Errors are returned to the
//! caller untouched; [`Session::run`] is the place where they become the
//! generic user-facing message.
use std::io::{BufRead, Write};

use itertools::Itertools;
use tracing::{debug, warn};

use super::command::Command;
use crate::{
    math_bot::MathBot,
    neighbors::naive_neighbors,
    stars::{LoadMode, RecordStore},
    starbot_errors::StarbotError,
};

/// Printed for any command that fails.
pub const GENERIC_ERROR: &str = "ERROR: We couldn't process your input";

#[derive(Debug, Default)]
pub struct Session {
    store: RecordStore,
    load_mode: LoadMode,
    math: MathBot,
}

impl Session {
    pub fn new(load_mode: LoadMode) -> Self {
        Session {
            load_mode,
            ..Session::default()
        }
    }

    /// Start a session on an already populated store.
    pub fn with_store(store: RecordStore, load_mode: LoadMode) -> Self {
        Session {
            store,
            load_mode,
            math: MathBot::new(),
        }
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    /// Execute one command and return its output lines.
    pub fn execute(&mut self, command: Command) -> Result<Vec<String>, StarbotError> {
        match command {
            Command::Add(a, b) => {
                let sum = self.math.apply(MathBot::add, &a, &b)?;
                Ok(vec![format_decimal(sum)])
            }
            Command::Subtract(a, b) => {
                let diff = self.math.apply(MathBot::subtract, &a, &b)?;
                Ok(vec![format_decimal(diff)])
            }
            Command::Stars(path) => {
                self.store.load_csv(&path, self.load_mode)?;
                Ok(vec![format!("Read {} stars from {}", self.store.len(), path)])
            }
            Command::NaiveNeighbors(query) => naive_neighbors(&self.store, &query),
        }
    }

    /// Parse and execute one input line. A blank line produces no output.
    pub fn execute_line(&mut self, line: &str) -> Result<Vec<String>, StarbotError> {
        match Command::parse(line)? {
            Some(command) => self.execute(command),
            None => Ok(Vec::new()),
        }
    }

    /// Read commands from `input` until end of stream, writing results to `output`.
    ///
    /// A failing command prints [`GENERIC_ERROR`] and the loop goes on; only
    /// I/O errors on `input` or `output` stop it. Bytes that are not valid
    /// UTF-8 are replaced with `U+FFFD` before the line is parsed.
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        mut input: R,
        mut output: W,
    ) -> std::io::Result<()> {
        let mut buf = Vec::new();
        loop {
            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            let decoded = String::from_utf8_lossy(&buf);
            let line = decoded.trim_end_matches(['\n', '\r']);

            match self.execute_line(line) {
                Ok(lines) => {
                    debug!(command = %line.trim(), printed = lines.len(), "command done");
                    if !lines.is_empty() {
                        writeln!(output, "{}", lines.iter().join("\n"))?;
                    }
                }
                Err(err) => {
                    warn!(command = %line.trim(), error = %err, "command failed");
                    writeln!(output, "{GENERIC_ERROR}")?;
                }
            }
            output.flush()?;
        }
        Ok(())
    }
}

/// Render a number the way the REPL prints arithmetic results.
///
/// Magnitudes in `[1e-3, 1e7)` print as plain decimals with at least one
/// fractional digit (`13.5`, `300303.0`); other finite non-zero values use
/// an `E` exponent with the same mantissa rule (`1.0E7`, `1.25E-4`).
pub fn format_decimal(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        let sign = if value < 0.0 { "-" } else { "" };
        return format!("{sign}Infinity");
    }

    let magnitude = value.abs();
    if magnitude == 0.0 || (1e-3..1e7).contains(&magnitude) {
        return format!("{value:?}");
    }

    let scientific = format!("{value:e}");
    match scientific.split_once('e') {
        Some((mantissa, exponent)) if mantissa.contains('.') => format!("{mantissa}E{exponent}"),
        Some((mantissa, exponent)) => format!("{mantissa}.0E{exponent}"),
        None => scientific,
    }
}
