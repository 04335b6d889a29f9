//! Append-only log files written by the shell.
//!
//! Files are opened for every write and closed when the handle drops, so a
//! command that fails halfway still releases its log.

use chrono::Local;
use cmd_script_error::{Result, ShellError};
use std::backtrace::Backtrace;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Timestamp prefix of every activity log header
pub const TIMESTAMP_FORMAT: &str = "%H:%M:%S %d.%m.%y";

/// Indentation of result lines below a header
const RESULT_INDENT: &str = "       ";

fn open_append(path: &Path) -> Result<File> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    Ok(file)
}

/// Activity log receiving one entry per command invocation
#[derive(Debug, Clone)]
pub struct ActivityLog {
    path: PathBuf,
}

impl ActivityLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Open the log and write the header of a new entry
    pub fn begin(&self, command: &str, argument: Option<&str>) -> Result<LogEntry> {
        let mut file = open_append(&self.path)?;

        let timestamp = Local::now().format(TIMESTAMP_FORMAT);
        match argument {
            Some(arg) => writeln!(file, "{}: command - {} - {}", timestamp, command, arg)?,
            None => writeln!(file, "{}: command - {}", timestamp, command)?,
        }

        Ok(LogEntry { file })
    }
}

/// An open activity log entry; dropping it closes the file
pub struct LogEntry {
    file: File,
}

impl LogEntry {
    /// Append an indented result line
    pub fn line(&mut self, text: impl std::fmt::Display) -> Result<()> {
        writeln!(self.file, "{}{}", RESULT_INDENT, text)?;
        Ok(())
    }
}

/// Error log, one line per failed command
#[derive(Debug, Clone)]
pub struct ErrorLog {
    path: PathBuf,
    debug: bool,
}

impl ErrorLog {
    pub fn new(path: impl Into<PathBuf>, debug: bool) -> Self {
        Self {
            path: path.into(),
            debug,
        }
    }

    /// Backtrace to attach to a failure, captured only in debug mode
    pub fn capture(&self) -> Option<Backtrace> {
        self.debug.then(Backtrace::force_capture)
    }

    /// Render `err` as `<kind> - <message> - <backtrace>` on a single line
    pub fn format(&self, err: &ShellError, backtrace: Option<&Backtrace>) -> String {
        let frames = backtrace
            .map(|bt| {
                bt.to_string()
                    .lines()
                    .map(str::trim)
                    .filter(|frame| !frame.is_empty())
                    .collect::<Vec<_>>()
                    .join(" | ")
            })
            .unwrap_or_default();

        format!("{} - {} - {}", err.kind(), err, frames)
    }

    /// Append `err` to the log and return the rendered line
    pub fn record(&self, err: &ShellError, backtrace: Option<&Backtrace>) -> Result<String> {
        let line = self.format(err, backtrace);

        let mut file = open_append(&self.path)?;
        writeln!(file, "{}", line)?;

        Ok(line)
    }
}

/// Fallback log receiving raw "command not found" diagnostics
#[derive(Debug, Clone)]
pub struct DiagnosticLog {
    path: PathBuf,
}

impl DiagnosticLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn record(&self, err: &ShellError) -> Result<()> {
        let mut file = open_append(&self.path)?;
        writeln!(file, "{}: {}", err.kind(), err)?;
        Ok(())
    }
}
