//! Append-only diagnostic trace file.
//!
//! Lines look like `[2026-01-01T00:00:00Z] [INFO] message`. Writes are
//! best-effort: a log that cannot be opened never fails an assessment.

use chrono::{SecondsFormat, Utc};
use std::fmt;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone)]
pub struct DiagnosticLog {
    path: PathBuf,
    min_level: LogLevel,
}

impl DiagnosticLog {
    pub fn new(path: impl Into<PathBuf>, debug: bool) -> Self {
        Self {
            path: path.into(),
            min_level: if debug { LogLevel::Debug } else { LogLevel::Info },
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn debug_enabled(&self) -> bool {
        self.min_level <= LogLevel::Debug
    }

    pub fn debug(&self, message: &str) {
        self.write(LogLevel::Debug, message);
    }

    pub fn info(&self, message: &str) {
        self.write(LogLevel::Info, message);
    }

    pub fn warn(&self, message: &str) {
        self.write(LogLevel::Warn, message);
    }

    pub fn error(&self, message: &str) {
        self.write(LogLevel::Error, message);
    }

    pub fn write(&self, level: LogLevel, message: &str) {
        if level < self.min_level {
            return;
        }
        let line = format_line(&timestamp(), level, message);
        // tolerated: the trace file is informational only
        let _ = crate::io::append_line(&self.path, &line);
    }
}

pub fn timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)
}

pub fn format_line(timestamp: &str, level: LogLevel, message: &str) -> String {
    // keep one entry per line even if the message carries newlines
    let flat = message.replace(['\r', '\n'], " ");
    format!("[{timestamp}] [{level}] {flat}")
}
