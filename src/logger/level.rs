//! Log level filtering
//!
//! `logging.level` sets the most verbose severity that is written. Errors
//! always pass; access lines are governed by `logging.access_log` instead.

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

static LOG_LEVEL: OnceLock<LogLevel> = OnceLock::new();

/// Message severity, least verbose first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
}

impl LogLevel {
    /// Whether a message of severity `message` passes this threshold
    pub fn allows(self, message: Self) -> bool {
        message <= self
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "error" => Ok(Self::Error),
            "warn" | "warning" => Ok(Self::Warn),
            "info" => Ok(Self::Info),
            "debug" => Ok(Self::Debug),
            other => Err(format!(
                "Invalid log level '{other}' (expected error, warn, info or debug)"
            )),
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
        };
        f.write_str(name)
    }
}

/// Set the global threshold. Only the first call takes effect.
pub(super) fn init(level: LogLevel) {
    let _ = LOG_LEVEL.set(level);
}

/// Check a message severity against the global threshold (`info` before init)
pub(super) fn enabled(message: LogLevel) -> bool {
    LOG_LEVEL.get().copied().unwrap_or(LogLevel::Info).allows(message)
}
