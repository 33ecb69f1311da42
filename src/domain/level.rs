use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::LoggerError;

/// Log severity levels.
///
/// `Debug` through `Success` carry an ordered priority used by the level
/// filter. `Group` and `GroupCollapsed` are header levels: they have no
/// priority and are never suppressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
    Success,
    Group,
    GroupCollapsed,
}

impl LogLevel {
    /// All declared levels, in priority order with the group levels last.
    pub const ALL: [LogLevel; 7] = [
        LogLevel::Debug,
        LogLevel::Info,
        LogLevel::Warn,
        LogLevel::Error,
        LogLevel::Success,
        LogLevel::Group,
        LogLevel::GroupCollapsed,
    ];

    /// Numeric priority, `None` for the group levels.
    pub fn priority(self) -> Option<u8> {
        match self {
            LogLevel::Debug => Some(0),
            LogLevel::Info => Some(1),
            LogLevel::Warn => Some(2),
            LogLevel::Error => Some(3),
            LogLevel::Success => Some(4),
            LogLevel::Group | LogLevel::GroupCollapsed => None,
        }
    }

    /// Whether a message at this level passes the configured minimum.
    ///
    /// Group headers always pass; a minimum without a priority (a group
    /// level used as minimum) suppresses nothing.
    pub fn passes(self, min: LogLevel) -> bool {
        match (self.priority(), min.priority()) {
            (None, _) => true,
            (Some(_), None) => true,
            (Some(p), Some(m)) => p >= m,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
            LogLevel::Success => "success",
            LogLevel::Group => "group",
            LogLevel::GroupCollapsed => "groupCollapsed",
        }
    }

    /// Uppercase tag used in structured records and bracketed output.
    pub fn tag(self) -> &'static str {
        match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
            LogLevel::Success => "SUCCESS",
            LogLevel::Group => "GROUP",
            LogLevel::GroupCollapsed => "GROUPCOLLAPSED",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogLevel {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            "success" => Ok(LogLevel::Success),
            "group" => Ok(LogLevel::Group),
            "groupcollapsed" => Ok(LogLevel::GroupCollapsed),
            _ => Err(LoggerError::InvalidLevel(s.to_string())),
        }
    }
}
