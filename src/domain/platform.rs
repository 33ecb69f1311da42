use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::LoggerError;

/// Runtime target shaping output formatting.
///
/// Chosen once at construction time (explicit configuration wins over
/// detection) and immutable for the logger's lifetime. Unknown names are
/// rejected when deserializing a configuration; there is no silent
/// fall-through platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Web,
    Console,
    Lambda,
    Ecs,
}

impl Platform {
    pub fn as_str(self) -> &'static str {
        match self {
            Platform::Web => "web",
            Platform::Console => "console",
            Platform::Lambda => "lambda",
            Platform::Ecs => "ecs",
        }
    }

    /// ECS output is structured JSON unless configuration says otherwise.
    pub fn structured_by_default(self) -> bool {
        matches!(self, Platform::Ecs)
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "web" => Ok(Platform::Web),
            "console" => Ok(Platform::Console),
            "lambda" => Ok(Platform::Lambda),
            "ecs" => Ok(Platform::Ecs),
            _ => Err(LoggerError::InvalidPlatform(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_platforms() {
        assert_eq!("web".parse::<Platform>().unwrap(), Platform::Web);
        assert_eq!("ECS".parse::<Platform>().unwrap(), Platform::Ecs);
    }

    #[test]
    fn test_parse_rejects_unknown_platform() {
        assert!("cloudrun".parse::<Platform>().is_err());
    }

    #[test]
    fn test_only_ecs_defaults_to_structured() {
        assert!(Platform::Ecs.structured_by_default());
        assert!(!Platform::Web.structured_by_default());
        assert!(!Platform::Console.structured_by_default());
        assert!(!Platform::Lambda.structured_by_default());
    }
}
