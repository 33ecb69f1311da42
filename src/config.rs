use std::collections::HashMap;

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::domain::level::LogLevel;
use crate::domain::platform::Platform;
use crate::domain::style::StyleOverrides;

/// Prefix configuration: one string for every level, or a per-level map.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum Prefix {
    Uniform(String),
    PerLevel(HashMap<LogLevel, String>),
}

impl From<&str> for Prefix {
    fn from(prefix: &str) -> Self {
        Prefix::Uniform(prefix.to_string())
    }
}

impl From<String> for Prefix {
    fn from(prefix: String) -> Self {
        Prefix::Uniform(prefix)
    }
}

impl From<HashMap<LogLevel, String>> for Prefix {
    fn from(prefixes: HashMap<LogLevel, String>) -> Self {
        Prefix::PerLevel(prefixes)
    }
}

/// Construction-time options. Every field is optional; unset fields fall
/// back to detection, the environment, or the documented defaults.
///
/// Deserializes from the camelCase shape JS callers pass across the wasm
/// boundary. Unknown fields are a configuration error, not a silent no-op.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct LoggerConfig {
    /// Explicit platform; wins over detection.
    pub platform: Option<Platform>,
    /// Prefix output with elapsed seconds since construction (default true).
    pub timestamp_enabled: Option<bool>,
    /// Partial style-table overrides, merged onto the defaults.
    pub custom_styles: Option<StyleOverrides>,
    pub prefix: Option<Prefix>,
    /// Minimum level; else `LOG_LEVEL` from the environment, else debug.
    pub min_log_level: Option<LogLevel>,
    /// Force JSON-object output (default: only on ECS).
    pub structured: Option<bool>,
    pub service_name: Option<String>,
    pub correlation_id: Option<String>,
    /// Initial context merged into every structured record.
    pub context: Option<Map<String, Value>>,
}

impl LoggerConfig {
    pub fn with_platform(mut self, platform: Platform) -> Self {
        self.platform = Some(platform);
        self
    }

    pub fn with_timestamps(mut self, enabled: bool) -> Self {
        self.timestamp_enabled = Some(enabled);
        self
    }

    pub fn with_custom_styles(mut self, overrides: StyleOverrides) -> Self {
        self.custom_styles = Some(overrides);
        self
    }

    pub fn with_prefix(mut self, prefix: impl Into<Prefix>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    pub fn with_min_log_level(mut self, level: LogLevel) -> Self {
        self.min_log_level = Some(level);
        self
    }

    pub fn with_structured(mut self, structured: bool) -> Self {
        self.structured = Some(structured);
        self
    }

    pub fn with_service_name(mut self, name: impl Into<String>) -> Self {
        self.service_name = Some(name.into());
        self
    }

    pub fn with_correlation_id(mut self, id: impl Into<String>) -> Self {
        self.correlation_id = Some(id.into());
        self
    }

    pub fn with_context(mut self, context: Map<String, Value>) -> Self {
        self.context = Some(context);
        self
    }
}
