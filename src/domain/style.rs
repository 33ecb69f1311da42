use serde::Deserialize;

use crate::domain::level::LogLevel;
use crate::domain::platform::Platform;

pub const ANSI_RESET: &str = "\x1b[0m";

/// Display tokens for one platform: one per level, plus the auxiliary
/// `time` (timestamp decoration) and `title` (group header) entries.
///
/// Every field is always populated, so a style lookup can never miss —
/// adding a level without a token is a compile error, not an `undefined`.
#[derive(Debug, Clone, PartialEq)]
pub struct LevelStyles {
    pub debug: String,
    pub info: String,
    pub warn: String,
    pub error: String,
    pub success: String,
    pub group: String,
    pub group_collapsed: String,
    pub time: String,
    pub title: String,
}

impl LevelStyles {
    pub fn token(&self, level: LogLevel) -> &str {
        match level {
            LogLevel::Debug => &self.debug,
            LogLevel::Info => &self.info,
            LogLevel::Warn => &self.warn,
            LogLevel::Error => &self.error,
            LogLevel::Success => &self.success,
            LogLevel::Group => &self.group,
            LogLevel::GroupCollapsed => &self.group_collapsed,
        }
    }

    fn apply(&mut self, overrides: &LevelStyleOverrides) {
        let LevelStyleOverrides {
            debug,
            info,
            warn,
            error,
            success,
            group,
            group_collapsed,
            time,
            title,
        } = overrides;
        if let Some(value) = debug {
            self.debug = value.clone();
        }
        if let Some(value) = info {
            self.info = value.clone();
        }
        if let Some(value) = warn {
            self.warn = value.clone();
        }
        if let Some(value) = error {
            self.error = value.clone();
        }
        if let Some(value) = success {
            self.success = value.clone();
        }
        if let Some(value) = group {
            self.group = value.clone();
        }
        if let Some(value) = group_collapsed {
            self.group_collapsed = value.clone();
        }
        if let Some(value) = time {
            self.time = value.clone();
        }
        if let Some(value) = title {
            self.title = value.clone();
        }
    }
}

/// Partial per-platform style override; unset entries keep the default.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct LevelStyleOverrides {
    pub debug: Option<String>,
    pub info: Option<String>,
    pub warn: Option<String>,
    pub error: Option<String>,
    pub success: Option<String>,
    pub group: Option<String>,
    pub group_collapsed: Option<String>,
    pub time: Option<String>,
    pub title: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields, rename_all = "lowercase")]
pub struct StyleOverrides {
    pub web: Option<LevelStyleOverrides>,
    pub console: Option<LevelStyleOverrides>,
    pub lambda: Option<LevelStyleOverrides>,
    pub ecs: Option<LevelStyleOverrides>,
}

/// Complete platform × level style mapping.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleTable {
    pub web: LevelStyles,
    pub console: LevelStyles,
    pub lambda: LevelStyles,
    pub ecs: LevelStyles,
}

impl StyleTable {
    pub fn defaults() -> Self {
        Self {
            web: LevelStyles {
                debug: "color: #9e9e9e".to_string(),
                info: "color: #2196f3".to_string(),
                warn: "color: #ff9800; font-weight: bold".to_string(),
                error: "color: #f44336; font-weight: bold".to_string(),
                success: "color: #4caf50; font-weight: bold".to_string(),
                group: "font-weight: bold".to_string(),
                group_collapsed: "font-weight: bold".to_string(),
                time: "color: #9e9e9e; font-style: italic".to_string(),
                title: "font-weight: bold; text-decoration: underline".to_string(),
            },
            console: LevelStyles {
                debug: "\x1b[90m[DEBUG]\x1b[0m".to_string(),
                info: "\x1b[36m[INFO]\x1b[0m".to_string(),
                warn: "\x1b[33m[WARN]\x1b[0m".to_string(),
                error: "\x1b[31m[ERROR]\x1b[0m".to_string(),
                success: "\x1b[32m[SUCCESS]\x1b[0m".to_string(),
                group: "\x1b[1m[GROUP]\x1b[0m".to_string(),
                group_collapsed: "\x1b[1m[GROUP]\x1b[0m".to_string(),
                time: "\x1b[90m".to_string(),
                title: "\x1b[1m".to_string(),
            },
            lambda: plain_tags(),
            ecs: plain_tags(),
        }
    }

    pub fn platform(&self, platform: Platform) -> &LevelStyles {
        match platform {
            Platform::Web => &self.web,
            Platform::Console => &self.console,
            Platform::Lambda => &self.lambda,
            Platform::Ecs => &self.ecs,
        }
    }

    /// Shallow-merges overrides per platform; untouched entries keep
    /// their defaults.
    pub fn apply(&mut self, overrides: &StyleOverrides) {
        if let Some(web) = &overrides.web {
            self.web.apply(web);
        }
        if let Some(console) = &overrides.console {
            self.console.apply(console);
        }
        if let Some(lambda) = &overrides.lambda {
            self.lambda.apply(lambda);
        }
        if let Some(ecs) = &overrides.ecs {
            self.ecs.apply(ecs);
        }
    }
}

fn plain_tags() -> LevelStyles {
    LevelStyles {
        debug: "[DEBUG]".to_string(),
        info: "[INFO]".to_string(),
        warn: "[WARN]".to_string(),
        error: "[ERROR]".to_string(),
        success: "[SUCCESS]".to_string(),
        group: "[GROUP]".to_string(),
        group_collapsed: "[GROUP]".to_string(),
        time: String::new(),
        title: String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_platform_has_a_token_for_every_level() {
        let table = StyleTable::defaults();
        for platform in [
            Platform::Web,
            Platform::Console,
            Platform::Lambda,
            Platform::Ecs,
        ] {
            let styles = table.platform(platform);
            for level in [
                LogLevel::Debug,
                LogLevel::Info,
                LogLevel::Warn,
                LogLevel::Error,
                LogLevel::Success,
                LogLevel::Group,
                LogLevel::GroupCollapsed,
            ] {
                // Lambda/ECS tags are always present even though the
                // auxiliary entries may be empty there.
                assert!(
                    !styles.token(level).is_empty(),
                    "missing token for {platform}/{level}"
                );
            }
        }
    }

    #[test]
    fn test_overrides_merge_additively() {
        let mut table = StyleTable::defaults();
        let overrides: StyleOverrides = serde_json::from_str(
            r#"{"web": {"info": "color: rebeccapurple"}}"#,
        )
        .unwrap();
        table.apply(&overrides);
        assert_eq!(table.web.info, "color: rebeccapurple");
        // Un-overridden entries keep their defaults.
        assert_eq!(table.web.warn, StyleTable::defaults().web.warn);
        assert_eq!(table.console, StyleTable::defaults().console);
    }

    #[test]
    fn test_unknown_override_platform_is_rejected() {
        let parsed: Result<StyleOverrides, _> =
            serde_json::from_str(r#"{"mainframe": {}}"#);
        assert!(parsed.is_err());
    }
}
