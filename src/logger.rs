use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;
use serde_json::{Map, Value};

use crate::adapters;
use crate::config::{LoggerConfig, Prefix};
use crate::domain::format::format_values;
use crate::domain::level::LogLevel;
use crate::domain::platform::Platform;
use crate::domain::record::{self, RecordMeta};
use crate::domain::style::{StyleTable, ANSI_RESET};
use crate::domain::value::{LogArgs, LogError, LogValue};
use crate::ports::{ClockPort, ConsolePort};

/// The logger facade.
///
/// Owns the immutable per-instance configuration (platform, styles,
/// structured mode) and the mutable state behind one mutex (minimum
/// level, prefixes, correlation id, context, group depth, timers). Every
/// public operation is synchronous, side-effects one console call per
/// emitted line, and never returns an error or panics under documented
/// usage.
pub struct Logger {
    platform: Platform,
    structured: bool,
    timestamps: bool,
    service_name: Option<String>,
    styles: StyleTable,
    epoch_ms: f64,
    state: Mutex<State>,
    console: Arc<dyn ConsolePort>,
    clock: Arc<dyn ClockPort>,
}

struct State {
    min_level: LogLevel,
    prefixes: HashMap<LogLevel, String>,
    correlation_id: Option<String>,
    context: Map<String, Value>,
    group_depth: usize,
    timers: HashMap<String, f64>,
}

impl Logger {
    /// Builds a logger with the default adapters for the current target.
    pub fn new(config: LoggerConfig) -> Self {
        Self::with_ports(
            config,
            Arc::new(adapters::PlatformConsole::new()),
            Arc::new(adapters::Clock::new()),
        )
    }

    /// Builds a logger over explicit console and clock ports.
    pub fn with_ports(
        config: LoggerConfig,
        console: Arc<dyn ConsolePort>,
        clock: Arc<dyn ClockPort>,
    ) -> Self {
        let platform = config.platform.unwrap_or_else(adapters::detect);
        let structured = config
            .structured
            .unwrap_or_else(|| platform.structured_by_default());
        let timestamps = config.timestamp_enabled.unwrap_or(true);

        let mut styles = StyleTable::defaults();
        if let Some(overrides) = &config.custom_styles {
            styles.apply(overrides);
        }

        let min_level = config
            .min_log_level
            .unwrap_or_else(adapters::default_min_level);

        let epoch_ms = clock.now();
        let logger = Self {
            platform,
            structured,
            timestamps,
            service_name: config.service_name,
            styles,
            epoch_ms,
            state: Mutex::new(State {
                min_level,
                prefixes: HashMap::new(),
                correlation_id: config.correlation_id,
                context: config.context.unwrap_or_default(),
                group_depth: 0,
                timers: HashMap::new(),
            }),
            console,
            clock,
        };
        if let Some(prefix) = config.prefix {
            logger.set_prefix(prefix);
        }
        logger
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    pub fn is_structured(&self) -> bool {
        self.structured
    }

    // --- level calls ---

    pub fn debug(&self, args: impl Into<LogArgs>) {
        self.log(LogLevel::Debug, args.into());
    }

    pub fn info(&self, args: impl Into<LogArgs>) {
        self.log(LogLevel::Info, args.into());
    }

    pub fn warn(&self, args: impl Into<LogArgs>) {
        self.log(LogLevel::Warn, args.into());
    }

    pub fn error(&self, args: impl Into<LogArgs>) {
        self.log(LogLevel::Error, args.into());
    }

    pub fn success(&self, args: impl Into<LogArgs>) {
        self.log(LogLevel::Success, args.into());
    }

    // --- grouping ---

    /// Logs a group header (never filtered) and opens one indent level.
    pub fn group(&self, args: impl Into<LogArgs>) {
        self.log(LogLevel::Group, args.into());
        self.state.lock().group_depth += 1;
    }

    pub fn group_collapsed(&self, args: impl Into<LogArgs>) {
        self.log(LogLevel::GroupCollapsed, args.into());
        self.state.lock().group_depth += 1;
    }

    /// Closes one indent level; depth never goes below zero. No output.
    pub fn group_end(&self) {
        let mut state = self.state.lock();
        state.group_depth = state.group_depth.saturating_sub(1);
    }

    pub fn group_depth(&self) -> usize {
        self.state.lock().group_depth
    }

    // --- configuration state ---

    /// A uniform prefix overwrites every level; a per-level map merges
    /// only the given levels.
    pub fn set_prefix(&self, prefix: impl Into<Prefix>) {
        let mut state = self.state.lock();
        match prefix.into() {
            Prefix::Uniform(value) => {
                for level in LogLevel::ALL {
                    state.prefixes.insert(level, value.clone());
                }
            }
            Prefix::PerLevel(map) => {
                for (level, value) in map {
                    state.prefixes.insert(level, value);
                }
            }
        }
    }

    pub fn set_min_log_level(&self, level: LogLevel) {
        self.state.lock().min_level = level;
    }

    pub fn min_log_level(&self) -> LogLevel {
        self.state.lock().min_level
    }

    pub fn set_correlation_id(&self, id: impl Into<String>) {
        self.state.lock().correlation_id = Some(id.into());
    }

    pub fn correlation_id(&self) -> Option<String> {
        self.state.lock().correlation_id.clone()
    }

    /// Replaces the whole context map.
    pub fn set_context(&self, context: Map<String, Value>) {
        self.state.lock().context = context;
    }

    /// Upserts one context field.
    pub fn add_context(&self, key: impl Into<String>, value: impl Into<Value>) {
        self.state.lock().context.insert(key.into(), value.into());
    }

    pub fn remove_context(&self, key: &str) {
        self.state.lock().context.remove(key);
    }

    /// Returns a copy of the current context.
    pub fn context(&self) -> Map<String, Value> {
        self.state.lock().context.clone()
    }

    pub fn clear_context(&self) {
        self.state.lock().context.clear();
    }

    // --- timers ---

    /// Starts (or restarts) the timer under `label`.
    pub fn time(&self, label: &str) {
        let now = self.clock.now();
        self.state.lock().timers.insert(label.to_string(), now);
    }

    /// Ends the timer and logs the elapsed time; a missing label degrades
    /// to a warning instead of an error.
    pub fn time_end(&self, label: &str) {
        let start = self.state.lock().timers.remove(label);
        match start {
            Some(start) => {
                let elapsed = (self.clock.now() - start).max(0.0).round() as u64;
                self.info(format!("{label}: {elapsed}ms"));
            }
            None => self.warn(format!("Timer '{label}' does not exist")),
        }
    }

    /// Logs the elapsed time without consuming the timer, followed by any
    /// extra values.
    pub fn time_log(&self, label: &str, extra: impl Into<LogArgs>) {
        let start = self.state.lock().timers.get(label).copied();
        match start {
            Some(start) => {
                let elapsed = (self.clock.now() - start).max(0.0).round() as u64;
                let extra: LogArgs = extra.into();
                let mut values = vec![LogValue::Text(format!("{label}: {elapsed}ms"))];
                values.extend(extra.0);
                self.info(values);
            }
            None => self.warn(format!("Timer '{label}' does not exist")),
        }
    }

    // --- dispatch ---

    fn log(&self, level: LogLevel, args: LogArgs) {
        let (min_level, prefix, correlation_id, context, group_depth) = {
            let state = self.state.lock();
            (
                state.min_level,
                state.prefixes.get(&level).cloned(),
                state.correlation_id.clone(),
                state.context.clone(),
                state.group_depth,
            )
        };

        if !level.passes(min_level) {
            return;
        }

        if self.structured || self.platform == Platform::Ecs {
            let record = record::assemble(
                level,
                &args,
                RecordMeta {
                    timestamp_ms: self.clock.now(),
                    service: self.service_name.as_deref(),
                    correlation_id: correlation_id.as_deref(),
                    context: &context,
                    group_depth,
                },
            );
            self.console.print(&record::to_json_line(&record));
            return;
        }

        let (plain, errors) = args.partition();
        let message = format_values(&plain.into_iter().cloned().collect::<Vec<_>>());
        let timestamp = self.elapsed_stamp();
        let indent = "  ".repeat(group_depth);
        let prefix = prefix.map(|p| format!("{p} ")).unwrap_or_default();

        match self.platform {
            Platform::Web => self.emit_web(level, &message, &errors, &timestamp, &indent, &prefix),
            Platform::Console | Platform::Lambda => {
                self.emit_text(level, &message, &errors, &timestamp, &indent, &prefix)
            }
            // ECS always goes through the structured branch above.
            Platform::Ecs => {}
        }
    }

    /// Elapsed seconds since construction, three decimals.
    fn elapsed_stamp(&self) -> String {
        if !self.timestamps {
            return String::new();
        }
        let seconds = (self.clock.now() - self.epoch_ms).max(0.0) / 1000.0;
        format!("{seconds:.3}s")
    }

    fn emit_web(
        &self,
        level: LogLevel,
        message: &str,
        errors: &[&LogError],
        timestamp: &str,
        indent: &str,
        prefix: &str,
    ) {
        let css = self.styles.web.token(level);
        let body = format!("{indent}{prefix}{message}");
        let line = join_non_empty(&[timestamp, body.as_str()]);
        if level == LogLevel::Error && !errors.is_empty() {
            if !message.is_empty() {
                self.console.print_styled(&line, css);
            }
            // Dedicated error primitive keeps the browser's own rendering.
            for error in errors {
                self.console.print_error("", error);
            }
        } else {
            self.console.print_styled(&line, css);
        }
    }

    fn emit_text(
        &self,
        level: LogLevel,
        message: &str,
        errors: &[&LogError],
        timestamp: &str,
        indent: &str,
        prefix: &str,
    ) {
        let styles = self.styles.platform(self.platform);
        let stamp = if timestamp.is_empty() || styles.time.is_empty() {
            timestamp.to_string()
        } else {
            format!("{}{timestamp}{ANSI_RESET}", styles.time)
        };
        let head = join_non_empty(&[stamp.as_str(), styles.token(level)]);
        let body = format!("{indent}{prefix}{message}");

        let with_errors = level == LogLevel::Error && !errors.is_empty();
        if !message.is_empty() || !with_errors {
            self.console
                .print(&join_non_empty(&[head.as_str(), body.as_str()]));
        }
        if with_errors {
            let lead = format!("{indent}{prefix}");
            let decoration = join_non_empty(&[head.as_str(), lead.trim_end()]);
            for error in errors {
                self.console.print_error(&decoration, error);
            }
        }
    }
}

fn join_non_empty(parts: &[&str]) -> String {
    parts
        .iter()
        .filter(|part| !part.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" ")
}
