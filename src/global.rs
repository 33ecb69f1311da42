use std::sync::Arc;

use once_cell::sync::Lazy;
use parking_lot::RwLock;

use crate::config::LoggerConfig;
use crate::logger::Logger;

static INSTANCE: Lazy<RwLock<Option<Arc<Logger>>>> = Lazy::new(|| RwLock::new(None));

/// Returns the process-wide logger, constructing it on first access.
///
/// The configuration is honored only by the call that actually constructs
/// the instance; later calls receive the existing logger unchanged until
/// [`reset_instance`] clears it.
pub fn get_instance(config: Option<LoggerConfig>) -> Arc<Logger> {
    if let Some(existing) = INSTANCE.read().as_ref() {
        return existing.clone();
    }
    let mut slot = INSTANCE.write();
    // Another caller may have raced us between the read and the write.
    if let Some(existing) = slot.as_ref() {
        return existing.clone();
    }
    let logger = Arc::new(Logger::new(config.unwrap_or_default()));
    *slot = Some(logger.clone());
    logger
}

/// Clears the singleton so the next access reconfigures from scratch.
/// Intended for test isolation and explicit reconfiguration.
pub fn reset_instance() {
    *INSTANCE.write() = None;
}

/// Delegating handle: re-resolves the current singleton on every call, so
/// call sites holding no reference observe reset-and-reconfigure.
pub fn logger() -> Arc<Logger> {
    get_instance(None)
}
