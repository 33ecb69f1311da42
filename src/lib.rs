// Hexagonal architecture modules
pub mod domain;
pub mod ports;
pub mod adapters;
pub mod facades;

pub mod config;
pub mod errors;
pub mod global;
pub mod logger;
pub mod measure;

// Re-exports for callers and tests
pub use config::{LoggerConfig, Prefix};
pub use domain::level::LogLevel;
pub use domain::platform::Platform;
pub use domain::style::StyleOverrides;
pub use domain::value::{LogArgs, LogError, LogValue};
pub use errors::LoggerError;
pub use global::{get_instance, logger, reset_instance};
pub use logger::Logger;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start_app() -> Result<(), JsValue> {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    Ok(())
}
