/// Adapters module - platform-specific implementations of ports.
pub mod shared;

#[cfg(target_arch = "wasm32")]
pub mod wasm;
#[cfg(not(target_arch = "wasm32"))]
pub mod native;

#[cfg(target_arch = "wasm32")]
pub use wasm::{BrowserConsole as PlatformConsole, Clock};
#[cfg(not(target_arch = "wasm32"))]
pub use native::{AnsiConsole as PlatformConsole, Clock};

use crate::domain::level::LogLevel;
use crate::domain::platform::Platform;

/// Detects the hosting platform.
///
/// On wasm32 the browser check is resolved at compile time: the target is
/// the browser (window or worker), so the answer is always `Web`. Native
/// builds inspect the environment for ECS and Lambda signals.
pub fn detect() -> Platform {
    #[cfg(target_arch = "wasm32")]
    {
        Platform::Web
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        native::detect::detect()
    }
}

/// Default minimum level when the configuration does not set one.
///
/// The browser has no environment to consult; native builds honor
/// `LOG_LEVEL`.
pub fn default_min_level() -> LogLevel {
    #[cfg(target_arch = "wasm32")]
    {
        LogLevel::Debug
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        native::detect::min_level_from_env()
    }
}
