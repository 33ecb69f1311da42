/// Domain module - pure logging logic, free of platform bindings.
///
/// Levels, argument modeling, message formatting, structured-record
/// assembly and the style tables live here; everything printable goes out
/// through the ports.
pub mod format;
pub mod level;
pub mod platform;
pub mod record;
pub mod style;
pub mod value;

pub use level::LogLevel;
pub use platform::Platform;
pub use value::{LogArgs, LogError, LogValue};
